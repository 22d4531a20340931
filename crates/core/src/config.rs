//! Configuration system for the cache simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline cache geometry (block size, capacity, associativity).
//! 2. **Structures:** `CacheConfig` and the validated `CacheGeometry` derived from it.
//! 3. **Enums:** Replacement policy and write policy variants.
//!
//! Configuration is supplied via JSON (`serde` deserialization) or built directly
//! from CLI flags; use `CacheConfig::default()` for the baseline geometry.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden by CLI flags or a JSON configuration file.
mod defaults {
    /// Default block (line) size in bytes.
    pub const BLOCK_BYTES: usize = 16;

    /// Default total cache capacity in bytes (1 KiB).
    pub const CACHE_BYTES: usize = 1024;

    /// Default associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the cache line that was accessed least recently, tracked
    /// exactly with a per-set recency ordering.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Approximate Least Frequently Used replacement policy.
    ///
    /// Evicts the line with the fewest recorded accesses. The per-line
    /// counter is monotonic: it never resets on eviction or on accesses
    /// to other lines, so this approximates rather than implements LFU.
    #[serde(alias = "Lfu")]
    Lfu,
}

/// Cache write policies.
///
/// The write policy couples two decisions: whether a write hit updates
/// backing storage immediately, and whether a write miss allocates a line.
/// The two pairings that occur in practice are modeled as single variants
/// so every branch point matches on the complete contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum WritePolicy {
    /// Write-back with write-allocate.
    ///
    /// Write hits mark the line dirty and defer the memory update until
    /// eviction; write misses load the block into the cache first.
    #[default]
    #[serde(alias = "WriteBack", alias = "WBWA")]
    WriteBackAllocate,
    /// Write-through with no-write-allocate.
    ///
    /// Every write reaches backing storage immediately; lines are never
    /// dirty and write misses bypass the cache entirely.
    #[serde(alias = "WriteThrough", alias = "WTNA")]
    WriteThroughNoAllocate,
}

/// Cache configuration supplied by the caller.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::CacheConfig;
///
/// let config = CacheConfig::default();
/// assert_eq!(config.block_bytes, 16);
/// assert_eq!(config.size_bytes, 1024);
/// assert_eq!(config.ways, 1);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy, WritePolicy};
///
/// let json = r#"{
///     "block_bytes": 32,
///     "size_bytes": 32768,
///     "ways": 4,
///     "policy": "LFU",
///     "write_policy": "WriteThroughNoAllocate"
/// }"#;
///
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.ways, 4);
/// assert_eq!(config.policy, ReplacementPolicy::Lfu);
/// assert_eq!(config.write_policy, WritePolicy::WriteThroughNoAllocate);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Block (line) size in bytes.
    #[serde(default = "CacheConfig::default_block")]
    pub block_bytes: usize,

    /// Total cache capacity in bytes.
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Associativity (number of ways per set).
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Write policy.
    #[serde(default)]
    pub write_policy: WritePolicy,
}

impl CacheConfig {
    /// Returns the default block size in bytes.
    fn default_block() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Returns the default cache capacity in bytes.
    fn default_size() -> usize {
        defaults::CACHE_BYTES
    }

    /// Returns the default associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Validates the configuration and computes the cache geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroParameter`] when any of the geometry
    /// parameters is zero, and [`ConfigError::InexactGeometry`] when the
    /// capacity does not divide evenly into `block_bytes * ways` sets.
    pub fn geometry(&self) -> Result<CacheGeometry, ConfigError> {
        for (name, value) in [
            ("block_bytes", self.block_bytes),
            ("size_bytes", self.size_bytes),
            ("ways", self.ways),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroParameter { name });
            }
        }

        if self.size_bytes % (self.block_bytes * self.ways) != 0 {
            return Err(ConfigError::InexactGeometry {
                size_bytes: self.size_bytes,
                block_bytes: self.block_bytes,
                ways: self.ways,
            });
        }

        Ok(CacheGeometry {
            block_bytes: self.block_bytes,
            ways: self.ways,
            sets: self.size_bytes / self.block_bytes / self.ways,
        })
    }
}

impl Default for CacheConfig {
    /// Creates the baseline configuration: 16-byte blocks, 1 KiB capacity,
    /// direct-mapped, LRU replacement, write-back with write-allocate.
    fn default() -> Self {
        Self {
            block_bytes: defaults::BLOCK_BYTES,
            size_bytes: defaults::CACHE_BYTES,
            ways: defaults::CACHE_WAYS,
            policy: ReplacementPolicy::default(),
            write_policy: WritePolicy::default(),
        }
    }
}

/// Validated cache geometry derived from a [`CacheConfig`].
///
/// Every instance satisfies `sets * ways * block_bytes == size_bytes` of the
/// originating configuration, with all three factors positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Block (line) size in bytes.
    pub block_bytes: usize,
    /// Associativity (number of ways per set).
    pub ways: usize,
    /// Number of sets.
    pub sets: usize,
}

impl CacheGeometry {
    /// Total cache capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.sets * self.block_bytes * self.ways
    }

    /// Total number of lines across all sets.
    pub fn total_lines(&self) -> usize {
        self.sets * self.ways
    }
}
