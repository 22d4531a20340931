//! Set-Associative Cache Simulator.
//!
//! This module implements a single-level set-associative cache simulated
//! against a stream of read/write addresses. It supports exact-LRU and
//! approximate-LFU replacement and both write-back/write-allocate and
//! write-through/no-write-allocate write handling, and accumulates the
//! hit/miss/writeback statistics the report is derived from.

/// Cache replacement policy implementations (LRU, approximate LFU).
pub mod policies;

use std::fmt;

use tracing::trace;

use self::policies::{LfuPolicy, LruPolicy, ReplacementPolicy};
use crate::config::{CacheConfig, CacheGeometry, ReplacementPolicy as PolicyType, WritePolicy};
use crate::error::ConfigError;
use crate::stats::CacheStats;

/// Cache line entry containing tag, validity, and dirty bits.
#[derive(Clone, Default)]
struct CacheLine {
    tag: u64,
    valid: bool,
    dirty: bool,
}

/// Read-only snapshot of one line's architectural state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineState {
    /// Whether the line holds a block.
    pub valid: bool,
    /// Whether the line holds a write not yet flushed to backing storage.
    pub dirty: bool,
    /// Tag of the occupying block (meaningless while invalid).
    pub tag: u64,
}

/// Single-level set-associative cache.
///
/// Owns `sets * ways` lines in one flat allocation sized at construction,
/// the replacement policy state, and the running access statistics. Every
/// access is a self-contained transaction against exactly one set.
pub struct Cache {
    lines: Vec<CacheLine>,
    geometry: CacheGeometry,
    write_policy: WritePolicy,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl Cache {
    /// Creates a new cache from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configured geometry is zero in any
    /// dimension or does not divide into a whole number of sets.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;

        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            PolicyType::Lru => Box::new(LruPolicy::new(geometry.sets, geometry.ways)),
            PolicyType::Lfu => Box::new(LfuPolicy::new(geometry.sets, geometry.ways)),
        };

        Ok(Self {
            lines: vec![CacheLine::default(); geometry.total_lines()],
            geometry,
            write_policy: config.write_policy,
            policy,
            stats: CacheStats::default(),
        })
    }

    /// Returns the validated geometry this cache was built with.
    pub fn geometry(&self) -> CacheGeometry {
        self.geometry
    }

    /// Returns the configured write policy.
    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// Returns the accumulated access statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Returns the architectural state of one line.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is outside the cache geometry.
    pub fn line_state(&self, set: usize, way: usize) -> LineState {
        assert!(set < self.geometry.sets && way < self.geometry.ways);
        let line = &self.lines[set * self.geometry.ways + way];
        LineState {
            valid: line.valid,
            dirty: line.dirty,
            tag: line.tag,
        }
    }

    /// Decomposes an address into its (tag, set index) pair.
    ///
    /// The mapping is total: `block = addr / block_bytes`,
    /// `tag = block / sets`, `set = block % sets`.
    fn locate(&self, addr: u64) -> (u64, usize) {
        let block = addr / self.geometry.block_bytes as u64;
        let tag = block / self.geometry.sets as u64;
        let set = (block % self.geometry.sets as u64) as usize;
        (tag, set)
    }

    /// Returns the way holding `tag` in `set`, if any valid line matches.
    fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        let base = set * self.geometry.ways;
        self.lines[base..base + self.geometry.ways]
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }

    /// Checks whether the block containing `addr` is currently resident.
    pub fn contains(&self, addr: u64) -> bool {
        let (tag, set) = self.locate(addr);
        self.lookup(set, tag).is_some()
    }

    /// Records a read access.
    ///
    /// A read never marks a line dirty: on a miss the block is filled clean,
    /// evicting (and counting a writeback for) a dirty victim when the set
    /// is full.
    pub fn read(&mut self, addr: u64) {
        let (tag, set) = self.locate(addr);
        self.stats.reads += 1;

        if let Some(way) = self.lookup(set, tag) {
            self.policy.touch(set, way, true);
            return;
        }

        self.stats.read_misses += 1;
        self.fill(set, tag, false);
    }

    /// Records a write access.
    ///
    /// Under write-back/write-allocate a hit marks the line dirty and a miss
    /// takes the read-miss allocation path with the filled line ending dirty.
    /// Under write-through/no-write-allocate the value reaches backing
    /// storage immediately: no line is ever dirtied and a miss bypasses the
    /// cache entirely.
    pub fn write(&mut self, addr: u64) {
        let (tag, set) = self.locate(addr);
        self.stats.writes += 1;

        if let Some(way) = self.lookup(set, tag) {
            self.policy.touch(set, way, true);
            match self.write_policy {
                WritePolicy::WriteBackAllocate => {
                    self.lines[set * self.geometry.ways + way].dirty = true;
                }
                WritePolicy::WriteThroughNoAllocate => {}
            }
            return;
        }

        self.stats.write_misses += 1;
        match self.write_policy {
            WritePolicy::WriteBackAllocate => self.fill(set, tag, true),
            WritePolicy::WriteThroughNoAllocate => {}
        }
    }

    /// Installs the block with `tag` into `set`.
    ///
    /// Prefers an invalid line; otherwise asks the replacement policy for a
    /// victim and counts a writeback if the victim is dirty. The policy is
    /// touched before the tag overwrite in both paths.
    fn fill(&mut self, set: usize, tag: u64, dirty: bool) {
        let base = set * self.geometry.ways;

        if let Some(way) = self.lines[base..base + self.geometry.ways]
            .iter()
            .position(|line| !line.valid)
        {
            self.policy.touch(set, way, false);
            let line = &mut self.lines[base + way];
            line.valid = true;
            line.tag = tag;
            line.dirty = dirty;
            return;
        }

        let way = self.policy.victim(set);
        if self.lines[base + way].dirty {
            self.stats.writebacks += 1;
            trace!(set, way, victim_tag = self.lines[base + way].tag, "writeback on eviction");
        }
        self.policy.touch(set, way, true);
        let line = &mut self.lines[base + way];
        line.tag = tag;
        line.dirty = dirty;
    }

    /// Returns a displayable dump of the cache contents.
    ///
    /// Each set prints its valid lines as a hexadecimal tag with a `D`
    /// marker when dirty, and a `-` placeholder for invalid lines.
    pub fn contents(&self) -> Contents<'_> {
        Contents { cache: self }
    }
}

/// Displayable view of a cache's per-set contents.
pub struct Contents<'c> {
    cache: &'c Cache,
}

impl fmt::Display for Contents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== L1 contents =====")?;
        for set in 0..self.cache.geometry.sets {
            write!(f, "set{set:>4}:")?;
            for way in 0..self.cache.geometry.ways {
                let line = &self.cache.lines[set * self.cache.geometry.ways + way];
                if line.valid {
                    write!(f, "{:>8x}{}", line.tag, if line.dirty { " D" } else { "  " })?;
                } else {
                    write!(f, "    -     ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
