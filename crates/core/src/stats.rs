//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of a simulated trace. It provides:
//! 1. **Raw counters:** Reads, writes, misses, and writebacks accumulated by the cache.
//! 2. **Derived metrics:** Miss rate and total memory traffic per write policy.
//! 3. **Performance model:** Closed-form hit time and miss penalty yielding an
//!    estimated average access time.

use std::fmt;

use crate::config::{CacheGeometry, WritePolicy};

/// Raw access counters accumulated over one trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of read accesses.
    pub reads: u64,
    /// Number of read accesses that missed.
    pub read_misses: u64,
    /// Number of write accesses.
    pub writes: u64,
    /// Number of write accesses that missed.
    pub write_misses: u64,
    /// Number of dirty lines flushed on eviction.
    pub writebacks: u64,
}

impl CacheStats {
    /// Total number of accesses recorded.
    pub fn total_accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Combined miss rate over all accesses.
    ///
    /// Returns 0.0 when no access has been recorded; the degenerate case is
    /// reported as zero rather than propagating a division by zero.
    pub fn miss_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            return 0.0;
        }
        (self.read_misses + self.write_misses) as f64 / total as f64
    }

    /// Total traffic to backing storage in blocks.
    ///
    /// Under write-back every miss fetches a block and every writeback
    /// flushes one; under write-through every write reaches memory
    /// regardless of hit or miss, plus the read-miss fills.
    pub fn memory_traffic(&self, write_policy: WritePolicy) -> u64 {
        match write_policy {
            WritePolicy::WriteBackAllocate => {
                self.read_misses + self.write_misses + self.writebacks
            }
            WritePolicy::WriteThroughNoAllocate => self.read_misses + self.writes,
        }
    }
}

/// Final simulation report: raw counters plus the derived performance estimate.
///
/// Built from the cache's statistics and geometry once the trace is
/// exhausted; [`fmt::Display`] renders the raw and performance sections with
/// 4-decimal fixed formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Raw counters copied from the cache.
    pub stats: CacheStats,
    /// Combined miss rate over all accesses.
    pub miss_rate: f64,
    /// Total traffic to backing storage in blocks.
    pub memory_traffic: u64,
    /// Modeled time to serve a hit, in nanoseconds.
    pub hit_time: f64,
    /// Modeled additional time to serve a miss, in nanoseconds.
    pub miss_penalty: f64,
    /// Estimated average access time, in nanoseconds.
    pub average_access_time: f64,
}

impl SimReport {
    /// Computes the report for a finished simulation.
    ///
    /// The cost model scales hit time with capacity, block size, and
    /// associativity, and miss penalty with block size:
    /// `hit_time = 0.25 + 2.5 * capacity_MB + 0.025 * (block / 16) + 0.025 * ways`
    /// with `capacity_MB = capacity / (512 * 1024)`, and
    /// `miss_penalty = 20 + 0.5 * (block / 16)`.
    pub fn new(stats: &CacheStats, geometry: CacheGeometry, write_policy: WritePolicy) -> Self {
        let block = geometry.block_bytes as f64;
        let capacity_mb = geometry.capacity_bytes() as f64 / (512.0 * 1024.0);
        let hit_time =
            0.25 + 2.5 * capacity_mb + 0.025 * (block / 16.0) + 0.025 * geometry.ways as f64;
        let miss_penalty = 20.0 + 0.5 * (block / 16.0);
        let miss_rate = stats.miss_rate();

        Self {
            stats: stats.clone(),
            miss_rate,
            memory_traffic: stats.memory_traffic(write_policy),
            hit_time,
            miss_penalty,
            average_access_time: miss_penalty.mul_add(miss_rate, hit_time),
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ====== Simulation results (raw) ======")?;
        writeln!(f, "  a. number of L1 reads:{:>16}", self.stats.reads)?;
        writeln!(f, "  b. number of L1 read misses:{:>10}", self.stats.read_misses)?;
        writeln!(f, "  c. number of L1 writes:{:>15}", self.stats.writes)?;
        writeln!(f, "  d. number of L1 write misses:{:>9}", self.stats.write_misses)?;
        writeln!(f, "  e. L1 miss rate:{:>22.4}", self.miss_rate)?;
        writeln!(f, "  f. number of writebacks from L1:{:>6}", self.stats.writebacks)?;
        writeln!(f, "  g. total memory traffic:{:>14}", self.memory_traffic)?;
        writeln!(f)?;
        writeln!(f, "  ==== Simulation results (performance) ====")?;
        write!(
            f,
            "  1. average access time:         {:.4} ns",
            self.average_access_time
        )
    }
}
