//! Approximate Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the line in a set with the fewest recorded accesses.
//! Each line carries a monotonic access counter that is never reset, neither
//! on eviction nor on accesses to other lines, so a line inherits its
//! predecessor's count when refilled. This is a simplified frequency scheme
//! rather than true LFU.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(W) where W is the number of ways (associativity)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Hardware Cost:** Low - single saturating counter per line
//! - **Best Case:** Skewed reuse where a few hot lines dominate
//! - **Worst Case:** Phase changes; stale counts pin formerly-hot lines

use super::ReplacementPolicy;

/// Approximate LFU Policy state.
pub struct LfuPolicy {
    /// Access counters, one per line, indexed `set * ways + way`.
    counters: Vec<u64>,
    /// Number of ways in the cache.
    ways: usize,
}

impl LfuPolicy {
    /// Creates a new approximate-LFU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            counters: vec![0; sets * ways],
            ways,
        }
    }

    /// Returns the access count recorded for a way.
    pub fn count(&self, set: usize, way: usize) -> u64 {
        self.counters[set * self.ways + way]
    }
}

impl ReplacementPolicy for LfuPolicy {
    /// Increments the touched line's access counter.
    ///
    /// No other line in the set is modified, and fills are counted the same
    /// as hits.
    fn touch(&mut self, set: usize, way: usize, _was_valid: bool) {
        self.counters[set * self.ways + way] += 1;
    }

    /// Identifies the victim way to evict.
    ///
    /// Returns the way with the minimum access counter in the set; ties are
    /// broken by the lowest way index.
    fn victim(&self, set: usize) -> usize {
        let base = set * self.ways;
        self.counters[base..base + self.ways]
            .iter()
            .enumerate()
            .min_by_key(|&(_, &counter)| counter)
            .map_or(0, |(way, _)| way)
    }
}
