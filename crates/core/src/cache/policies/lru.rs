//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest
//! time. Each way carries a recency counter where 0 is the Most Recently Used
//! position and `ways - 1` is the Least Recently Used position. Counters are
//! maintained lazily: an access advances only the counters that sat below the
//! touched line's old position, rather than re-ranking the whole set.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(W) where W is the number of ways (associativity)
//!   - `victim()`: O(W)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Hardware Cost:** High - requires a counter per line and parallel compare
//! - **Best Case:** Accesses with strong temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::ReplacementPolicy;

/// LRU Policy state.
pub struct LruPolicy {
    /// Recency counters, one per line, indexed `set * ways + way`.
    /// 0 is MRU; among the valid lines of a full set the counters form a
    /// permutation of `0..ways`, so `ways - 1` identifies the LRU line.
    counters: Vec<usize>,
    /// Number of ways in the cache.
    ways: usize,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
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

    /// Returns the recency rank of a way (0 = most recently used).
    pub fn rank(&self, set: usize, way: usize) -> usize {
        self.counters[set * self.ways + way]
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Updates the recency counters on access.
    ///
    /// On a touch of an already-valid line, every counter strictly below the
    /// touched line's prior value advances by one; ties are not advanced, so
    /// relative order above the old position is preserved. On a fill of an
    /// invalid line, every counter in the set advances. The touched line then
    /// drops to rank 0.
    fn touch(&mut self, set: usize, way: usize, was_valid: bool) {
        let base = set * self.ways;
        let slots = &mut self.counters[base..base + self.ways];
        if was_valid {
            let prior = slots[way];
            for counter in slots.iter_mut() {
                if *counter < prior {
                    *counter += 1;
                }
            }
        } else {
            for counter in slots.iter_mut() {
                *counter += 1;
            }
        }
        slots[way] = 0;
    }

    /// Identifies the victim way to evict.
    ///
    /// Returns the way whose counter reached `ways - 1`: the single line every
    /// other line in the set has advanced past since its last touch. Should no
    /// counter hold that value the scan falls back to the minimum counter;
    /// with touches applied on every access the counters of a full set always
    /// form a permutation, so the fallback is defensive only.
    fn victim(&self, set: usize) -> usize {
        let base = set * self.ways;
        let slots = &self.counters[base..base + self.ways];
        if let Some(way) = slots.iter().position(|&c| c == self.ways - 1) {
            return way;
        }
        slots
            .iter()
            .enumerate()
            .min_by_key(|&(_, &counter)| counter)
            .map_or(0, |(way, _)| way)
    }
}
