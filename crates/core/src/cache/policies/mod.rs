//! Cache Replacement Policies.
//!
//! Implements the algorithms for selecting victim lines in set-associative caches.
//!
//! # Policies
//!
//! - `Lru`: exact Least Recently Used, tracked with lazy per-set recency counters.
//! - `Lfu`: approximate Least Frequently Used, tracked with monotonic access counters.

/// Approximate Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
/// The cache calls [`touch`](Self::touch) on every access to a line, including
/// the access that fills it, and [`victim`](Self::victim) only when a set has
/// no invalid line left.
pub trait ReplacementPolicy: Send + Sync {
    /// Updates the policy state when a line is accessed.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was accessed.
    /// * `was_valid` - Whether the line already held a block before this
    ///   access (`false` exactly when the access fills an invalid line).
    fn touch(&mut self, set: usize, way: usize, was_valid: bool);

    /// Selects a victim line to evict from a specific set.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn victim(&self, set: usize) -> usize;
}
