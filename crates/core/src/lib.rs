//! Trace-driven single-level cache simulator library.
//!
//! This crate simulates a set-associative hardware cache against a trace of
//! memory accesses. It provides the following:
//! 1. **Cache:** Set/tag decomposition, line storage, and the access state machine.
//! 2. **Policies:** Exact LRU and approximate LFU replacement.
//! 3. **Write handling:** Write-back/write-allocate and write-through/no-write-allocate.
//! 4. **Trace:** Line-oriented trace reading with lenient hexadecimal parsing.
//! 5. **Reporting:** Raw counters, miss rate, memory traffic, and a modeled
//!    average access time.

/// Cache storage, lookup, and replacement (lines, sets, policies).
pub mod cache;
/// Simulator configuration (defaults, policy enums, validated geometry).
pub mod config;
/// Error types (configuration and trace I/O failures).
pub mod error;
/// Simulator driver owning the cache and the trace loop.
pub mod sim;
/// Statistics accumulation and the final report.
pub mod stats;
/// Trace source reading and record parsing.
pub mod trace;

/// Root configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Top-level simulator; construct with `Simulator::new` and drive with `run`.
pub use crate::sim::Simulator;
