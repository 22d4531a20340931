//! Error types for the cache simulator.
//!
//! This module defines the failure modes of the simulator. It provides:
//! 1. **Configuration Errors:** Inconsistent cache geometry, rejected at construction.
//! 2. **Trace Errors:** I/O failures while reading a trace source.
//!
//! There is no recoverable error inside the access loop itself: once a
//! geometry validates, every address decomposes to a valid (tag, set) pair,
//! and malformed trace lines parse leniently rather than failing.

use thiserror::Error;

/// Errors raised while validating a cache configuration.
///
/// A simulator must not run with an inconsistent set count, so these are
/// fatal to construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A geometry parameter was zero.
    #[error("cache parameter `{name}` must be positive")]
    ZeroParameter {
        /// Name of the offending configuration field.
        name: &'static str,
    },

    /// The capacity does not divide evenly into sets.
    #[error(
        "cache size {size_bytes} B does not divide evenly into \
         {block_bytes} B blocks across {ways} ways"
    )]
    InexactGeometry {
        /// Total cache capacity in bytes.
        size_bytes: usize,
        /// Block size in bytes.
        block_bytes: usize,
        /// Associativity.
        ways: usize,
    },
}

/// Errors raised while reading a trace source.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}
