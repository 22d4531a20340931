//! Simulator: owns the cache and drives it from a trace.
//!
//! The trace is consumed strictly in order; each record is one transaction
//! against exactly one set, so correctness of the replacement-policy counters
//! depends on this single ordered control flow.

use std::io::BufRead;

use tracing::debug;

use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::error::{ConfigError, TraceError};
use crate::stats::SimReport;
use crate::trace::{Access, TraceReader, TraceRecord};

/// Top-level simulator: cache state plus the trace-processing loop.
pub struct Simulator {
    /// The simulated cache.
    pub cache: Cache,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the cache geometry is invalid.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let cache = Cache::new(config)?;
        let geometry = cache.geometry();
        debug!(
            sets = geometry.sets,
            ways = geometry.ways,
            block_bytes = geometry.block_bytes,
            policy = ?config.policy,
            write_policy = ?config.write_policy,
            "simulator constructed"
        );
        Ok(Self { cache })
    }

    /// Applies a single trace record to the cache.
    pub fn step(&mut self, record: TraceRecord) {
        match record.access {
            Access::Read => self.cache.read(record.addr),
            Access::Write => self.cache.write(record.addr),
        }
    }

    /// Consumes a trace to exhaustion, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] if the underlying reader fails; records
    /// applied before the failure remain counted.
    ///
    /// # Returns
    ///
    /// The number of records processed.
    pub fn run<R: BufRead>(&mut self, trace: TraceReader<R>) -> Result<u64, TraceError> {
        let mut processed = 0;
        for record in trace {
            self.step(record?);
            processed += 1;
        }
        Ok(processed)
    }

    /// Builds the final report from the accumulated statistics.
    pub fn report(&self) -> SimReport {
        SimReport::new(
            self.cache.stats(),
            self.cache.geometry(),
            self.cache.write_policy(),
        )
    }
}
