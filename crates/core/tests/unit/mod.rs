//! # Unit Components
//!
//! This module organizes the unit tests by the component they exercise:
//! configuration and geometry validation, the cache access state machine,
//! replacement-policy bookkeeping, trace parsing, and report computation.




/// Unit tests for statistics accumulation and the final report.
pub mod stats;

/// Unit tests for trace record parsing and trace reading.
pub mod trace;
