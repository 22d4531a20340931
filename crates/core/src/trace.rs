//! Trace source reading and record parsing.
//!
//! This module turns a line-oriented trace into a stream of accesses. It provides:
//! 1. **Record format:** A one-character operation tag (`r` for read, anything
//!    else for write) followed by a hexadecimal address, e.g. `r 0x1a2b3c4`.
//! 2. **Lenient parsing:** Malformed hexadecimal parses to address 0 rather
//!    than raising an error; a blank line or end of input terminates the trace.
//! 3. **I/O propagation:** Reader failures surface as [`TraceError`].

use std::io::BufRead;

use crate::error::TraceError;

/// Kind of memory access carried by a trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read access.
    Read,
    /// Write access.
    Write,
}

/// One parsed trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Kind of access.
    pub access: Access,
    /// Byte address of the access.
    pub addr: u64,
}

impl TraceRecord {
    /// Parses a single trace line.
    ///
    /// The first non-whitespace character selects the operation: `r` is a
    /// read, any other character a write. The remainder is parsed as a
    /// hexadecimal address with an optional `0x` prefix; text that is not
    /// valid hexadecimal parses to 0. Returns `None` for a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachesim_core::trace::{Access, TraceRecord};
    ///
    /// let record = TraceRecord::parse("r 0x1a2b3c4").unwrap();
    /// assert_eq!(record.access, Access::Read);
    /// assert_eq!(record.addr, 0x1a2b3c4);
    ///
    /// assert!(TraceRecord::parse("   ").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        let op = chars.next()?;
        let rest = chars.as_str().trim_start();
        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);

        Some(Self {
            access: if op == 'r' { Access::Read } else { Access::Write },
            addr: u64::from_str_radix(digits, 16).unwrap_or(0),
        })
    }
}

/// Iterator over the records of a line-oriented trace source.
///
/// Yields records in trace order until the first blank line or end of input;
/// I/O errors from the underlying reader are yielded in place.
#[derive(Debug)]
pub struct TraceReader<R> {
    inner: R,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader as a trace source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => TraceRecord::parse(&line).map(Ok),
            Err(e) => Some(Err(e.into())),
        }
    }
}
