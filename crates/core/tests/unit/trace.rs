//! # Trace Parsing Tests
//!
//! Tests for trace record parsing, the reader's termination behavior, and
//! driving the simulator from a trace file end to end.

use std::io::{Cursor, Write};

use pretty_assertions::assert_eq;
use rstest::rstest;

use cachesim_core::config::CacheConfig;
use cachesim_core::trace::{Access, TraceReader, TraceRecord};
use cachesim_core::Simulator;

#[rstest]
#[case("r 0x1a2b3c4", Access::Read, 0x1a2b3c4)]
#[case("w 0xdeadbeef", Access::Write, 0xdeadbeef)]
#[case("r ff10", Access::Read, 0xff10)]
#[case("r 0XABC", Access::Read, 0xabc)]
#[case("w 0x0", Access::Write, 0x0)]
fn test_parse_record(#[case] line: &str, #[case] access: Access, #[case] addr: u64) {
    let record = TraceRecord::parse(line).unwrap();
    assert_eq!(record.access, access);
    assert_eq!(record.addr, addr);
}

#[test]
fn test_parse_non_read_tag_is_write() {
    // Any tag other than 'r' counts as a write.
    assert_eq!(TraceRecord::parse("x 0x10").unwrap().access, Access::Write);
    assert_eq!(TraceRecord::parse("W 0x10").unwrap().access, Access::Write);
}

#[test]
fn test_parse_malformed_hex_is_zero() {
    // Lenient base-16 contract: garbage parses to address 0.
    assert_eq!(TraceRecord::parse("r zzzz").unwrap().addr, 0);
    assert_eq!(TraceRecord::parse("r").unwrap().addr, 0);
    assert_eq!(TraceRecord::parse("w 0x").unwrap().addr, 0);
}

#[test]
fn test_parse_blank_line_is_none() {
    assert!(TraceRecord::parse("").is_none());
    assert!(TraceRecord::parse("   \n").is_none());
}

#[test]
fn test_reader_yields_records_in_order() {
    let reader = TraceReader::new(Cursor::new("r 0x0\nw 0x10\nr 0x20\n"));
    let records: Vec<TraceRecord> = reader.map(Result::unwrap).collect();
    assert_eq!(
        records,
        vec![
            TraceRecord {
                access: Access::Read,
                addr: 0x0
            },
            TraceRecord {
                access: Access::Write,
                addr: 0x10
            },
            TraceRecord {
                access: Access::Read,
                addr: 0x20
            },
        ]
    );
}

#[test]
fn test_reader_stops_at_blank_line() {
    let reader = TraceReader::new(Cursor::new("r 0x0\n\nr 0x10\n"));
    let records: Vec<TraceRecord> = reader.map(Result::unwrap).collect();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_reader_empty_input() {
    let mut reader = TraceReader::new(Cursor::new(""));
    assert!(reader.next().is_none());
}

#[test]
fn test_simulator_runs_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "r 0x0").unwrap();
    writeln!(file, "w 0x0").unwrap();
    writeln!(file, "r 0x10").unwrap();
    writeln!(file, "r 0x0").unwrap();
    file.flush().unwrap();

    let mut sim = Simulator::new(&CacheConfig::default()).unwrap();
    let opened = std::fs::File::open(file.path()).unwrap();
    let processed = sim
        .run(TraceReader::new(std::io::BufReader::new(opened)))
        .unwrap();

    assert_eq!(processed, 4);
    let stats = sim.cache.stats();
    assert_eq!(stats.reads, 3);
    assert_eq!(stats.read_misses, 2);
    assert_eq!(stats.writes, 1);
    assert_eq!(stats.write_misses, 0);

    let report = sim.report();
    assert!((report.miss_rate - 0.5).abs() < 1e-12);
    assert_eq!(report.memory_traffic, 2);
}
