//! Cache simulator CLI.
//!
//! This binary wires the simulation core to the outside world. It performs:
//! 1. **Argument parsing:** Cache geometry and policy flags, or a JSON config file.
//! 2. **Trace reading:** Opens the trace file and streams it through the simulator.
//! 3. **Reporting:** Prints the configuration banner, final cache contents, and
//!    the raw/performance result sections.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use cachesim_core::config::{CacheConfig, ReplacementPolicy, WritePolicy};
use cachesim_core::trace::TraceReader;
use cachesim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven single-level set-associative cache simulator",
    long_about = "Simulate a single-level set-associative cache against a trace of\n\
                  read/write accesses and report hit/miss statistics and an estimated\n\
                  average access time.\n\n\
                  Each trace line is `r <hex-addr>` or `w <hex-addr>`.\n\n\
                  Examples:\n  \
                  cachesim --block-size 32 --cache-size 32768 --assoc 4 traces/gcc.txt\n  \
                  cachesim --policy lfu --write-policy wt traces/go.txt\n  \
                  cachesim --config l1.json traces/gcc.txt"
)]
struct Cli {
    /// Block (line) size in bytes.
    #[arg(long, default_value_t = 16)]
    block_size: usize,

    /// Total cache capacity in bytes.
    #[arg(long, default_value_t = 1024)]
    cache_size: usize,

    /// Associativity (ways per set).
    #[arg(long, default_value_t = 1)]
    assoc: usize,

    /// Replacement policy.
    #[arg(long, value_enum, default_value = "lru")]
    policy: PolicyArg,

    /// Write policy.
    #[arg(long, value_enum, default_value = "wb")]
    write_policy: WritePolicyArg,

    /// JSON configuration file; overrides the geometry and policy flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace file to simulate.
    trace_file: PathBuf,
}

/// Replacement policy selector.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum PolicyArg {
    /// Least recently used.
    Lru,
    /// Approximate least frequently used.
    Lfu,
}

/// Write policy selector.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum WritePolicyArg {
    /// Write-back with write-allocate.
    Wb,
    /// Write-through with no-write-allocate.
    Wt,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    println!("  ===== Simulator configuration =====");
    println!("  L1_BLOCKSIZE:{:>22}", config.block_bytes);
    println!("  L1_SIZE:{:>27}", config.size_bytes);
    println!("  L1_ASSOC:{:>26}", config.ways);
    println!(
        "  L1_REPLACEMENT_POLICY:{:>13}",
        match config.policy {
            ReplacementPolicy::Lru => "lru",
            ReplacementPolicy::Lfu => "lfu",
        }
    );
    println!(
        "  L1_WRITE_POLICY:{:>19}",
        match config.write_policy {
            WritePolicy::WriteBackAllocate => "wbwa",
            WritePolicy::WriteThroughNoAllocate => "wtna",
        }
    );
    println!("  trace_file:{:>24}", cli.trace_file.display().to_string());
    println!("  ===================================");

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: invalid configuration: {e}");
        process::exit(1);
    });

    let file = File::open(&cli.trace_file).unwrap_or_else(|e| {
        eprintln!(
            "\n[!] FATAL: could not open trace '{}': {e}",
            cli.trace_file.display()
        );
        process::exit(1);
    });

    if let Err(e) = sim.run(TraceReader::new(BufReader::new(file))) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }

    println!();
    print!("{}", sim.cache.contents());
    println!();
    println!("{}", sim.report());
}

/// Resolves the effective configuration from the CLI.
///
/// A `--config` JSON file wins over the individual flags; a malformed file is
/// fatal.
fn build_config(cli: &Cli) -> CacheConfig {
    if let Some(path) = &cli.config {
        let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: could not read config '{}': {e}", path.display());
            process::exit(1);
        });
        return serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: invalid config '{}': {e}", path.display());
            process::exit(1);
        });
    }

    CacheConfig {
        block_bytes: cli.block_size,
        size_bytes: cli.cache_size,
        ways: cli.assoc,
        policy: match cli.policy {
            PolicyArg::Lru => ReplacementPolicy::Lru,
            PolicyArg::Lfu => ReplacementPolicy::Lfu,
        },
        write_policy: match cli.write_policy {
            WritePolicyArg::Wb => WritePolicy::WriteBackAllocate,
            WritePolicyArg::Wt => WritePolicy::WriteThroughNoAllocate,
        },
    }
}
