//! Word Frequency Benchmarking Tool
//!
//! Measures the analysis pipeline on a large text file (a book, a Wikipedia
//! dump, a log archive) to get realistic throughput numbers and to see where
//! parallel aggregation starts paying off.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: scanning and lowercasing only, tokens are discarded
//! 2. **Sequential**: tokenize + aggregate on the calling thread
//! 3. **Parallel**: tokenize + aggregate on the rayon pool into a sharded table
//! 4. **Top-N**: ranked selection over an already-built table
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/wordfreq_bench /path/to/corpus.txt
//!
//! # Rank a different number of words in the top-N stage (default 10)
//! ./target/release/wordfreq_bench /path/to/corpus.txt 100
//! ```
//!
//! Build with `--features logger-support` and set `RUST_LOG=debug` to see
//! each aggregation's strategy and table size.
//!
//! ## Example Output
//!
//! ```text
//! === Parallel ===
//! --------------------------------
//! Mode        : Parallel
//! Elapsed     : 0.212 s
//! Throughput  : 1.94 GiB/s
//! Tokens      : 71_305_117
//! Tokens/sec  : 336_345_834
//! --------------------------------
//! ```
//!
//! Build with `--release`; use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use log::info;
use wordfreq_core::analyzer::Tokenizer;
use wordfreq_core::{AnalyzerConfig, FrequencyAnalyzer};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: wordfreq_bench <path> [top_n]");
        std::process::exit(1);
    }

    let path = &args[1];
    let top_n = args
        .get(2)
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(10);

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input =
        std::str::from_utf8(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Threads:   {}\n", rayon::current_num_threads());

    bench_tokenize(input);
    bench_aggregate("Sequential", input, AnalyzerConfig::sequential());
    bench_aggregate("Parallel", input, AnalyzerConfig::parallel());
    bench_top_n(input, top_n);

    Ok(())
}

fn bench_tokenize(input: &str) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(input, |_t| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(input, |_t| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_aggregate(label: &str, input: &str, config: AnalyzerConfig) {
    let analyzer = FrequencyAnalyzer::with_config(config);

    println!("=== {} ===", label);

    warmup(|| {
        std::hint::black_box(analyzer.analyze(input));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let table = analyzer.analyze(input);
        tokens = table.total_tokens();
        std::hint::black_box(table);
    });

    print_perf(label, input.len(), elapsed, tokens);
}

fn bench_top_n(input: &str, n: usize) {
    let analyzer = FrequencyAnalyzer::with_config(AnalyzerConfig::parallel());
    let table = analyzer.analyze(input);
    let stats = table.stats();
    info!("{}, mean frequency {:.2}", stats, stats.mean_frequency());

    println!("=== Top-{} (selection only) ===", n);

    warmup(|| {
        std::hint::black_box(table.top_n(n));
    });

    let elapsed = measure(|| {
        std::hint::black_box(table.top_n(n));
    });

    print_perf("Top-N", input.len(), elapsed, 0);

    for entry in table.top_n(n) {
        println!("  {}", entry);
    }
    println!();
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
