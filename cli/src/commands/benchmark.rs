//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Dictionary to segment with
    pub dict: String,

    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::Result as AnyhowResult;
use dictum::{SegmentStats, Segmenter};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let start = Instant::now();
    let lexicon = super::load_lexicon(Path::new(&cmd.dict), false)?;
    let load_time = start.elapsed();

    let text = fs::read_to_string(&cmd.input)?;
    let iterations = cmd.iterations.max(1);
    let segmenter = Segmenter::new(&lexicon);

    println!("Benchmarking segmentation...");
    println!("  Dictionary: {} entries, loaded in {:.3}s", lexicon.iter().len(), load_time.as_secs_f64());
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", iterations);
    println!();

    // Warmup
    let segments = segmenter.segment(&text)?;
    let stats = SegmentStats::from_segments(&segments);

    // Benchmark
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = segmenter.segment(&text)?;
    }
    let elapsed = start.elapsed();

    let avg_secs = elapsed.as_secs_f64() / iterations as f64;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_secs * 1000.0);
    println!("  Throughput: {:.2} MB/s", text.len() as f64 / avg_secs / 1_000_000.0);
    println!(
        "  Segments: {} matched, {} unmatched ({:.1}% coverage)",
        stats.matched_segments,
        stats.unmatched_segments,
        stats.coverage() * 100.0
    );

    Ok(())
}
