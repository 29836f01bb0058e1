//! Redis keyspace analyzer.
//!
//! Usage:
//! ```
//! cargo run -- --url redis://localhost:6379
//! cargo run -- --nsynth 1000
//! cargo run -- --batchsize 500
//! ```
//!
//! Optionally populates the server with `--nsynth` synthetic records (hash,
//! RedisJSON and string types chosen uniformly), then SCANs the whole
//! keyspace in `--batchsize` batches, queries each key's TYPE and MEMORY
//! USAGE, and prints per-type descriptive statistics.

use anyhow::Result;
use clap::Parser;

use redis_analyzer::redis_utils::{connect, submit_batch};
use redis_analyzer::scan::scan_keyspace;
use redis_analyzer::stats::format_summary;
use redis_analyzer::synth::generate_records;
use redis_analyzer::utils::make_progress_bar;

#[derive(Parser)]
struct Cli {
    /// Redis URL connect string
    #[arg(long, default_value = "redis://localhost:6379")]
    url: String,
    /// Number of keys to be retrieved per SCAN execution
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    batchsize: u64,
    /// Number of synthetic Redis objects to be generated
    #[arg(long, default_value_t = 0)]
    nsynth: u64,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut con = connect(&args.url)?;

    if args.nsynth > 0 {
        let mut rng = rand::rng();
        let pb = make_progress_bar(Some(args.nsynth));
        let (records, tally) = generate_records(args.nsynth, &mut rng, &pb);
        submit_batch(&mut con, &records)?;
        pb.finish();
        println!("Generated keys: {tally}");
    }

    let pb = make_progress_bar(None);
    let results = scan_keyspace(&mut con, args.batchsize, &pb)?;
    pb.finish();

    println!("{}", format_summary(&results));
    Ok(())
}
