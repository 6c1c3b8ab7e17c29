//! Hoohash CLI
//!
//! A command-line tool around the Hoohash proof-of-work transform.
//!
//! # Commands
//!
//! - `hash` - Hash a preimage and print the digest
//! - `bench` - Run a hash-rate benchmark

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use hoohash::{LookupTable, algorithm, hash_rev1, hash_rev2};

#[derive(Parser)]
#[command(name = "hoohash")]
#[command(version = "0.1.0")]
#[command(about = "Hoohash proof-of-work hash and benchmark tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a preimage and print the hex digest
    Hash {
        /// Preimage bytes, UTF-8 (or hex with --hex)
        input: String,

        /// Interpret the input as hex-encoded bytes
        #[arg(long)]
        hex: bool,

        /// Use the Rev2 pipeline (builds the lookup table first)
        #[arg(long)]
        rev2: bool,
    },

    /// Run a hash-rate benchmark
    Bench {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "1000")]
        iterations: u64,

        /// Worker threads (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Benchmark the Rev2 pipeline
        #[arg(long)]
        rev2: bool,
    },
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash { input, hex, rev2 } => cmd_hash(&input, hex, rev2),
        Commands::Bench {
            iterations,
            threads,
            rev2,
        } => cmd_bench(iterations, threads, rev2),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_hash(input: &str, is_hex: bool, rev2: bool) -> anyhow::Result<()> {
    let preimage = if is_hex {
        hex::decode(input.trim()).context("invalid hex preimage")?
    } else {
        input.as_bytes().to_vec()
    };

    let digest = if rev2 {
        info!("generating rev2 lookup table");
        let table = LookupTable::generate();
        hash_rev2(&preimage, &table)
    } else {
        hash_rev1(&preimage)
    };

    println!("{}", hex::encode(digest));
    Ok(())
}

fn cmd_bench(iterations: u64, threads: Option<usize>, rev2: bool) -> anyhow::Result<()> {
    let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);
    let revision = if rev2 { "rev2" } else { "rev1" };

    let table = if rev2 {
        info!("generating rev2 lookup table");
        Some(LookupTable::generate())
    } else {
        None
    };

    info!(
        "benchmarking {} with {} iterations on {} threads",
        revision, iterations, num_threads
    );

    // Evaluations on independent preimages are embarrassingly parallel;
    // the lookup table is read-only and shared by reference.
    let completed = AtomicU64::new(0);
    let start = Instant::now();
    thread::scope(|scope| {
        for worker in 0..num_threads {
            let completed = &completed;
            let table = table.as_ref();
            scope.spawn(move || {
                let mut nonce = worker as u64;
                loop {
                    let done = completed.fetch_add(1, Ordering::Relaxed);
                    if done >= iterations {
                        break;
                    }

                    let mut input = Vec::with_capacity(40);
                    input.extend_from_slice(b"BenchmarkMatrix_HeavyHash");
                    input.extend_from_slice(&nonce.to_le_bytes());
                    match table {
                        Some(table) => hash_rev2(&input, table),
                        None => hash_rev1(&input),
                    };
                    nonce += num_threads as u64;

                    if done > 0 && done % 1000 == 0 {
                        let elapsed = start.elapsed().as_secs_f64();
                        info!(
                            "{} hashes, {:.1}s, {:.2} H/s",
                            done,
                            elapsed,
                            done as f64 / elapsed
                        );
                    }
                }
            });
        }
    });
    let elapsed = start.elapsed();

    println!("\nResults:");
    println!("  Revision: {}", revision);
    println!("  Total hashes: {}", iterations);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!(
        "  Hashrate: {:.2} H/s",
        iterations as f64 / elapsed.as_secs_f64()
    );

    println!("\nAlgorithm parameters:");
    println!(
        "  Matrix: {}x{} nibbles",
        algorithm::MATRIX_DIM,
        algorithm::MATRIX_DIM
    );
    if rev2 {
        println!(
            "  Lookup table: {} MB",
            algorithm::LOOKUP_TABLE_SIZE * 8 / (1024 * 1024)
        );
        println!("  VDF squarings: {}", algorithm::VDF_SQUARINGS);
    }

    Ok(())
}
