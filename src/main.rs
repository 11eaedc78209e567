//! Pi-Sponge CLI
//!
//! A command-line tool for computing and checking Pi-Sponge digests.
//!
//! # Commands
//!
//! - `hash` - Digest files (or stdin)
//! - `verify` - Check a file against a binary or hex digest
//! - `seed` - Print the π-derived initial state
//! - `benchmark` - Run performance benchmark

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pisponge::algorithm::{self, Hasher, PI_SEED};
use pisponge::config::{OutputConfig, OutputFormat};
use pisponge::report::{HashReport, Outcome, VerifyReport};
use pisponge::source::{digest_inputs, digest_source, Input};
use pisponge::verify_digest;

/// Exit code for I/O and usage failures (0-2 are verification outcomes)
const EXIT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "pisponge")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "Pi-seeded NLFSR sponge hash: compute and verify 160-bit digests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the digest of one or more files
    Hash {
        /// Files to hash; `-` or nothing reads stdin
        files: Vec<Input>,

        /// Digest encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,

        /// Prefix hex digests with 0x
        #[arg(long)]
        prefix: bool,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,

        /// Number of threads to use (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Check a file against an expected digest
    Verify {
        /// File to check; `-` reads stdin
        file: Input,

        /// Expected digest, binary (0/1) or hex (optional 0x prefix)
        hash: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the 161-bit initial state derived from π
    Seed {
        /// Bit encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Binary)]
        format: OutputFormat,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of digests to compute
        #[arg(short, long, default_value = "100")]
        count: u32,

        /// Input size in bytes
        #[arg(short, long, default_value = "1024")]
        size: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Hash {
            files,
            format,
            prefix,
            json,
            threads,
        } => {
            let config = build_output_config(format, prefix, json);
            cmd_hash(files, &config, threads)
        }
        Commands::Verify { file, hash, json } => cmd_verify(&file, &hash, json),
        Commands::Seed { format } => cmd_seed(format),
        Commands::Benchmark { count, size } => cmd_benchmark(count, size),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build output config from CLI args
fn build_output_config(format: OutputFormat, prefix: bool, json: bool) -> OutputConfig {
    OutputConfig {
        format,
        prefix,
        json,
    }
}

fn cmd_hash(
    mut files: Vec<Input>,
    config: &OutputConfig,
    threads: Option<usize>,
) -> anyhow::Result<u8> {
    if files.is_empty() {
        files.push(Input::Stdin);
    }

    let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);
    tracing::info!(inputs = files.len(), threads = num_threads, "hashing");
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;
    let results = pool.install(|| digest_inputs(&files));

    let mut failed = false;
    for (input, result) in files.iter().zip(results) {
        match result {
            Ok(digest) => {
                let rendered = config.render(&digest);
                if config.json {
                    let report = HashReport {
                        input: input.to_string(),
                        digest: rendered,
                        format: config.format,
                    };
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{}  {}", rendered, input);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    Ok(if failed { EXIT_FAILURE } else { 0 })
}

fn cmd_verify(file: &Input, hash: &str, json: bool) -> anyhow::Result<u8> {
    let candidate = hash.trim();
    if candidate.is_empty() {
        anyhow::bail!("Please enter a hash value to verify");
    }

    let computed = digest_source(file)?;
    let outcome = Outcome::from(verify_digest(&computed, candidate));
    tracing::info!(input = %file, ?outcome, "verified");

    if json {
        let report = VerifyReport {
            input: file.to_string(),
            candidate: candidate.to_string(),
            outcome,
            computed: computed.to_hex(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", outcome.message());
    }

    Ok(outcome.exit_code() as u8)
}

fn cmd_seed(format: OutputFormat) -> anyhow::Result<u8> {
    match format {
        OutputFormat::Hex => println!("{}", algorithm::to_hex(&PI_SEED)),
        OutputFormat::Binary => println!("{}", algorithm::bits_to_binary_string(&PI_SEED)),
    }
    Ok(0)
}

fn cmd_benchmark(count: u32, size: usize) -> anyhow::Result<u8> {
    println!(
        "Running benchmark with {} digests of {} bytes...",
        count, size
    );

    let input = vec![0x5Au8; size];
    let start = Instant::now();

    for i in 0..count {
        let mut hasher = Hasher::new();
        hasher.update(&input).update(&i.to_le_bytes());
        let _ = hasher.finalize();
    }

    let elapsed = start.elapsed();
    let secs = elapsed.as_secs_f64();
    let hashrate = count as f64 / secs;
    let throughput = (count as f64 * (size + 4) as f64) / secs;

    println!("\nResults:");
    println!("  Total digests: {}", count);
    println!("  Time elapsed: {:.2}s", secs);
    println!("  Digest rate: {:.2} H/s", hashrate);
    println!("  Throughput: {:.2} KiB/s", throughput / 1024.0);

    println!("\nAlgorithm parameters:");
    println!(
        "  State: {} bits (P {} + Q {})",
        algorithm::STATE_BITS,
        algorithm::P_BITS,
        algorithm::Q_BITS
    );
    println!("  Digest: {} bits", algorithm::DIGEST_BITS);
    println!(
        "  Rounds per bit: {} first/last, {} interior",
        algorithm::FIRST_ROUNDS,
        algorithm::INTERIOR_ROUNDS
    );

    Ok(0)
}
