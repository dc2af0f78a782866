//! Seedkey CLI
//!
//! Key recovery and response computation for the seedkey challenge-response scheme.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{check_key, print_response, scan_keys};
use seedkey::{CandidateKey, Challenge, ObservationPair, ScanStrategy};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "seedkey")]
#[command(about = "Recover 16-bit seed/key secrets from captured challenge-response pairs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with secret tables and observation pairs
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan all 65536 keys against both observation pairs
    Scan {
        /// Observation pair as CHALLENGE:RESPONSE (give exactly two)
        #[arg(short, long = "pair", value_name = "PAIR", value_parser = parse_pair)]
        pairs: Vec<ObservationPair>,

        /// Walk the keyspace in one ascending loop instead of parallel shards
        #[arg(long)]
        sequential: bool,

        /// Worker threads for the sharded scan (default: all cores)
        #[arg(short, long, conflicts_with = "sequential")]
        jobs: Option<usize>,
    },
    /// Compute the response of a key to a challenge
    Response {
        /// Key as 4 hex digits
        #[arg(short, long, value_parser = parse_key)]
        key: CandidateKey,

        /// Challenge as 8 hex digits
        #[arg(long, value_parser = parse_challenge)]
        challenge: Challenge,
    },
    /// Verify a key against both observation pairs
    Check {
        /// Key as 4 hex digits
        #[arg(short, long, value_parser = parse_key)]
        key: CandidateKey,

        /// Observation pair as CHALLENGE:RESPONSE (give exactly two)
        #[arg(short, long = "pair", value_name = "PAIR", value_parser = parse_pair)]
        pairs: Vec<ObservationPair>,
    },
}

fn parse_pair(s: &str) -> Result<ObservationPair> {
    config::parse_pair(s)
}

fn parse_key(s: &str) -> Result<CandidateKey> {
    config::parse_key(s)
}

fn parse_challenge(s: &str) -> Result<Challenge> {
    config::parse_challenge(s)
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.config.as_deref();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Scan {
            pairs,
            sequential,
            jobs,
        } => {
            if let Some(jobs) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .context("Failed to configure worker threads")?;
            }
            let settings = config::load(config, &pairs)?;
            let strategy = if sequential {
                ScanStrategy::Sequential
            } else {
                ScanStrategy::Sharded
            };
            scan_keys(&mut out, &settings, strategy)?;
        }
        Commands::Response { key, challenge } => {
            let settings = config::load(config, &[])?;
            print_response(&mut out, &settings, key, &challenge)?;
        }
        Commands::Check { key, pairs } => {
            let settings = config::load(config, &pairs)?;
            if !check_key(&mut out, &settings, key)? {
                out.flush()?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
