//! qcoin Command-Line Interface
//!
//! A terminal rendition of the quantum coin demo: flip a classical coin, put
//! a qubit into superposition, and watch measurement collapse it.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{OutputFormat, Session};
use commands::{batch, classical, compare, flip, superpose, version};

/// qcoin - a classical coin versus a qubit in superposition
#[derive(Parser)]
#[command(name = "qcoin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for reproducible flips
    #[arg(long, env = "QCOIN_SEED", global = true)]
    seed: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip a classical coin
    Classical,

    /// Put the quantum coin into superposition and show its distribution
    Superpose,

    /// Superpose the quantum coin, then measure it
    Flip,

    /// Show the classical and quantum coins side by side
    Compare,

    /// Flip the quantum coin many times and tally the outcomes
    Batch {
        /// Number of flips
        #[arg(short, long, default_value = "10000")]
        runs: u64,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = OutputFormat::parse(&cli.format).and_then(|format| {
        let session = Session {
            seed: cli.seed,
            format,
        };

        match cli.command {
            Commands::Classical => classical::execute(&session),
            Commands::Superpose => superpose::execute(&session),
            Commands::Flip => flip::execute(&session),
            Commands::Compare => compare::execute(&session),
            Commands::Batch { runs } => batch::execute(&session, runs),
            Commands::Version => {
                version::execute();
                Ok(())
            }
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
