//! Batch command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use tracing::info;

use qcoin_core::{Outcome, QubitSimulator, Tally};

use super::common::{OutputFormat, Session, print_json, print_tally};

/// Runs at or above this size get a progress bar.
const PROGRESS_THRESHOLD: u64 = 10_000;

/// Repeat superpose-and-measure `runs` times.
pub fn run(sim: &mut QubitSimulator<StdRng>, runs: u64, progress: Option<&ProgressBar>) -> Tally {
    let mut tally = Tally::new();
    for i in 0..runs {
        sim.reset();
        sim.apply_hadamard();
        tally.record(sim.measure());

        if let Some(pb) = progress {
            if i % 1000 == 999 {
                pb.inc(1000);
            }
        }
    }
    tally
}

/// Execute the batch command.
pub fn execute(session: &Session, runs: u64) -> Result<()> {
    if runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }

    let mut sim = session.simulator();

    let progress = if runs >= PROGRESS_THRESHOLD && session.format == OutputFormat::Table {
        let pb = ProgressBar::new(runs);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.magenta}] {pos}/{len} flips")?
                .progress_chars("█░ "),
        );
        Some(pb)
    } else {
        None
    };

    let tally = run(&mut sim, runs, progress.as_ref());
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        runs,
        heads = tally.count(Outcome::Heads),
        tails = tally.count(Outcome::Tails),
        "batch complete"
    );

    match session.format {
        OutputFormat::Json => print_json(&tally),
        OutputFormat::Table => {
            println!(
                "{} Flipping {} quantum coins",
                style("→").cyan().bold(),
                style(runs).yellow()
            );
            print_tally(&tally);
            Ok(())
        }
    }
}
