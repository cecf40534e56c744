//! Superpose command implementation.

use anyhow::Result;
use console::style;

use super::common::{OutputFormat, Session, Snapshot, print_distribution, print_json};

/// Execute the superpose command.
///
/// Puts a fresh qubit into superposition and shows the distribution without
/// measuring it.
pub fn execute(session: &Session) -> Result<()> {
    let mut sim = session.simulator();
    sim.reset();
    sim.apply_hadamard();
    let snapshot = Snapshot::capture(&sim, None);

    match session.format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Table => {
            println!("{} Quantum Coin", style("→").cyan().bold());
            println!("\n      {}\n", style("⚛").magenta().bold());
            print_distribution(&snapshot);
            println!(
                "\n  {}",
                style("In superposition - both states exist!").magenta()
            );
            Ok(())
        }
    }
}
