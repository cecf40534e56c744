//! Flip command implementation.

use anyhow::Result;
use console::style;
use rand::rngs::StdRng;
use serde::Serialize;

use qcoin_core::QubitSimulator;

use super::common::{OutputFormat, Session, Snapshot, print_distribution, print_json};

/// The quantum coin before and after measurement.
#[derive(Debug, Serialize)]
pub struct QuantumFlip {
    pub superposed: Snapshot,
    pub measured: Snapshot,
}

/// Superpose then measure, capturing the state at both points.
pub fn run(sim: &mut QubitSimulator<StdRng>) -> QuantumFlip {
    sim.reset();
    sim.apply_hadamard();
    let superposed = Snapshot::capture(sim, None);

    let result = sim.measure();
    let measured = Snapshot::capture(sim, Some(result));
    tracing::debug!(result = result.label(), "flipped quantum coin");

    QuantumFlip {
        superposed,
        measured,
    }
}

/// Execute the flip command.
pub fn execute(session: &Session) -> Result<()> {
    let mut sim = session.simulator();
    let flip = run(&mut sim);

    match session.format {
        OutputFormat::Json => print_json(&flip),
        OutputFormat::Table => {
            println!("{} Quantum Coin", style("→").cyan().bold());
            render(&flip);
            Ok(())
        }
    }
}

/// Print both halves of a quantum flip.
pub fn render(flip: &QuantumFlip) {
    println!("\n  {}", style("Superposition").bold());
    print_distribution(&flip.superposed);
    println!(
        "  {}",
        style("In superposition - both states exist!").magenta()
    );

    println!("\n  {}", style("Measure").bold());
    if let Some(result) = flip.measured.result {
        println!("\n      {}\n", style(result.symbol()).magenta().bold());
    }
    print_distribution(&flip.measured);
    println!("  {}", style("Collapsed to a single state!").magenta());
}
