//! Compare command implementation.

use anyhow::Result;
use console::style;
use serde::Serialize;

use qcoin_core::Outcome;

use super::common::{OutputFormat, Session, print_json};
use super::{classical, flip};

#[derive(Serialize)]
struct Comparison {
    classical: Outcome,
    quantum: flip::QuantumFlip,
}

/// Execute the compare command.
///
/// The two coins use independent generators; nothing correlates their results.
pub fn execute(session: &Session) -> Result<()> {
    let mut rng = session.classical_rng();
    let mut sim = session.simulator();

    let comparison = Comparison {
        classical: classical::flip(&mut rng),
        quantum: flip::run(&mut sim),
    };

    match session.format {
        OutputFormat::Json => print_json(&comparison),
        OutputFormat::Table => {
            println!(
                "{} Quantum Coin vs Classical Coin",
                style("→").cyan().bold()
            );
            println!(
                "  A classical coin is always heads {} tails.",
                style("OR").bold()
            );
            println!(
                "  A quantum coin is heads {} tails until you measure it!",
                style("AND").bold()
            );

            println!("\n{}", style("Classical Coin").bold().underlined());
            classical::render(comparison.classical);

            println!("\n{}", style("Quantum Coin").magenta().bold().underlined());
            flip::render(&comparison.quantum);

            println!(
                "\n{} The quantum coin isn't undecided - it's genuinely in both states \
                 simultaneously until measurement collapses it to one!",
                style("Wow Moment:").blue().bold()
            );
            Ok(())
        }
    }
}
