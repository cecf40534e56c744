//! Classical coin command implementation.

use anyhow::Result;
use console::style;
use rand::Rng;
use serde::Serialize;

use qcoin_core::Outcome;

use super::common::{OutputFormat, Session, print_json};

#[derive(Serialize)]
struct ClassicalFlip {
    result: Outcome,
}

/// Flip a fair classical coin with the given generator.
pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> Outcome {
    if rng.gen_bool(0.5) {
        Outcome::Heads
    } else {
        Outcome::Tails
    }
}

/// Execute the classical command.
pub fn execute(session: &Session) -> Result<()> {
    let mut rng = session.classical_rng();
    let result = flip(&mut rng);
    tracing::debug!(result = result.label(), "flipped classical coin");

    match session.format {
        OutputFormat::Json => print_json(&ClassicalFlip { result }),
        OutputFormat::Table => {
            println!("{} Classical Coin", style("→").cyan().bold());
            render(result);
            Ok(())
        }
    }
}

/// Print the coin face and its caption.
pub fn render(result: Outcome) {
    println!("\n      {}\n", style(result.symbol()).bold());
    println!("  {}", style("Always heads OR tails").dim());
}
