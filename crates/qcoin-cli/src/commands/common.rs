//! Shared helpers for CLI commands.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use qcoin_core::{Outcome, Phase, QubitSimulator, QubitState, Tally};

/// Width of the probability bars, in terminal cells.
pub const BAR_WIDTH: usize = 40;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Session {
    /// A simulator for the quantum coin, seeded when the session is.
    pub fn simulator(&self) -> QubitSimulator<StdRng> {
        match self.seed {
            Some(seed) => QubitSimulator::seeded(seed),
            None => QubitSimulator::with_source(StdRng::from_entropy()),
        }
    }

    /// Generator for the classical coin, independent of the quantum one.
    pub fn classical_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(0x9e37_79b9_7f4a_7c15)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Point-in-time view of the quantum coin for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub probability0: f64,
    pub probability1: f64,
    pub phase: Phase,
    pub state: QubitState,
    pub state_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
}

impl Snapshot {
    pub fn capture(sim: &QubitSimulator<StdRng>, result: Option<Outcome>) -> Self {
        Self {
            probability0: sim.probability0(),
            probability1: sim.probability1(),
            phase: sim.phase(),
            state: *sim.state(),
            state_string: sim.state_string(),
            result,
        }
    }
}

/// Render `probability` as a fixed-width bar.
pub fn probability_bar(probability: f64, width: usize) -> String {
    let filled = ((probability.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Print the heads/tails distribution of a snapshot.
pub fn print_distribution(snapshot: &Snapshot) {
    println!(
        "  {:<12} {:>6}  {}",
        "Heads (|0⟩)",
        format_percent(snapshot.probability0),
        style(probability_bar(snapshot.probability0, BAR_WIDTH)).magenta()
    );
    println!(
        "  {:<12} {:>6}  {}",
        "Tails (|1⟩)",
        format_percent(snapshot.probability1),
        style(probability_bar(snapshot.probability1, BAR_WIDTH)).red()
    );
    println!("  {}", style(&snapshot.state_string).dim());
}

/// Print a tally of repeated flips in a table format.
pub fn print_tally(tally: &Tally) {
    println!(
        "\n{} Results ({} flips):",
        style("✓").green().bold(),
        tally.total()
    );

    for outcome in [Outcome::Heads, Outcome::Tails] {
        let freq = tally.frequency(outcome);
        let bar_len = (freq * 50.0).round() as usize;
        println!(
            "  {}: {:>8} ({:>6.2}%) {}",
            style(outcome.symbol()).cyan(),
            tally.count(outcome),
            freq * 100.0,
            style("█".repeat(bar_len)).green()
        );
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_probability_bar() {
        assert_eq!(probability_bar(0.5, 4), "██░░");
        assert_eq!(probability_bar(1.0, 3), "███");
        assert_eq!(probability_bar(0.0, 2), "░░");
        assert_eq!(probability_bar(1.5, 2), "██");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_seeded_session_is_reproducible() {
        let session = Session {
            seed: Some(11),
            format: OutputFormat::Table,
        };
        let flip = |mut sim: QubitSimulator<StdRng>| {
            (0..16)
                .map(|_| {
                    sim.reset();
                    sim.apply_hadamard();
                    sim.measure()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(flip(session.simulator()), flip(session.simulator()));
    }

    #[test]
    fn test_snapshot_json() {
        let session = Session {
            seed: Some(3),
            format: OutputFormat::Json,
        };
        let mut sim = session.simulator();
        sim.apply_hadamard();
        let json = serde_json::to_value(Snapshot::capture(&sim, None)).unwrap();

        assert_eq!(json["phase"], "superposed");
        assert!(json.get("result").is_none());
        assert!((json["probability0"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    }
}
