//! `qcoin-core` — the single-qubit simulator behind the quantum coin demo.
//!
//! A classical coin is always heads *or* tails. A qubit can be heads *and*
//! tails until it is measured. This crate models that second coin:
//!
//! - **State**: two complex amplitudes for |0⟩ (heads) and |1⟩ (tails), kept
//!   normalized at all times
//! - **Hadamard**: the unitary that turns |0⟩ into an equal superposition
//! - **Measurement**: a Born-rule collapse driven by a pluggable uniform source
//!
//! # Quick start
//!
//! ```rust
//! use qcoin_core::{Outcome, QubitSimulator};
//!
//! let mut sim = QubitSimulator::seeded(42);
//! sim.reset();
//! sim.apply_hadamard();
//! assert!((sim.probability0() - 0.5).abs() < 1e-9);
//!
//! let outcome = sim.measure();
//! assert_eq!(sim.state().probability(outcome), 1.0);
//! assert!(matches!(outcome, Outcome::Heads | Outcome::Tails));
//! ```

pub mod error;
pub mod random;
pub mod simulator;
pub mod state;
pub mod tally;

pub use error::{QubitError, QubitResult};
pub use random::{SequenceSource, UniformSource};
pub use simulator::QubitSimulator;
pub use state::{NORM_TOLERANCE, Outcome, Phase, QubitState};
pub use tally::Tally;
