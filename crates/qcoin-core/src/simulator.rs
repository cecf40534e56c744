//! Single-qubit simulation engine.

use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use tracing::{debug, trace};

use crate::random::UniformSource;
use crate::state::{Outcome, Phase, QubitState};

/// A one-qubit simulator that owns its state and its source of randomness.
///
/// Mutating operations take `&mut self`, so a simulator shared between
/// threads has to sit behind a lock held for the whole call.
#[derive(Debug, Clone)]
pub struct QubitSimulator<R: UniformSource = ThreadRng> {
    state: QubitState,
    source: R,
}

impl QubitSimulator<ThreadRng> {
    /// Create a simulator in |0⟩ drawing from the thread-local generator.
    pub fn new() -> Self {
        Self::with_source(rand::thread_rng())
    }
}

impl QubitSimulator<StdRng> {
    /// Create a simulator whose measurements are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }
}

impl Default for QubitSimulator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UniformSource> QubitSimulator<R> {
    /// Create a simulator in |0⟩ drawing from `source`.
    pub fn with_source(source: R) -> Self {
        Self::with_state(QubitState::zero(), source)
    }

    /// Create a simulator starting from an already validated state.
    pub fn with_state(state: QubitState, source: R) -> Self {
        Self { state, source }
    }

    /// Return to the definite state |0⟩, discarding whatever came before.
    pub fn reset(&mut self) {
        self.state = QubitState::zero();
        trace!("reset to |0⟩");
    }

    /// Apply the Hadamard transform to the current amplitudes.
    ///
    /// `|0⟩` maps to the equal superposition; applying it twice restores the
    /// previous state.
    pub fn apply_hadamard(&mut self) {
        self.state.hadamard();
        trace!(state = %self.state, "applied hadamard");
    }

    /// Probability that `measure` yields heads.
    pub fn probability0(&self) -> f64 {
        self.state.probability0()
    }

    /// Probability that `measure` yields tails.
    pub fn probability1(&self) -> f64 {
        self.state.probability1()
    }

    /// Collapse the qubit and report what was observed.
    ///
    /// A superposed state draws `r` from the source and collapses to |0⟩ when
    /// `r < probability0`, otherwise to |1⟩. A state whose other amplitude is
    /// exactly zero yields its own outcome without consuming a draw.
    pub fn measure(&mut self) -> Outcome {
        let outcome = match self.state.phase() {
            Phase::Definite(outcome) => {
                debug!(outcome = outcome.label(), "measured definite state");
                outcome
            }
            Phase::Superposed => {
                let p0 = self.state.probability0();
                let r = self.source.next_unit();
                let outcome = if r < p0 {
                    Outcome::Heads
                } else {
                    Outcome::Tails
                };
                debug!(r, p0, outcome = outcome.label(), "collapsed superposition");
                outcome
            }
        };

        self.state.collapse(outcome);
        outcome
    }

    /// Human-readable amplitudes, e.g. `0.707+0.000i|0⟩ + 0.707+0.000i|1⟩`.
    pub fn state_string(&self) -> String {
        self.state.to_string()
    }

    /// The current amplitudes.
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Whether the qubit is definite or superposed.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// True while both outcomes are still possible.
    pub fn is_superposed(&self) -> bool {
        self.phase() == Phase::Superposed
    }
}
