//! Single-qubit state vector and the values derived from it.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{QubitError, QubitResult};

/// Tolerance used for the normalization law.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A definite result of measuring the qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Basis state |0⟩.
    Heads,
    /// Basis state |1⟩.
    Tails,
}

impl Outcome {
    /// The classical bit for this outcome.
    pub fn bit(self) -> u8 {
        match self {
            Outcome::Heads => 0,
            Outcome::Tails => 1,
        }
    }

    /// Lowercase name, "heads" or "tails".
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Heads => "heads",
            Outcome::Tails => "tails",
        }
    }

    /// One-letter symbol shown on the coin face.
    pub fn symbol(self) -> &'static str {
        match self {
            Outcome::Heads => "H",
            Outcome::Tails => "T",
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.bit()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = QubitError;

    fn try_from(bit: u8) -> QubitResult<Self> {
        match bit {
            0 => Ok(Outcome::Heads),
            1 => Ok(Outcome::Tails),
            other => Err(QubitError::InvalidOutcome(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logical phase of the qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The other outcome has probability exactly 0.
    Definite(Outcome),
    /// Both outcomes have non-zero probability.
    Superposed,
}

/// The amplitude pair of a single qubit.
///
/// Always normalized: `|amplitude0|² + |amplitude1|² == 1` within
/// [`NORM_TOLERANCE`]. Deserialization goes through the same check as
/// [`QubitState::from_amplitudes`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAmplitudes")]
pub struct QubitState {
    amplitude0: Complex64,
    amplitude1: Complex64,
}

#[derive(Deserialize)]
struct RawAmplitudes {
    amplitude0: Complex64,
    amplitude1: Complex64,
}

impl TryFrom<RawAmplitudes> for QubitState {
    type Error = QubitError;

    fn try_from(raw: RawAmplitudes) -> QubitResult<Self> {
        QubitState::from_amplitudes(raw.amplitude0, raw.amplitude1)
    }
}

impl QubitState {
    /// The basis state |0⟩.
    pub fn zero() -> Self {
        Self::basis(Outcome::Heads)
    }

    /// The basis state |1⟩.
    pub fn one() -> Self {
        Self::basis(Outcome::Tails)
    }

    /// The definite basis state for `outcome`.
    pub fn basis(outcome: Outcome) -> Self {
        let (amplitude0, amplitude1) = match outcome {
            Outcome::Heads => (Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)),
            Outcome::Tails => (Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)),
        };
        Self {
            amplitude0,
            amplitude1,
        }
    }

    /// Build a state from explicit amplitudes, rejecting non-unit vectors.
    pub fn from_amplitudes(amplitude0: Complex64, amplitude1: Complex64) -> QubitResult<Self> {
        let norm = amplitude0.norm_sqr() + amplitude1.norm_sqr();
        if !norm.is_finite() || (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(QubitError::NotNormalized { norm });
        }
        Ok(Self {
            amplitude0,
            amplitude1,
        })
    }

    /// Amplitude of |0⟩.
    pub fn amplitude0(&self) -> Complex64 {
        self.amplitude0
    }

    /// Amplitude of |1⟩.
    pub fn amplitude1(&self) -> Complex64 {
        self.amplitude1
    }

    /// Born-rule probability of observing |0⟩.
    pub fn probability0(&self) -> f64 {
        self.amplitude0.norm_sqr()
    }

    /// Born-rule probability of observing |1⟩.
    pub fn probability1(&self) -> f64 {
        self.amplitude1.norm_sqr()
    }

    /// Probability of observing `outcome`.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Heads => self.probability0(),
            Outcome::Tails => self.probability1(),
        }
    }

    /// Definite only when the other amplitude is exactly zero.
    pub fn phase(&self) -> Phase {
        if self.probability1() == 0.0 {
            Phase::Definite(Outcome::Heads)
        } else if self.probability0() == 0.0 {
            Phase::Definite(Outcome::Tails)
        } else {
            Phase::Superposed
        }
    }

    /// Apply the Hadamard unitary in place.
    pub(crate) fn hadamard(&mut self) {
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        let a = self.amplitude0;
        let b = self.amplitude1;
        self.amplitude0 = sqrt2_inv * (a + b);
        self.amplitude1 = sqrt2_inv * (a - b);
    }

    /// Project onto the basis state for `outcome`.
    pub(crate) fn collapse(&mut self, outcome: Outcome) {
        *self = Self::basis(outcome);
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}{:+.3}i|0⟩ + {:.3}{:+.3}i|1⟩",
            self.amplitude0.re, self.amplitude0.im, self.amplitude1.re, self.amplitude1.im
        )
    }
}
