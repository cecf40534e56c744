//! Error types for the qubit core.

use thiserror::Error;

/// Errors produced by the validating constructors and conversions.
///
/// The simulator operations themselves never fail; these only surface when a
/// caller builds a state, outcome or random source from raw values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QubitError {
    /// Amplitudes do not describe a unit vector.
    #[error("amplitudes are not normalized: |a0|² + |a1|² = {norm}")]
    NotNormalized {
        /// The squared norm that was found.
        norm: f64,
    },

    /// A numeric outcome other than 0 or 1.
    #[error("measurement outcome must be 0 or 1, got {0}")]
    InvalidOutcome(u8),

    /// A replay sample outside the unit interval [0, 1).
    #[error("uniform sample must lie in [0, 1), got {0}")]
    InvalidSample(f64),

    /// A replay source was built with no samples.
    #[error("sequence source needs at least one sample")]
    EmptySequence,
}

/// Result type for qubit core operations.
pub type QubitResult<T> = Result<T, QubitError>;
