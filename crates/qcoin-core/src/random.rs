//! Uniform random sources consumed by measurement.

use rand::Rng;

use crate::error::{QubitError, QubitResult};

/// A source of uniform draws over the half-open interval [0, 1).
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Deterministic source that cycles through a fixed list of samples.
///
/// Useful for replaying a recorded run or forcing a particular branch of a
/// measurement in tests.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source from samples, each of which must lie in [0, 1).
    pub fn new(samples: impl Into<Vec<f64>>) -> QubitResult<Self> {
        let samples = samples.into();
        if samples.is_empty() {
            return Err(QubitError::EmptySequence);
        }
        if let Some(&bad) = samples.iter().find(|s| !(0.0..1.0).contains(*s)) {
            return Err(QubitError::InvalidSample(bad));
        }
        Ok(Self { samples, cursor: 0 })
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceSource::new([0.1, 0.9]).unwrap();
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_sequence_validation() {
        assert!(matches!(
            SequenceSource::new(Vec::<f64>::new()),
            Err(QubitError::EmptySequence)
        ));
        assert!(matches!(
            SequenceSource::new([0.2, 1.0]),
            Err(QubitError::InvalidSample(v)) if v == 1.0
        ));
        assert!(matches!(
            SequenceSource::new([-0.1]),
            Err(QubitError::InvalidSample(_))
        ));
        assert!(matches!(
            SequenceSource::new([f64::NAN]),
            Err(QubitError::InvalidSample(_))
        ));
    }

    #[test]
    fn test_rng_draws_in_unit_interval() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = rng.next_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }
}
