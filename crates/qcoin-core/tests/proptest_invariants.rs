//! Property-based tests for the qubit invariants.
//!
//! Random operation sequences must keep the state normalized, and the
//! Hadamard transform must undo itself from any normalized starting point.

use num_complex::Complex64;
use proptest::prelude::*;

use qcoin_core::{Outcome, Phase, QubitSimulator, QubitState, SequenceSource};

/// Operations a caller can perform on the simulator.
#[derive(Debug, Clone, Copy)]
enum Op {
    Reset,
    Hadamard,
    Measure,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Reset), Just(Op::Hadamard), Just(Op::Measure)]
}

/// Generate a normalized state from a Bloch-sphere angle pair plus a global phase.
fn arb_state() -> impl Strategy<Value = QubitState> {
    (
        0.0..std::f64::consts::PI,
        0.0..std::f64::consts::TAU,
        0.0..std::f64::consts::TAU,
    )
        .prop_map(|(theta, phi, global)| {
            let a0 = Complex64::from_polar((theta / 2.0).cos(), global);
            let a1 = Complex64::from_polar((theta / 2.0).sin(), global + phi);
            QubitState::from_amplitudes(a0, a1).unwrap()
        })
}

proptest! {
    #[test]
    fn probabilities_always_sum_to_one(
        ops in prop::collection::vec(arb_op(), 0..64),
        draws in prop::collection::vec(0.0_f64..1.0, 1..16),
    ) {
        let mut sim = QubitSimulator::with_source(SequenceSource::new(draws).unwrap());
        for op in ops {
            match op {
                Op::Reset => sim.reset(),
                Op::Hadamard => sim.apply_hadamard(),
                Op::Measure => {
                    let outcome = sim.measure();
                    prop_assert_eq!(sim.phase(), Phase::Definite(outcome));
                    prop_assert_eq!(sim.measure(), outcome);
                }
            }
            let sum = sim.probability0() + sim.probability1();
            prop_assert!((sum - 1.0).abs() < 1e-9, "p0 + p1 = {}", sum);
            prop_assert!((0.0..=1.0 + 1e-9).contains(&sim.probability0()));
        }
    }

    #[test]
    fn double_hadamard_restores_amplitudes(state in arb_state()) {
        let source = SequenceSource::new([0.5]).unwrap();
        let mut sim = QubitSimulator::with_state(state, source);
        sim.apply_hadamard();
        let once = *sim.state();
        prop_assert!((once.probability0() + once.probability1() - 1.0).abs() < 1e-9);

        sim.apply_hadamard();
        let twice = sim.state();
        prop_assert!((twice.amplitude0() - state.amplitude0()).norm() < 1e-9);
        prop_assert!((twice.amplitude1() - state.amplitude1()).norm() < 1e-9);
    }

    #[test]
    fn measurement_matches_draw_threshold(state in arb_state(), r in 0.0_f64..1.0) {
        let mut sim = QubitSimulator::with_state(state, SequenceSource::new([r]).unwrap());
        let p0 = state.probability0();
        let outcome = sim.measure();
        let expected = if r < p0 { Outcome::Heads } else { Outcome::Tails };
        prop_assert_eq!(outcome, expected);
        prop_assert_eq!(sim.state().probability(outcome), 1.0);
    }

    #[test]
    fn near_basis_states_measure_by_draw(p1 in 1e-15_f64..1e-6, r in 0.0_f64..1.0) {
        let state = QubitState::from_amplitudes(
            Complex64::new((1.0 - p1).sqrt(), 0.0),
            Complex64::new(p1.sqrt(), 0.0),
        )
        .unwrap();
        prop_assert_eq!(state.phase(), Phase::Superposed);

        let mut sim = QubitSimulator::with_state(state, SequenceSource::new([r]).unwrap());
        let expected = if r < state.probability0() { Outcome::Heads } else { Outcome::Tails };
        prop_assert_eq!(sim.measure(), expected);
    }
}
