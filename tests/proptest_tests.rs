//! Property-based tests for the gate kernels using proptest.

use djsim::core::apply_gate;
use djsim::{execute, Circuit, Gate, StateVector};
use proptest::prelude::*;

const QUBITS: usize = 4;

fn arb_gate() -> impl Strategy<Value = Gate> {
    prop_oneof![
        (0..QUBITS).prop_map(Gate::Hadamard),
        (0..QUBITS).prop_map(Gate::PauliX),
        (0..QUBITS, 1..QUBITS).prop_map(|(control, offset)| Gate::ControlledNot {
            control,
            target: (control + offset) % QUBITS,
        }),
    ]
}

fn build(gates: &[Gate]) -> Circuit {
    // QUBITS - 1 inputs plus the ancilla
    let mut circuit = Circuit::new(QUBITS - 1).unwrap();
    for &g in gates {
        circuit.push(g).unwrap();
    }
    circuit
}

proptest! {
    /// Property: every H/X/CNOT sequence preserves Σ|α|² = 1.
    #[test]
    fn random_circuits_are_unitary(gates in prop::collection::vec(arb_gate(), 0..60)) {
        let state = execute(&build(&gates)).unwrap();
        prop_assert!((state.total_probability() - 1.0).abs() < 1e-9);
    }

    /// Property: X and CNOT are exactly self-inverse on any reachable state.
    #[test]
    fn permutation_gates_are_exact_involutions(
        prefix in prop::collection::vec(arb_gate(), 0..20),
        gate in arb_gate().prop_filter("permutation gates", |g| !matches!(g, Gate::Hadamard(_)))
    ) {
        let before = execute(&build(&prefix)).unwrap();
        let mut after = before.clone();
        apply_gate(&mut after, &gate).unwrap();
        apply_gate(&mut after, &gate).unwrap();
        for (a, b) in after.amplitudes().iter().zip(before.amplitudes()) {
            prop_assert!(a.exactly_eq(b));
        }
    }

    /// Property: H·H = I within floating tolerance.
    #[test]
    fn hadamard_is_an_involution(
        prefix in prop::collection::vec(arb_gate(), 0..20),
        q in 0..QUBITS
    ) {
        let before = execute(&build(&prefix)).unwrap();
        let mut after = before.clone();
        apply_gate(&mut after, &Gate::Hadamard(q)).unwrap();
        apply_gate(&mut after, &Gate::Hadamard(q)).unwrap();
        for (a, b) in after.amplitudes().iter().zip(before.amplitudes()) {
            prop_assert!((a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9);
        }
    }

    /// Property: out-of-range gates fail and leave the state untouched.
    #[test]
    fn out_of_range_gates_are_rejected(q in QUBITS..64usize) {
        let mut state = StateVector::new(QUBITS).unwrap();
        prop_assert!(apply_gate(&mut state, &Gate::Hadamard(q)).is_err());
        let cnot = Gate::ControlledNot { control: 0, target: q };
        prop_assert!(apply_gate(&mut state, &cnot).is_err());
        prop_assert!((state.probability(0) - 1.0).abs() < 1e-12);
    }
}
