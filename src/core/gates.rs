//! Gate application kernels.
//!
//! Strategy: iterate over the 2^m basis states, pair up indices that differ
//! only in the target bit, and update each pair in place. O(2^m) per gate
//! with no extra allocation. Every kernel validates its qubit indices before
//! touching the amplitudes, so a rejected gate leaves the state unchanged.

use super::complex::Complex;
use super::state::StateVector;
use crate::circuit::Gate;
use crate::error::{QubitFault, Result, SimError};
use std::f64::consts::FRAC_1_SQRT_2;

/// Apply one gate descriptor to `state`.
pub fn apply_gate(state: &mut StateVector, gate: &Gate) -> Result<()> {
    match *gate {
        Gate::Hadamard(q) => apply_hadamard(state, q),
        Gate::PauliX(q) => apply_pauli_x(state, q),
        Gate::ControlledNot { control, target } => apply_cnot(state, control, target),
    }
}

/// Hadamard: (a0, a1) → ((a0 + a1)/√2, (a0 − a1)/√2) on every pair split by `target`.
pub fn apply_hadamard(state: &mut StateVector, target: usize) -> Result<()> {
    state.check_qubit(target)?;
    for_each_pair(state, target, |a0, a1| {
        let sum = (*a0 + *a1).scale(FRAC_1_SQRT_2);
        let diff = (*a0 - *a1).scale(FRAC_1_SQRT_2);
        *a0 = sum;
        *a1 = diff;
    });
    Ok(())
}

/// Pauli-X (quantum NOT): swaps every pair split by `target`. Exact.
pub fn apply_pauli_x(state: &mut StateVector, target: usize) -> Result<()> {
    state.check_qubit(target)?;
    for_each_pair(state, target, std::mem::swap);
    Ok(())
}

/// CNOT: flips `target` on every basis state where `control` is |1⟩. Exact.
pub fn apply_cnot(state: &mut StateVector, control: usize, target: usize) -> Result<()> {
    state.check_qubit(control)?;
    state.check_qubit(target)?;
    if control == target {
        return Err(SimError::InvalidQubitIndex {
            index: target,
            num_qubits: state.num_qubits(),
            fault: QubitFault::Duplicate,
        });
    }

    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for i in 0..state.dim() {
        // Visit each (control=1, target=0) index once; its partner has target=1.
        if (i & control_mask != 0) && (i & target_mask == 0) {
            state.amplitudes.swap(i, i | target_mask);
        }
    }
    Ok(())
}

/// Call `f(a0, a1)` for every amplitude pair whose indices differ only in bit `target`,
/// where `a0` has the bit clear and `a1` has it set.
fn for_each_pair<F>(state: &mut StateVector, target: usize, mut f: F)
where
    F: FnMut(&mut Complex, &mut Complex),
{
    let stride = 1usize << target;
    // Blocks of 2·stride: the low half has the bit clear, the high half set.
    for block in state.amplitudes.chunks_exact_mut(stride << 1) {
        let (low, high) = block.split_at_mut(stride);
        for (a0, a1) in low.iter_mut().zip(high.iter_mut()) {
            f(a0, a1);
        }
    }
}
