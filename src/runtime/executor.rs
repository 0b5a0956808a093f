//! Circuit executor.
//!
//! Allocates |0…0⟩ over the circuit's full register and applies every gate in
//! order. The resulting `StateVector` is handed to the caller by value; the
//! executor keeps no state between runs.

use crate::circuit::Circuit;
use crate::core::{gates, StateVector};
use crate::error::Result;
use tracing::{debug, trace};

/// Execute `circuit` from the all-zero state and return the final state vector.
pub fn execute(circuit: &Circuit) -> Result<StateVector> {
    circuit.validate()?;
    let mut state = StateVector::new(circuit.num_qubits())?;

    for (step, gate) in circuit.gates().iter().enumerate() {
        gates::apply_gate(&mut state, gate)?;
        trace!(step, %gate, "applied gate");
    }

    debug!(
        qubits = state.num_qubits(),
        gates = circuit.len(),
        total_probability = state.total_probability(),
        "circuit executed"
    );
    Ok(state)
}
