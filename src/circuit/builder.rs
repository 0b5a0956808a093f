//! Deutsch–Jozsa circuit construction.
//!
//! Layout for `n` inputs (ancilla = qubit `n`):
//!
//! ```text
//!   X n                       ancilla → |1⟩
//!   H 0 .. H n                inputs and ancilla into superposition
//!   <oracle>                  phase kickback of f(x) onto the inputs
//!   H 0 .. H n-1              inputs back to the computational basis
//! ```
//!
//! Measuring the inputs afterwards yields all-zeros with certainty when `f`
//! is constant and never yields all-zeros when `f` is balanced.

use super::ir::{Circuit, Gate};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The Boolean function f: {0,1}^n → {0,1} embedded by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Oracle {
    /// f(x) = x0 ⊕ x1 ⊕ … ⊕ x_{n-1}, balanced.
    #[default]
    Parity,
    /// f(x) = c for every x.
    Constant(bool),
}

impl Oracle {
    /// True if f outputs 1 on exactly half of its inputs.
    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Parity)
    }

    fn append_to(&self, circuit: &mut Circuit) -> Result<()> {
        let ancilla = circuit.ancilla();
        match *self {
            Self::Parity => {
                for i in 0..circuit.input_qubits() {
                    circuit.push(Gate::ControlledNot { control: i, target: ancilla })?;
                }
            }
            // f = 1 flips the ancilla unconditionally: only a global phase.
            Self::Constant(true) => {
                circuit.push(Gate::PauliX(ancilla))?;
            }
            Self::Constant(false) => {}
        }
        Ok(())
    }
}

/// Build the Deutsch–Jozsa circuit for `n` inputs and the given oracle.
pub fn deutsch_jozsa(n: usize, oracle: Oracle) -> Result<Circuit> {
    let mut circuit = Circuit::new(n)?;
    let ancilla = circuit.ancilla();

    circuit.push(Gate::PauliX(ancilla))?;
    for q in 0..=ancilla {
        circuit.push(Gate::Hadamard(q))?;
    }
    oracle.append_to(&mut circuit)?;
    for q in 0..n {
        circuit.push(Gate::Hadamard(q))?;
    }

    debug!(n, ?oracle, gates = circuit.len(), "built Deutsch-Jozsa circuit");
    Ok(circuit)
}

/// The parity-oracle instance: `deutsch_jozsa(n, Oracle::Parity)`.
pub fn parity_circuit(n: usize) -> Result<Circuit> {
    deutsch_jozsa(n, Oracle::Parity)
}
