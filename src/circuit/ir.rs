//! Circuit intermediate representation.
//!
//! A circuit is a flat, ordered sequence of `Gate`s over a register of
//! `input_qubits` inputs plus one ancilla at index `input_qubits`. The IR is
//! plain data: it derives serde so external renderers can consume it, and its
//! `Display` impl prints one gate per line.

use crate::core::MAX_QUBITS;
use crate::error::{QubitFault, Result, SimError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Gate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Hadamard(usize),
    PauliX(usize),
    ControlledNot { control: usize, target: usize },
}

impl Gate {
    /// Mnemonic used in listings and analysis histograms.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Hadamard(_) => "H",
            Self::PauliX(_) => "X",
            Self::ControlledNot { .. } => "CNOT",
        }
    }

    /// Qubit indices referenced by this gate, control first.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::Hadamard(q) | Self::PauliX(q) => vec![q],
            Self::ControlledNot { control, target } => vec![control, target],
        }
    }

    /// Check every index is below `num_qubits` and no index repeats.
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        let qubits = self.qubits();
        for (pos, &q) in qubits.iter().enumerate() {
            if q >= num_qubits {
                return Err(SimError::InvalidQubitIndex {
                    index: q,
                    num_qubits,
                    fault: QubitFault::OutOfRange,
                });
            }
            if qubits[..pos].contains(&q) {
                return Err(SimError::InvalidQubitIndex {
                    index: q,
                    num_qubits,
                    fault: QubitFault::Duplicate,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hadamard(q) => write!(f, "H {q}"),
            Self::PauliX(q) => write!(f, "X {q}"),
            Self::ControlledNot { control, target } => write!(f, "CNOT {control} {target}"),
        }
    }
}

// ── Circuit ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    input_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Empty circuit over `input_qubits` inputs plus the ancilla.
    pub fn new(input_qubits: usize) -> Result<Self> {
        if input_qubits < 1 {
            return Err(SimError::InvalidArity { n: input_qubits });
        }
        if input_qubits + 1 > MAX_QUBITS {
            return Err(SimError::RegisterTooLarge {
                qubits: input_qubits + 1,
                max: MAX_QUBITS,
            });
        }
        Ok(Self {
            input_qubits,
            gates: Vec::new(),
        })
    }

    /// Append a gate after checking it against the register.
    pub fn push(&mut self, gate: Gate) -> Result<&mut Self> {
        gate.validate(self.num_qubits())?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Number of input qubits `n` (the measured register).
    pub fn input_qubits(&self) -> usize {
        self.input_qubits
    }

    /// Total register size, inputs plus ancilla.
    pub fn num_qubits(&self) -> usize {
        self.input_qubits + 1
    }

    /// Index of the ancilla qubit.
    pub fn ancilla(&self) -> usize {
        self.input_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Re-check the whole circuit; deserialized circuits skip `push`.
    pub fn validate(&self) -> Result<()> {
        if self.input_qubits < 1 {
            return Err(SimError::InvalidArity { n: self.input_qubits });
        }
        if self.num_qubits() > MAX_QUBITS {
            return Err(SimError::RegisterTooLarge {
                qubits: self.num_qubits(),
                max: MAX_QUBITS,
            });
        }
        self.gates
            .iter()
            .try_for_each(|g| g.validate(self.num_qubits()))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QREG {} (ancilla q{})", self.num_qubits(), self.ancilla())?;
        for gate in &self.gates {
            writeln!(f, "{gate}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
