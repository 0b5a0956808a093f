//! Error types shared by every simulation stage.
//!
//! Input-validation errors (`InvalidArity`, `InvalidQubitIndex`,
//! `InvalidShotCount`, ...) are raised before any state is allocated or
//! mutated. `NumericalDrift` is the only error that can surface mid-run and
//! always indicates a simulation bug rather than bad input.

use std::fmt;
use thiserror::Error;

/// Why a qubit index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QubitFault {
    /// Index is not below the register size.
    OutOfRange,
    /// Index appears twice in the same gate (e.g. CNOT control == target).
    Duplicate,
}

impl fmt::Display for QubitFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "out of range"),
            Self::Duplicate => write!(f, "used twice by the same gate"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The input register must hold at least one qubit.
    #[error("invalid arity: need at least 1 input qubit, got {n}")]
    InvalidArity { n: usize },

    /// Register would not fit in memory.
    #[error("register of {qubits} qubits exceeds the {max}-qubit limit")]
    RegisterTooLarge { qubits: usize, max: usize },

    /// A gate referenced a qubit outside the register, or the same qubit twice.
    #[error("invalid qubit index {index} for {num_qubits}-qubit register: {fault}")]
    InvalidQubitIndex {
        index: usize,
        num_qubits: usize,
        fault: QubitFault,
    },

    /// Sampling needs at least one shot.
    #[error("invalid shot count {shots}: must be positive")]
    InvalidShotCount { shots: usize },

    /// Probability mass drifted too far from 1 to trust the distribution.
    #[error("numerical drift: total probability {total} is not 1")]
    NumericalDrift { total: f64 },

    /// Tolerances must satisfy 0 < renormalize <= fatal.
    #[error("invalid tolerance: renormalize={renormalize}, fatal={fatal}")]
    InvalidTolerance { renormalize: f64, fatal: f64 },

    /// Verdict threshold must lie in [0, 0.5).
    #[error("invalid verdict threshold {threshold}: must lie in [0, 0.5)")]
    InvalidThreshold { threshold: f64 },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;
