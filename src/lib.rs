//! # djsim
//!
//! State-vector quantum simulator sized for the Deutsch–Jozsa algorithm:
//! Hadamard, Pauli-X and CNOT over `n` input qubits plus one ancilla,
//! seeded shot sampling of the input register, and a sorted counts table.
//!
//! ## Quick Start
//!
//! ```rust
//! use djsim::{deutsch_jozsa_parity, run, SimulationConfig, Verdict};
//!
//! // 3 input qubits, parity oracle, 1024 shots
//! let counts = deutsch_jozsa_parity(3, 1024).unwrap();
//! assert_eq!(counts.get("000"), 0);
//! assert_eq!(counts.total(), 1024);
//!
//! // Reproducible run with the verdict attached
//! let result = run(&SimulationConfig::new(4, 256).with_seed(7)).unwrap();
//! assert_eq!(result.verdict, Verdict::Balanced);
//! ```
//!
//! Bitstrings put qubit n-1 first and qubit 0 last.

pub mod circuit;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod report;
pub mod runtime;

pub use circuit::{analyze, deutsch_jozsa, parity_circuit, Circuit, CircuitAnalysis, Gate, Oracle};
pub use config::{SimulationConfig, Tolerance};
pub use crate::core::{Complex, StateVector};
pub use error::{QubitFault, Result, SimError};
pub use report::{CountsTable, Verdict};
pub use runtime::{deutsch_jozsa_parity, execute, run, RunResult, SampleCounts, Sampler};
