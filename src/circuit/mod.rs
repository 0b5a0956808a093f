//! Circuit description: gate descriptors, the Deutsch–Jozsa builder, and
//! static analysis. Nothing in this module touches amplitudes.

pub mod analysis;
pub mod builder;
pub mod ir;

pub use analysis::{analyze, CircuitAnalysis};
pub use builder::{deutsch_jozsa, parity_circuit, Oracle};
pub use ir::{Circuit, Gate};
