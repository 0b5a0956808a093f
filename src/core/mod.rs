pub mod complex;
pub mod gates;
pub mod state;

// Convenience re-exports for library users
pub use complex::Complex;
pub use gates::{apply_cnot, apply_gate, apply_hadamard, apply_pauli_x};
pub use state::{StateVector, MAX_QUBITS};
