//! Quantum state vector representation.
//!
//! An m-qubit register has 2^m basis states and the state vector holds one
//! complex amplitude per basis state. Basis index bit `i` is the value of
//! qubit `i` (qubit 0 is the least-significant bit).
//!
//! The vector must satisfy Σ|αᵢ|² = 1; every gate in `super::gates` is
//! unitary and so preserves this up to floating-point rounding.

use super::complex::Complex;
use crate::error::{Result, SimError};
use std::fmt;

/// Largest register the simulator will allocate (2^30 amplitudes ≈ 16 GiB).
pub const MAX_QUBITS: usize = 30;

#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    pub(crate) amplitudes: Vec<Complex>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(SimError::InvalidArity { n: 0 });
        }
        if num_qubits > MAX_QUBITS {
            return Err(SimError::RegisterTooLarge {
                qubits: num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    #[inline(always)]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space: 2^m
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`, or `None` past the end.
    pub fn amplitude(&self, index: usize) -> Option<Complex> {
        self.amplitudes.get(index).copied()
    }

    /// Probability of measuring basis state at index `i`: |αᵢ|²
    #[inline(always)]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sq()
    }

    /// Probabilities of every basis state, without collapsing anything.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sq()).collect()
    }

    /// Total probability (should be ≈ 1.0)
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sq()).sum()
    }

    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= epsilon
    }

    /// Fails with `InvalidQubitIndex` unless `qubit` addresses this register.
    pub fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit < self.num_qubits {
            Ok(())
        } else {
            Err(SimError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
                fault: crate::error::QubitFault::OutOfRange,
            })
        }
    }

    /// Check if this qubit's bit is set in basis state index `basis_idx`.
    #[inline(always)]
    pub fn qubit_bit(basis_idx: usize, qubit: usize) -> bool {
        (basis_idx >> qubit) & 1 == 1
    }

    /// Bitstring for basis state `index`, qubit m-1 leftmost and qubit 0 rightmost.
    pub fn basis_label(&self, index: usize) -> String {
        (0..self.num_qubits)
            .rev()
            .map(|q| if Self::qubit_bit(index, q) { '1' } else { '0' })
            .collect()
    }

    /// Probability of measuring `qubit` as |1⟩, marginalized over all other qubits.
    pub fn marginal_probability_one(&self, qubit: usize) -> f64 {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| Self::qubit_bit(*i, qubit))
            .map(|(_, a)| a.norm_sq())
            .sum()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateVector ({} qubits, dim={}):", self.num_qubits, self.dim())?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sq();
            if prob > 1e-12 {
                writeln!(
                    f,
                    "  |{}⟩  amplitude: {}  probability: {:.4}",
                    self.basis_label(i),
                    amp,
                    prob
                )?;
            }
        }
        Ok(())
    }
}
