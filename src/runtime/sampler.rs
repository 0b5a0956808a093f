//! Shot sampling from a final state vector.
//!
//! Each shot draws a full-register basis state with probability |αᵢ|² and then
//! drops the ancilla bit, which is equivalent to measuring the input qubits
//! and discarding the ancilla. The cumulative distribution is built once, so a
//! shot costs one uniform draw plus a binary search.

use crate::config::Tolerance;
use crate::core::StateVector;
use crate::error::{Result, SimError};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Raw per-outcome tallies for the `input_qubits`-bit input register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCounts {
    /// Input-register outcome (qubit i → bit i) → number of shots.
    pub counts: HashMap<usize, usize>,
    pub shots: usize,
    pub input_qubits: usize,
}

impl SampleCounts {
    pub fn count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[derive(Debug, Clone)]
pub struct Sampler {
    /// cumulative[i] = P(outcome ≤ i); the last entry is exactly 1.
    cumulative: Vec<f64>,
    input_mask: usize,
    input_qubits: usize,
}

impl Sampler {
    /// Prepare sampling of the low `input_qubits` qubits of `state`.
    ///
    /// Renormalizes if Σ|αᵢ|² is off by more than `tolerance.renormalize`;
    /// fails with `NumericalDrift` if it is off by more than `tolerance.fatal`.
    pub fn new(state: &StateVector, input_qubits: usize, tolerance: &Tolerance) -> Result<Self> {
        tolerance.validate()?;
        if input_qubits < 1 || input_qubits > state.num_qubits() {
            return Err(SimError::InvalidArity { n: input_qubits });
        }

        let probs = state.probabilities();
        let total: f64 = probs.iter().sum();
        let drift = (total - 1.0).abs();
        if !total.is_finite() || total <= 0.0 || drift > tolerance.fatal {
            return Err(SimError::NumericalDrift { total });
        }

        let scale = if drift > tolerance.renormalize {
            warn!(total, drift, "probability sum drifted; renormalizing");
            1.0 / total
        } else {
            1.0
        };

        let mut cumulative = Vec::with_capacity(probs.len());
        let mut acc = 0.0;
        for p in probs {
            acc += p * scale;
            cumulative.push(acc);
        }
        if (acc - 1.0).abs() > tolerance.renormalize {
            return Err(SimError::NumericalDrift { total: acc });
        }
        // Absorb rounding so every draw in [0, 1) lands on some outcome.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        debug!(
            basis_states = cumulative.len(),
            input_qubits,
            renormalized = scale != 1.0,
            "sampler ready"
        );
        Ok(Self {
            cumulative,
            input_mask: (1usize << input_qubits) - 1,
            input_qubits,
        })
    }

    /// Draw one full-register basis state.
    pub fn sample_basis<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        // First index whose cumulative mass exceeds r; zero-probability
        // states have cumulative equal to their predecessor and are skipped.
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.cumulative.len() - 1)
    }

    /// Draw one input-register outcome (ancilla discarded).
    pub fn sample_input<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_basis(rng) & self.input_mask
    }

    /// Run `shots` independent shots and tally the input-register outcomes.
    pub fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Result<SampleCounts> {
        if shots == 0 {
            return Err(SimError::InvalidShotCount { shots });
        }

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for _ in 0..shots {
            *counts.entry(self.sample_input(rng)).or_insert(0) += 1;
        }

        debug!(shots, distinct = counts.len(), "sampling finished");
        Ok(SampleCounts {
            counts,
            shots,
            input_qubits: self.input_qubits,
        })
    }
}
