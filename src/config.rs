//! Run configuration.
//!
//! `SimulationConfig::default()` reproduces the reference run: 3 input
//! qubits, the parity oracle, 1024 shots, entropy-seeded sampling.

use crate::circuit::Oracle;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Probability-sum tolerances applied before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Deviation of Σ|αᵢ|² from 1 above which the distribution is renormalized.
    pub renormalize: f64,
    /// Deviation above which the run aborts with `NumericalDrift`.
    pub fatal: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            renormalize: 1e-9,
            fatal: 1e-6,
        }
    }
}

impl Tolerance {
    pub fn validate(&self) -> Result<()> {
        let ok = self.renormalize.is_finite()
            && self.fatal.is_finite()
            && self.renormalize > 0.0
            && self.renormalize <= self.fatal;
        if ok {
            Ok(())
        } else {
            Err(SimError::InvalidTolerance {
                renormalize: self.renormalize,
                fatal: self.fatal,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of input qubits `n`; the register has `n + 1` qubits.
    pub input_qubits: usize,
    pub shots: usize,
    /// RNG seed for reproducible sampling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub oracle: Oracle,
    pub tolerance: Tolerance,
    /// Fraction of shots the all-zero outcome may deviate from the ideal
    /// 0 (balanced) or 1 (constant) before the verdict is inconclusive.
    pub verdict_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input_qubits: 3,
            shots: 1024,
            seed: None,
            oracle: Oracle::Parity,
            tolerance: Tolerance::default(),
            verdict_threshold: 0.01,
        }
    }
}

impl SimulationConfig {
    pub fn new(input_qubits: usize, shots: usize) -> Self {
        Self {
            input_qubits,
            shots,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_oracle(mut self, oracle: Oracle) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_verdict_threshold(mut self, threshold: f64) -> Self {
        self.verdict_threshold = threshold;
        self
    }

    /// Reject bad input before anything is allocated.
    ///
    /// Register-size limits are checked by the circuit builder.
    pub fn validate(&self) -> Result<()> {
        if self.input_qubits < 1 {
            return Err(SimError::InvalidArity {
                n: self.input_qubits,
            });
        }
        if self.shots == 0 {
            return Err(SimError::InvalidShotCount { shots: self.shots });
        }
        self.tolerance.validate()?;
        if !(0.0..0.5).contains(&self.verdict_threshold) {
            return Err(SimError::InvalidThreshold {
                threshold: self.verdict_threshold,
            });
        }
        Ok(())
    }
}
