//! Simulation runtime.
//!
//! Pipeline: `SimulationConfig` → Circuit builder → Executor → Sampler → Report
//!
//! Each run owns its state vector and RNG; nothing is shared between runs, so
//! independent runs can be replicated across threads by the caller.
pub mod executor;
pub mod sampler;

pub use executor::execute;
pub use sampler::{SampleCounts, Sampler};

use crate::circuit::{deutsch_jozsa, Circuit};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::report::{CountsTable, Verdict};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, info_span};

/// Everything a run produces, as plain data for downstream renderers.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub circuit: Circuit,
    pub counts: CountsTable,
    pub verdict: Verdict,
}

/// Validate `config`, then build, execute, sample and classify.
pub fn run(config: &SimulationConfig) -> Result<RunResult> {
    config.validate()?;
    let _span = info_span!(
        "deutsch_jozsa",
        n = config.input_qubits,
        shots = config.shots,
        oracle = ?config.oracle
    )
    .entered();

    let circuit = deutsch_jozsa(config.input_qubits, config.oracle)?;
    let state = execute(&circuit)?;
    let sampler = Sampler::new(&state, circuit.input_qubits(), &config.tolerance)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let samples = sampler.sample(config.shots, &mut rng)?;

    let counts = CountsTable::from_samples(&samples);
    let verdict = counts.classify(config.verdict_threshold);
    info!(%verdict, outcomes = counts.len(), "run complete");

    Ok(RunResult {
        circuit,
        counts,
        verdict,
    })
}

/// Run the parity-oracle Deutsch–Jozsa algorithm and return the counts table.
pub fn deutsch_jozsa_parity(n: usize, shots: usize) -> Result<CountsTable> {
    run(&SimulationConfig::new(n, shots)).map(|r| r.counts)
}
