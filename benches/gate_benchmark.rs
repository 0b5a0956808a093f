//! djsim Criterion benchmark suite
//!
//! Covers:
//!   - Single-qubit gate throughput (H, X across the register)
//!   - CNOT throughput
//!   - Full Deutsch–Jozsa circuit execution at various sizes
//!   - Sampler construction and shot throughput
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use djsim::core::{apply_cnot, apply_hadamard, apply_pauli_x};
use djsim::{execute, parity_circuit, SimulationConfig, Sampler, StateVector, Tolerance};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Gate throughput ───────────────────────────────────────────────────────

fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");
    for n in [4usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("H", n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n).unwrap();
                for q in 0..n {
                    apply_hadamard(&mut state, black_box(q)).unwrap();
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("X", n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n).unwrap();
                for q in 0..n {
                    apply_pauli_x(&mut state, black_box(q)).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_cnot_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot_chain");
    for n in [4usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n).unwrap();
                apply_hadamard(&mut state, 0).unwrap();
                for q in 0..n - 1 {
                    apply_cnot(&mut state, black_box(q), black_box(q + 1)).unwrap();
                }
            });
        });
    }
    group.finish();
}

// ── Deutsch–Jozsa pipeline ────────────────────────────────────────────────

fn bench_execute_parity(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_parity");
    for n in [3usize, 8, 12, 16] {
        let circuit = parity_circuit(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &circuit, |b, circuit| {
            b.iter(|| execute(black_box(circuit)).unwrap());
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    for n in [3usize, 10] {
        let circuit = parity_circuit(n).unwrap();
        let state = execute(&circuit).unwrap();
        let tolerance = Tolerance::default();

        group.bench_with_input(BenchmarkId::new("sampler_new", n), &state, |b, state| {
            b.iter(|| Sampler::new(black_box(state), n, &tolerance).unwrap());
        });

        let sampler = Sampler::new(&state, n, &tolerance).unwrap();
        group.bench_with_input(BenchmarkId::new("shots_4096", n), &sampler, |b, sampler| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| sampler.sample(black_box(4096), &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let config = SimulationConfig::default().with_seed(0);
    c.bench_function("run_default_n3_1024_shots", |b| {
        b.iter(|| djsim::run(black_box(&config)).unwrap())
    });
}

criterion_group!(gate_benches, bench_single_qubit_gates, bench_cnot_chain);
criterion_group!(pipeline_benches, bench_execute_parity, bench_sampling, bench_full_run);

criterion_main!(gate_benches, pipeline_benches);
