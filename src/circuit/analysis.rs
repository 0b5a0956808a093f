//! Static circuit profiling.
//!
//! Computes structural metrics **without** executing the circuit, so that a
//! renderer or report can show them next to the counts:
//!
//! | Metric                 | Description                                         |
//! |------------------------|-----------------------------------------------------|
//! | `gate_count`           | Number of gates                                     |
//! | `circuit_depth`        | Critical-path length assuming unbounded parallelism |
//! | `two_qubit_gate_count` | CNOTs, the entangling cost of the circuit           |
//! | `gate_histogram`       | Per-mnemonic gate counts                            |
//! | `qubit_utilization`    | Number of gates touching each qubit                 |

use super::ir::Circuit;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircuitAnalysis {
    /// Register size, inputs plus ancilla.
    pub num_qubits: usize,
    pub gate_count: usize,
    /// Minimum number of sequential time steps with unlimited qubit parallelism.
    pub circuit_depth: usize,
    pub two_qubit_gate_count: usize,
    /// Mnemonic → count, sorted by mnemonic.
    pub gate_histogram: BTreeMap<&'static str, usize>,
    /// Index = qubit.
    pub qubit_utilization: Vec<usize>,
}

impl CircuitAnalysis {
    /// Fraction of gates that are multi-qubit (entangling).
    pub fn entanglement_ratio(&self) -> f64 {
        if self.gate_count == 0 {
            return 0.0;
        }
        self.two_qubit_gate_count as f64 / self.gate_count as f64
    }

    /// Human-readable profiling report.
    pub fn report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("  Qubits         : {}\n", self.num_qubits));
        out.push_str(&format!("  Gate count     : {}\n", self.gate_count));
        out.push_str(&format!("  Circuit depth  : {}\n", self.circuit_depth));
        out.push_str(&format!(
            "  2-qubit gates  : {}  ({:.1}% entangling)\n",
            self.two_qubit_gate_count,
            self.entanglement_ratio() * 100.0
        ));

        out.push_str("\n  Gate breakdown:\n");
        let mut hist: Vec<(&&str, &usize)> = self.gate_histogram.iter().collect();
        hist.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (mnemonic, count) in hist {
            out.push_str(&format!("    {:8}  {count}\n", mnemonic));
        }

        out.push_str("\n  Qubit utilization (gate touches per qubit):\n");
        let max_uses = self.qubit_utilization.iter().copied().max().unwrap_or(1).max(1);
        for (q, &uses) in self.qubit_utilization.iter().enumerate() {
            let bar_len = (uses * 20 / max_uses).min(20);
            let bar = "█".repeat(bar_len);
            let pad = " ".repeat(20 - bar_len);
            out.push_str(&format!("    q{q:<2}  {bar}{pad}  {uses}\n"));
        }

        out
    }
}

/// Profile `circuit` in O(gates) time.
pub fn analyze(circuit: &Circuit) -> CircuitAnalysis {
    let num_qubits = circuit.num_qubits();
    // Depth of the frontier on each qubit.
    let mut qubit_time = vec![0usize; num_qubits];
    let mut two_qubit_gate_count = 0usize;
    let mut gate_histogram: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut qubit_utilization = vec![0usize; num_qubits];

    for gate in circuit.gates() {
        *gate_histogram.entry(gate.mnemonic()).or_insert(0) += 1;

        let qubits = gate.qubits();
        for &q in &qubits {
            qubit_utilization[q] += 1;
        }
        if qubits.len() >= 2 {
            two_qubit_gate_count += 1;
        }

        let start = qubits.iter().map(|&q| qubit_time[q]).max().unwrap_or(0);
        for &q in &qubits {
            qubit_time[q] = start + 1;
        }
    }

    CircuitAnalysis {
        num_qubits,
        gate_count: circuit.len(),
        circuit_depth: qubit_time.iter().copied().max().unwrap_or(0),
        two_qubit_gate_count,
        gate_histogram,
        qubit_utilization,
    }
}
