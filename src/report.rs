//! Counts table and Deutsch–Jozsa verdict.
//!
//! Bit ordering of the bitstring keys: qubit n-1 is the leftmost character
//! and qubit 0 the rightmost, so the string reads as the outcome integer in
//! binary. Keys are fixed-width, which makes lexicographic order equal to
//! numeric order.

use crate::runtime::sampler::SampleCounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountsTable {
    counts: BTreeMap<String, usize>,
}

impl CountsTable {
    pub fn from_samples(samples: &SampleCounts) -> Self {
        let width = samples.input_qubits;
        let counts = samples
            .counts
            .iter()
            .map(|(&outcome, &count)| (format!("{outcome:0width$b}"), count))
            .collect();
        Self { counts }
    }

    /// Tally for `bitstring`; outcomes never observed count 0.
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct observed outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Outcomes in ascending bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Width of the bitstrings, or `None` for an empty table.
    pub fn width(&self) -> Option<usize> {
        self.counts.keys().next().map(String::len)
    }

    /// Fraction of shots that produced the all-zero outcome.
    pub fn zero_fraction(&self) -> f64 {
        let total = self.total();
        let Some(width) = self.width() else {
            return 0.0;
        };
        if total == 0 {
            return 0.0;
        }
        self.get(&"0".repeat(width)) as f64 / total as f64
    }

    /// Deutsch–Jozsa decision rule on the all-zero outcome.
    pub fn classify(&self, threshold: f64) -> Verdict {
        let zero = self.zero_fraction();
        if self.is_empty() {
            Verdict::Inconclusive
        } else if zero >= 1.0 - threshold {
            Verdict::Constant
        } else if zero <= threshold {
            Verdict::Balanced
        } else {
            Verdict::Inconclusive
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&SampleCounts> for CountsTable {
    fn from(samples: &SampleCounts) -> Self {
        Self::from_samples(samples)
    }
}

impl fmt::Display for CountsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bits, count) in self.iter() {
            writeln!(f, "{bits}: {count}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Constant,
    Balanced,
    /// The all-zero outcome is neither (nearly) always nor (nearly) never seen.
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Balanced => write!(f, "balanced"),
            Self::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn samples(input_qubits: usize, pairs: &[(usize, usize)]) -> SampleCounts {
        let counts: HashMap<usize, usize> = pairs.iter().copied().collect();
        SampleCounts {
            shots: counts.values().sum(),
            counts,
            input_qubits,
        }
    }

    #[test]
    fn test_keys_are_fixed_width_msb_first() {
        let table = CountsTable::from_samples(&samples(3, &[(0b001, 5), (0b110, 3)]));
        assert_eq!(table.get("001"), 5);
        assert_eq!(table.get("110"), 3);
        assert_eq!(table.get("000"), 0);
        assert_eq!(table.width(), Some(3));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let table =
            CountsTable::from_samples(&samples(2, &[(3, 1), (0, 2), (2, 3), (1, 4)]));
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["00", "01", "10", "11"]);
        assert_eq!(table.to_string(), "00: 2\n01: 4\n10: 3\n11: 1\n");
    }

    #[test]
    fn test_total_matches_shots() {
        let s = samples(2, &[(0, 10), (1, 20), (3, 70)]);
        assert_eq!(CountsTable::from(&s).total(), s.shots);
    }

    #[test]
    fn test_classify() {
        let balanced = CountsTable::from_samples(&samples(3, &[(0b111, 1024)]));
        assert_eq!(balanced.classify(0.01), Verdict::Balanced);

        let constant = CountsTable::from_samples(&samples(3, &[(0, 1024)]));
        assert_eq!(constant.classify(0.01), Verdict::Constant);

        let mixed = CountsTable::from_samples(&samples(1, &[(0, 50), (1, 50)]));
        assert_eq!(mixed.classify(0.01), Verdict::Inconclusive);

        assert_eq!(CountsTable::default().classify(0.01), Verdict::Inconclusive);
    }

    #[test]
    fn test_json_dump() {
        let table = CountsTable::from_samples(&samples(2, &[(1, 3), (2, 1)]));
        let json = table.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["01"], 3);
        assert_eq!(value["10"], 1);
        assert_eq!(CountsTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Balanced.to_string(), "balanced");
        assert_eq!(Verdict::Constant.to_string(), "constant");
    }
}
