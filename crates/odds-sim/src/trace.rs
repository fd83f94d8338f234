//! Running-frequency traces.

use serde::{Deserialize, Serialize};

/// Relative frequency of a condition after each of a sequence of trials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTrace {
    /// Trial number, 1-based.
    pub trials: Vec<u64>,
    /// Cumulative number of hits after each trial.
    pub hits: Vec<u64>,
    /// `hits[i] / trials[i]`
    pub frequencies: Vec<f64>,
}

impl FrequencyTrace {
    /// Empty trace with room for `n` trials.
    pub fn with_capacity(n: usize) -> Self {
        Self { trials: Vec::with_capacity(n), hits: Vec::with_capacity(n), frequencies: Vec::with_capacity(n) }
    }

    /// Record one more trial.
    pub fn record(&mut self, hit: bool) {
        let n = self.trials.len() as u64 + 1;
        let h = self.hits.last().copied().unwrap_or(0) + u64::from(hit);
        self.trials.push(n);
        self.hits.push(h);
        self.frequencies.push(h as f64 / n as f64);
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// True before the first trial.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Frequency after the last trial.
    pub fn final_frequency(&self) -> Option<f64> {
        self.frequencies.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut t = FrequencyTrace::default();
        assert!(t.final_frequency().is_none());
        for hit in [true, false, true, true] {
            t.record(hit);
        }
        assert_eq!(t.trials, vec![1, 2, 3, 4]);
        assert_eq!(t.hits, vec![1, 1, 2, 3]);
        assert_eq!(t.frequencies, vec![1.0, 0.5, 2.0 / 3.0, 0.75]);
        assert_eq!(t.final_frequency(), Some(0.75));
    }
}
