use std::hash::Hash;

use odds_core::{Error, Result};
use odds_prob::event::event_summary;
use odds_prob::{Interval, SampleSpace};
use serde::{Deserialize, Serialize};

use crate::meta::ArtifactMeta;

/// Schema tag written into every distribution artifact.
pub const DISTRIBUTION_SCHEMA: &str = "odds_distribution_v1";

/// Interval of values singled out in a distribution plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightInterval {
    /// Lower bound (inclusive).
    pub lo: f64,
    /// Upper bound (inclusive).
    pub hi: f64,
    /// Probability mass inside `[lo, hi]`.
    pub probability: f64,
}

/// Plot-friendly artifact: value → weight/probability bars, sorted by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionArtifact {
    /// Schema tag ([`DISTRIBUTION_SCHEMA`]).
    pub schema_version: String,
    /// Provenance.
    pub meta: ArtifactMeta,
    /// Free-form description of the experiment (e.g. "10 coin flips").
    pub title: String,
    /// Distinct outcome values in ascending order.
    pub values: Vec<f64>,
    /// Weights aligned with `values`.
    pub weights: Vec<u64>,
    /// `weights[i] / total_weight`
    pub probabilities: Vec<f64>,
    /// Sum of `weights`.
    pub total_weight: u64,
    /// Optional highlighted interval and its mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightInterval>,
}

impl DistributionArtifact {
    /// Build the artifact from a numeric sample space.
    ///
    /// Fails with [`Error::EmptySpace`] when the space has no outcome.
    pub fn from_space<O>(
        title: impl Into<String>,
        space: &SampleSpace<O>,
        highlight: Option<&Interval<O>>,
    ) -> Result<Self>
    where
        O: Ord + Hash + Copy + Into<f64>,
    {
        if space.is_empty() {
            return Err(Error::EmptySpace);
        }
        let total_weight = space.total_weight();
        let sorted = space.sorted();

        let mut values = Vec::with_capacity(sorted.len());
        let mut weights = Vec::with_capacity(sorted.len());
        let mut probabilities = Vec::with_capacity(sorted.len());
        for (o, w) in sorted {
            values.push((*o).into());
            weights.push(w);
            probabilities.push(w as f64 / total_weight as f64);
        }

        let highlight = match highlight {
            Some(interval) => Some(HighlightInterval {
                lo: (*interval.lo()).into(),
                hi: (*interval.hi()).into(),
                probability: event_summary(interval, space)?.probability,
            }),
            None => None,
        };

        Ok(Self {
            schema_version: DISTRIBUTION_SCHEMA.into(),
            meta: ArtifactMeta::now()?,
            title: title.into(),
            values,
            weights,
            probabilities,
            total_weight,
            highlight,
        })
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.values.iter().zip(&self.probabilities).map(|(v, p)| v * p).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use odds_prob::combinatorics::coin_head_count_space;
    use odds_prob::interval_predicate;

    #[test]
    fn test_coin_distribution() {
        let space = coin_head_count_space(10).unwrap();
        let hl = interval_predicate(8u32, 10).unwrap();
        let art = DistributionArtifact::from_space("10 coin flips", &space, Some(&hl)).unwrap();
        assert_eq!(art.values, (0..=10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(art.total_weight, 1024);
        assert_eq!(art.weights[5], 252);
        assert_relative_eq!(art.probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(art.mean(), 5.0, epsilon = 1e-12);
        let h = art.highlight.unwrap();
        assert_relative_eq!(h.probability, 7.0 / 128.0, epsilon = 1e-15);
        assert_eq!((h.lo, h.hi), (8.0, 10.0));
    }

    #[test]
    fn test_empty_space_rejected() {
        let space: SampleSpace<u32> = SampleSpace::new();
        assert!(matches!(
            DistributionArtifact::from_space("empty", &space, None),
            Err(Error::EmptySpace)
        ));
    }
}
