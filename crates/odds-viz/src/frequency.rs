use odds_core::{Error, Result};
use odds_sim::FrequencyTrace;
use serde::{Deserialize, Serialize};

use crate::meta::ArtifactMeta;

/// Schema tag written into every frequency artifact.
pub const FREQUENCY_SCHEMA: &str = "odds_frequency_v1";

/// Plot-friendly artifact: relative frequency vs. number of trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyCurveArtifact {
    /// Schema tag ([`FREQUENCY_SCHEMA`]).
    pub schema_version: String,
    /// Provenance.
    pub meta: ArtifactMeta,
    /// Seed of the simulation, when it was seeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Trial numbers (x-values).
    pub trials: Vec<u64>,
    /// Relative frequencies aligned with `trials`.
    pub frequencies: Vec<f64>,
    /// Exact probability, drawn as a reference line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    /// Frequency after the last simulated trial (before any downsampling).
    pub final_frequency: f64,
    /// Number of simulated trials (before any downsampling).
    pub n_trials: u64,
}

impl FrequencyCurveArtifact {
    /// Build from plain aligned sequences.
    pub fn from_series(trials: Vec<u64>, frequencies: Vec<f64>, expected: Option<f64>) -> Result<Self> {
        if trials.len() != frequencies.len() {
            return Err(Error::Validation(format!(
                "trials ({}) and frequencies ({}) must have the same length",
                trials.len(),
                frequencies.len()
            )));
        }
        let (Some(&n_trials), Some(&final_frequency)) = (trials.last(), frequencies.last()) else {
            return Err(Error::Validation("frequency curve needs at least one trial".into()));
        };
        if let Some(p) = expected {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Validation(format!("expected probability must be in [0,1], got {}", p)));
            }
        }
        Ok(Self {
            schema_version: FREQUENCY_SCHEMA.into(),
            meta: ArtifactMeta::now()?,
            seed: None,
            trials,
            frequencies,
            expected,
            final_frequency,
            n_trials,
        })
    }

    /// Build from a simulated trace.
    pub fn from_trace(trace: &FrequencyTrace, expected: Option<f64>, seed: Option<u64>) -> Result<Self> {
        let mut art = Self::from_series(trace.trials.clone(), trace.frequencies.clone(), expected)?;
        art.seed = seed;
        Ok(art)
    }

    /// Keep at most `max_points` evenly spaced points; the last point is always kept.
    pub fn downsample(mut self, max_points: usize) -> Self {
        let n = self.trials.len();
        if max_points == 0 || n <= max_points {
            return self;
        }
        let stride = n.div_ceil(max_points);
        let keep: Vec<usize> =
            (0..n).filter(|i| i % stride == stride - 1 || *i == n - 1).collect();
        self.trials = keep.iter().map(|&i| self.trials[i]).collect();
        self.frequencies = keep.iter().map(|&i| self.frequencies[i]).collect();
        self
    }
}
