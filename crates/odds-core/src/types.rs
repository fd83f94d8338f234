//! Common data types for odds

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Matching and total measure of an event, with the resulting probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Summed weight of the outcomes satisfying the condition.
    pub matching_weight: u64,

    /// Summed weight of the whole sample space.
    pub total_weight: u64,

    /// `matching_weight / total_weight`
    pub probability: f64,
}

impl EventSummary {
    /// Build a summary; fails with [`Error::EmptySpace`] when `total_weight == 0`.
    pub fn new(matching_weight: u64, total_weight: u64) -> Result<Self> {
        if total_weight == 0 {
            return Err(Error::EmptySpace);
        }
        if matching_weight > total_weight {
            return Err(Error::Validation(format!(
                "matching weight {} exceeds total weight {}",
                matching_weight, total_weight
            )));
        }
        Ok(Self {
            matching_weight,
            total_weight,
            probability: matching_weight as f64 / total_weight as f64,
        })
    }

    /// Summary of the complementary event over the same space.
    pub fn complement(&self) -> Self {
        let matching_weight = self.total_weight - self.matching_weight;
        Self {
            matching_weight,
            total_weight: self.total_weight,
            probability: matching_weight as f64 / self.total_weight as f64,
        }
    }
}
