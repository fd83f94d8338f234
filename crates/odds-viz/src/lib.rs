//! # odds-viz
//!
//! Visualization data artifacts for odds.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects).

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Distribution bars over a numeric sample space.
pub mod distribution;

/// Running-frequency curves from simulations.
pub mod frequency;

/// Metadata shared by every artifact.
pub mod meta;

pub use distribution::{DistributionArtifact, HighlightInterval};
pub use frequency::FrequencyCurveArtifact;
pub use meta::ArtifactMeta;
