//! Random-draw collaborators for odds.
//!
//! Everything here is driven by a [`Sampler`] wrapping `StdRng`; the same
//! seed always reproduces the same draws. Sample spaces are drawn from in
//! outcome order, so reproducibility does not depend on hash-map layout.

#![warn(missing_docs)]

/// Seeded draws and simulations.
pub mod sampler;
/// Running-frequency traces.
pub mod trace;

pub use sampler::{Sampler, WeightedUrn};
pub use trace::FrequencyTrace;
