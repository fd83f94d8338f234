//! Probability building blocks for odds.
//!
//! This crate hosts the probability evaluator:
//! - weighted sample spaces (set form = every weight 1)
//! - event conditions, events, and exact event probabilities
//! - combinatorial spaces and their collapsed sufficient statistics
//! - a binomial reference for cross-checking enumeration

#![warn(missing_docs)]

/// Closed-form binomial reference.
pub mod binomial;
/// Repeated-experiment sample spaces.
pub mod combinatorics;
/// Events over a sample space.
pub mod event;
/// Interval conditions.
pub mod interval;
/// The weighted sample space.
pub mod space;

pub use combinatorics::{Child, Coin};
pub use event::{Event, and, event_probability, matching_event, not, or};
pub use interval::{Interval, SaturatingStep, interval_predicate, is_in_interval};
pub use space::SampleSpace;
