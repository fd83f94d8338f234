//! Events and their probabilities.
//!
//! Every query is a full linear pass over the sample space; nothing is
//! cached between calls.

use std::collections::HashSet;
use std::hash::Hash;

use odds_core::{Condition, EventSummary, Result};
use rayon::prelude::*;

use crate::space::SampleSpace;

/// Outcomes of a sample space that satisfy a condition.
pub type Event<O> = HashSet<O>;

/// Subset of outcomes in `space` satisfying `condition` (outcomes, not weights).
pub fn matching_event<O, C>(condition: &C, space: &SampleSpace<O>) -> Event<O>
where
    O: Eq + Hash + Clone,
    C: Condition<O> + ?Sized,
{
    space.outcomes().filter(|o| condition.holds(o)).cloned().collect()
}

/// Summed weight of the outcomes satisfying `condition`.
pub fn event_weight<O, C>(condition: &C, space: &SampleSpace<O>) -> u64
where
    O: Eq + Hash,
    C: Condition<O> + ?Sized,
{
    space.iter().filter(|(o, _)| condition.holds(o)).map(|(_, w)| w).sum()
}

/// Matching measure, total measure and their ratio.
pub fn event_summary<O, C>(condition: &C, space: &SampleSpace<O>) -> Result<EventSummary>
where
    O: Eq + Hash,
    C: Condition<O> + ?Sized,
{
    EventSummary::new(event_weight(condition, space), space.total_weight())
}

/// `P(event) = matching weight / total weight`.
///
/// For a set-form space this is `|matching| / |space|`. Fails with
/// [`odds_core::Error::EmptySpace`] when the space has zero total measure.
pub fn event_probability<O, C>(condition: &C, space: &SampleSpace<O>) -> Result<f64>
where
    O: Eq + Hash,
    C: Condition<O> + ?Sized,
{
    Ok(event_summary(condition, space)?.probability)
}

/// [`event_probability`] evaluated as a rayon map-reduce over outcomes.
pub fn par_event_probability<O, C>(condition: &C, space: &SampleSpace<O>) -> Result<f64>
where
    O: Eq + Hash + Sync,
    C: Condition<O> + Sync + ?Sized,
{
    let matching: u64 = space.par_iter().filter(|(o, _)| condition.holds(o)).map(|(_, w)| w).sum();
    Ok(EventSummary::new(matching, space.total_weight())?.probability)
}

/// Negation of a condition.
#[derive(Debug, Clone, Copy)]
pub struct Not<C>(pub C);

impl<O: ?Sized, C: Condition<O>> Condition<O> for Not<C> {
    #[inline]
    fn holds(&self, outcome: &O) -> bool {
        !self.0.holds(outcome)
    }
}

/// Both conditions hold.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

impl<O: ?Sized, A: Condition<O>, B: Condition<O>> Condition<O> for And<A, B> {
    #[inline]
    fn holds(&self, outcome: &O) -> bool {
        self.0.holds(outcome) && self.1.holds(outcome)
    }
}

/// Either condition holds.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

impl<O: ?Sized, A: Condition<O>, B: Condition<O>> Condition<O> for Or<A, B> {
    #[inline]
    fn holds(&self, outcome: &O) -> bool {
        self.0.holds(outcome) || self.1.holds(outcome)
    }
}

/// Negation of a condition.
pub fn not<C>(c: C) -> Not<C> {
    Not(c)
}

/// Both conditions hold.
pub fn and<A, B>(a: A, b: B) -> And<A, B> {
    And(a, b)
}

/// At least one condition holds.
pub fn or<A, B>(a: A, b: B) -> Or<A, B> {
    Or(a, b)
}
