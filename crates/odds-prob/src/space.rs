//! Weighted sample spaces.
//!
//! A single representation covers both forms of sample space: a *set* of
//! equally likely outcomes is a map where every weight is 1, and a
//! *weighted* space maps each outcome to a positive integer count. Outcomes
//! with weight 0 are never stored.

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

use odds_core::{Error, Result};
use rayon::prelude::*;

/// Outcome → positive integer weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpace<O: Eq + Hash> {
    weights: HashMap<O, u64>,
    total: u64,
}

impl<O: Eq + Hash> Default for SampleSpace<O> {
    fn default() -> Self {
        Self { weights: HashMap::new(), total: 0 }
    }
}

impl<O: Eq + Hash> SampleSpace<O> {
    /// Empty space (zero total measure).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-form space: every distinct outcome is equally likely.
    ///
    /// Repeated outcomes collapse to a single entry of weight 1.
    pub fn uniform<I: IntoIterator<Item = O>>(outcomes: I) -> Self {
        let mut weights = HashMap::new();
        for o in outcomes {
            weights.insert(o, 1);
        }
        let total = weights.len() as u64;
        Self { weights, total }
    }

    /// Histogram of a multiset: weight = multiplicity.
    pub fn from_multiset<I: IntoIterator<Item = O>>(outcomes: I) -> Self {
        let mut space = Self::new();
        for o in outcomes {
            *space.weights.entry(o).or_insert(0) += 1;
            space.total += 1;
        }
        space
    }

    /// Mapping-form space. Zero weights are dropped, repeated keys are summed.
    pub fn from_weights<I: IntoIterator<Item = (O, u64)>>(pairs: I) -> Result<Self> {
        let mut space = Self::new();
        for (o, w) in pairs {
            space.add(o, w)?;
        }
        Ok(space)
    }

    /// Add `weight` to `outcome`. A zero weight is a no-op.
    pub fn add(&mut self, outcome: O, weight: u64) -> Result<()> {
        if weight == 0 {
            return Ok(());
        }
        let total = self.total.checked_add(weight).ok_or_else(|| {
            Error::Validation(format!("total weight overflows u64 (adding {})", weight))
        })?;
        *self.weights.entry(outcome).or_insert(0) += weight;
        self.total = total;
        Ok(())
    }

    /// Map every outcome through `f`, summing the weights of outcomes that
    /// land on the same value.
    ///
    /// Used to reduce a large combinatorial space to a sufficient statistic
    /// (e.g. sequence → sum) before evaluating conditions over it.
    pub fn collapse<K, F>(&self, f: F) -> SampleSpace<K>
    where
        K: Eq + Hash,
        F: Fn(&O) -> K,
    {
        let mut weights: HashMap<K, u64> = HashMap::new();
        for (o, &w) in &self.weights {
            *weights.entry(f(o)).or_insert(0) += w;
        }
        log::debug!("collapsed sample space: {} outcomes -> {}", self.weights.len(), weights.len());
        SampleSpace { weights, total: self.total }
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when the space holds no outcome (zero total measure).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.total
    }

    /// Weight of `outcome`, 0 when absent.
    pub fn weight(&self, outcome: &O) -> u64 {
        self.weights.get(outcome).copied().unwrap_or(0)
    }

    /// True when `outcome` has positive weight.
    pub fn contains(&self, outcome: &O) -> bool {
        self.weights.contains_key(outcome)
    }

    /// True when every outcome carries weight 1 (set form).
    pub fn is_uniform(&self) -> bool {
        self.weights.values().all(|&w| w == 1)
    }

    /// Outcomes in unspecified order.
    pub fn outcomes(&self) -> hash_map::Keys<'_, O, u64> {
        self.weights.keys()
    }

    /// `(outcome, weight)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_, O> {
        Iter { inner: self.weights.iter() }
    }

    /// `(outcome, weight)` pairs ordered by outcome.
    pub fn sorted(&self) -> Vec<(&O, u64)>
    where
        O: Ord,
    {
        let mut out: Vec<(&O, u64)> = self.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Parallel `(outcome, weight)` pairs.
    pub fn par_iter(&self) -> impl ParallelIterator<Item = (&O, u64)>
    where
        O: Sync,
    {
        self.weights.par_iter().map(|(o, &w)| (o, w))
    }
}

/// Iterator over `(outcome, weight)` pairs, in unspecified order.
pub struct Iter<'a, O> {
    inner: hash_map::Iter<'a, O, u64>,
}

impl<'a, O> Iterator for Iter<'a, O> {
    type Item = (&'a O, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(o, &w)| (o, w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<O> ExactSizeIterator for Iter<'_, O> {}

impl<'a, O: Eq + Hash> IntoIterator for &'a SampleSpace<O> {
    type Item = (&'a O, u64);
    type IntoIter = Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_dedupes() {
        let s = SampleSpace::uniform(["a", "b", "a", "c"]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.total_weight(), 3);
        assert_eq!(s.weight(&"a"), 1);
        assert!(s.is_uniform());
    }

    #[test]
    fn test_from_weights_drops_zero_and_sums_repeats() {
        let s = SampleSpace::from_weights([("h", 4), ("t", 1), ("edge", 0), ("t", 2)]).unwrap();
        assert_eq!(s.len(), 2);
        assert!(!s.contains(&"edge"));
        assert_eq!(s.weight(&"t"), 3);
        assert_eq!(s.total_weight(), 7);
        assert!(!s.is_uniform());
    }

    #[test]
    fn test_from_weights_overflow() {
        let r = SampleSpace::from_weights([(1, u64::MAX), (2, 1)]);
        assert!(matches!(r, Err(Error::Validation(_))));
    }

    #[test]
    fn test_from_multiset_counts_multiplicity() {
        let s = SampleSpace::from_multiset([3, 1, 3, 3, 2]);
        assert_eq!(s.weight(&3), 3);
        assert_eq!(s.weight(&1), 1);
        assert_eq!(s.weight(&9), 0);
        assert_eq!(s.total_weight(), 5);
    }

    #[test]
    fn test_collapse_preserves_total() {
        let s = SampleSpace::uniform((1..=6).flat_map(|a| (1..=6).map(move |b| (a, b))));
        let sums = s.collapse(|&(a, b)| a + b);
        assert_eq!(sums.total_weight(), 36);
        assert_eq!(sums.len(), 11);
        assert_eq!(sums.weight(&7), 6);
        assert_eq!(sums.weight(&2), 1);
    }

    #[test]
    fn test_sorted_view() {
        let s = SampleSpace::from_weights([(2, 5), (0, 1), (1, 3)]).unwrap();
        let v: Vec<(i32, u64)> = s.sorted().into_iter().map(|(o, w)| (*o, w)).collect();
        assert_eq!(v, vec![(0, 1), (1, 3), (2, 5)]);
    }

    #[test]
    fn test_empty() {
        let s: SampleSpace<u8> = SampleSpace::new();
        assert!(s.is_empty());
        assert_eq!(s.total_weight(), 0);
        assert!(SampleSpace::<u8>::from_weights([(1, 0)]).unwrap().is_empty());
    }
}
