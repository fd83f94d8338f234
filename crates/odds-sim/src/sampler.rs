//! Seeded sampler over sample spaces.

use std::hash::Hash;

use odds_core::{Condition, Error, Result};
use odds_prob::SampleSpace;
use rand::SeedableRng;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand_distr::{Bernoulli, Binomial, Distribution};

/// A sample space prepared for repeated weighted draws.
///
/// Outcomes are stored in ascending order so a given seed selects the same
/// outcomes on every run.
#[derive(Debug, Clone)]
pub struct WeightedUrn<O> {
    outcomes: Vec<O>,
    index: WeightedIndex<u64>,
}

impl<O: Ord + Hash + Clone> WeightedUrn<O> {
    /// Fails with `EmptySpace` when the space has no outcome.
    pub fn new(space: &SampleSpace<O>) -> Result<Self> {
        if space.is_empty() {
            return Err(Error::EmptySpace);
        }
        let sorted = space.sorted();
        let index = WeightedIndex::new(sorted.iter().map(|(_, w)| *w))
            .map_err(|e| Error::Validation(format!("cannot build weighted index: {}", e)))?;
        let outcomes = sorted.into_iter().map(|(o, _)| o.clone()).collect();
        Ok(Self { outcomes, index })
    }

    /// Draw one outcome.
    pub fn sample(&self, rng: &mut StdRng) -> &O {
        &self.outcomes[self.index.sample(rng)]
    }
}

/// Random-draw generator, optionally seeded for determinism.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    /// Deterministic sampler: same seed, same draws.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), seed: Some(seed) }
    }

    /// Sampler seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self { rng: StdRng::from_os_rng(), seed: None }
    }

    /// The seed, `None` when seeded from the OS.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// One outcome, uniformly at random, from a slice.
    pub fn choose<O: Clone>(&mut self, outcomes: &[O]) -> Result<O> {
        outcomes.choose(&mut self.rng).cloned().ok_or(Error::EmptySpace)
    }

    /// One outcome drawn with probability proportional to its weight.
    pub fn draw<O: Ord + Hash + Clone>(&mut self, space: &SampleSpace<O>) -> Result<O> {
        let urn = WeightedUrn::new(space)?;
        Ok(urn.sample(&mut self.rng).clone())
    }

    /// `n` independent weighted draws.
    pub fn draw_many<O: Ord + Hash + Clone>(&mut self, space: &SampleSpace<O>, n: usize) -> Result<Vec<O>> {
        let urn = WeightedUrn::new(space)?;
        Ok((0..n).map(|_| urn.sample(&mut self.rng).clone()).collect())
    }

    /// Number of successes in `n` trials with success probability `p`.
    pub fn binomial(&mut self, n: u64, p: f64) -> Result<u64> {
        let dist = Binomial::new(n, p)
            .map_err(|e| Error::Validation(format!("invalid binomial(n={}, p={}): {}", n, p, e)))?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Running frequency of `condition` over `trials` weighted draws.
    pub fn running_frequency<O, C>(
        &mut self,
        space: &SampleSpace<O>,
        condition: &C,
        trials: usize,
    ) -> Result<crate::FrequencyTrace>
    where
        O: Ord + Hash + Clone,
        C: Condition<O> + ?Sized,
    {
        let urn = WeightedUrn::new(space)?;
        let mut trace = crate::FrequencyTrace::with_capacity(trials);
        for _ in 0..trials {
            trace.record(condition.holds(urn.sample(&mut self.rng)));
        }
        Ok(trace)
    }

    /// Running frequency of heads over `trials` flips of a coin with `P(heads) = p`.
    pub fn flip_frequency(&mut self, trials: usize, p: f64) -> Result<crate::FrequencyTrace> {
        let coin = Bernoulli::new(p)
            .map_err(|e| Error::Validation(format!("invalid coin bias p={}: {}", p, e)))?;
        let mut trace = crate::FrequencyTrace::with_capacity(trials);
        for _ in 0..trials {
            trace.record(coin.sample(&mut self.rng));
        }
        Ok(trace)
    }

    /// Monte Carlo estimate of `P(condition)` over `space`.
    pub fn estimate_probability<O, C>(
        &mut self,
        space: &SampleSpace<O>,
        condition: &C,
        trials: usize,
    ) -> Result<f64>
    where
        O: Ord + Hash + Clone,
        C: Condition<O> + ?Sized,
    {
        if trials == 0 {
            return Err(Error::Validation("trials must be > 0".into()));
        }
        let trace = self.running_frequency(space, condition, trials)?;
        trace.final_frequency().ok_or_else(|| Error::Validation("no trials recorded".into()))
    }

    /// Repeat "flip a coin `flips` times" `experiments` times and histogram
    /// the observed head counts.
    pub fn head_count_histogram(&mut self, flips: u32, p: f64, experiments: usize) -> Result<SampleSpace<u32>> {
        let dist = Binomial::new(u64::from(flips), p)
            .map_err(|e| Error::Validation(format!("invalid binomial(n={}, p={}): {}", flips, p, e)))?;
        if experiments == 0 {
            log::warn!("head_count_histogram called with zero experiments; result is empty");
        }
        let space = SampleSpace::from_multiset((0..experiments).map(|_| dist.sample(&mut self.rng) as u32));
        log::debug!("simulated {} experiments of {} flips: {} distinct counts", experiments, flips, space.len());
        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use odds_prob::combinatorics::{Coin, coin_head_count_space};
    use odds_prob::event::event_probability;
    use odds_prob::interval::interval_predicate;

    #[test]
    fn test_same_seed_same_draws() {
        let space = SampleSpace::from_weights([(Coin::Heads, 4), (Coin::Tails, 1)]).unwrap();
        let a = Sampler::seeded(7).draw_many(&space, 200).unwrap();
        let b = Sampler::seeded(7).draw_many(&space, 200).unwrap();
        assert_eq!(a, b);
        assert_eq!(Sampler::seeded(7).seed(), Some(7));
        assert_eq!(Sampler::from_os_rng().seed(), None);
    }

    #[test]
    fn test_empty_inputs() {
        let mut s = Sampler::seeded(1);
        let empty: SampleSpace<u8> = SampleSpace::new();
        assert!(matches!(s.draw(&empty), Err(Error::EmptySpace)));
        assert!(matches!(s.choose::<u8>(&[]), Err(Error::EmptySpace)));
        assert!(s.estimate_probability(&SampleSpace::uniform([1u8]), &|_: &u8| true, 0).is_err());
    }

    #[test]
    fn test_choose_stays_in_slice() {
        let mut s = Sampler::seeded(3);
        for _ in 0..100 {
            let x = s.choose(&[1, 2, 3, 4, 5, 6]).unwrap();
            assert!((1..=6).contains(&x));
        }
    }

    #[test]
    fn test_estimate_converges_to_exact() {
        let space = coin_head_count_space(10).unwrap();
        let high = interval_predicate(8u32, 10).unwrap();
        let exact = event_probability(&high, &space).unwrap();
        let estimate = Sampler::seeded(42).estimate_probability(&space, &high, 50_000).unwrap();
        assert!((estimate - exact).abs() < 0.01, "estimate={} exact={}", estimate, exact);
    }

    #[test]
    fn test_flip_frequency_trace() {
        let trace = Sampler::seeded(11).flip_frequency(1000, 0.5).unwrap();
        assert_eq!(trace.len(), 1000);
        let last = trace.final_frequency().unwrap();
        assert_relative_eq!(last, trace.hits[999] as f64 / 1000.0);
        assert!((last - 0.5).abs() < 0.1);
        assert!(Sampler::seeded(11).flip_frequency(10, 1.5).is_err());
    }

    #[test]
    fn test_binomial_bounds() {
        let mut s = Sampler::seeded(5);
        for _ in 0..100 {
            assert!(s.binomial(10, 0.5).unwrap() <= 10);
        }
        assert_eq!(s.binomial(10, 1.0).unwrap(), 10);
        assert!(s.binomial(10, -0.5).is_err());
    }

    #[test]
    fn test_head_count_histogram() {
        let h = Sampler::seeded(9).head_count_histogram(10, 0.5, 5000).unwrap();
        assert_eq!(h.total_weight(), 5000);
        assert!(h.outcomes().all(|k| *k <= 10));
        let middle = interval_predicate(3u32, 7).unwrap();
        let p = event_probability(&middle, &h).unwrap();
        assert!((p - (1.0 - 0.109375)).abs() < 0.03);
    }
}
