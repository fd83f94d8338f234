//! Binomial distribution utilities.
//!
//! Closed-form counterpart of [`crate::combinatorics::coin_head_count_space`]:
//! for a fair coin the enumerated head-count weights divided by `2^n` equal
//! `pmf(k, n, 0.5)`.

use odds_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

use crate::interval::interval_predicate;

fn ln_choose(n: u64, k: u64) -> f64 {
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}

fn check_p(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    Ok(())
}

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    check_p(p)?;
    if k > n {
        return Err(Error::Validation(format!("k must be <= n, got k={} n={}", k, n)));
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln())
}

/// PMF of `Binom(n, p)` at `k`.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, n, p)?.exp())
}

/// `P(lo <= K <= hi)` for `K ~ Binom(n, p)`.
///
/// The interval is clipped to `[0, n]`; `lo > hi` fails with
/// [`Error::InvalidInterval`].
pub fn interval_mass(lo: u64, hi: u64, n: u64, p: f64) -> Result<f64> {
    check_p(p)?;
    let interval = interval_predicate(lo, hi)?;
    if *interval.lo() > n {
        return Ok(0.0);
    }
    let hi = (*interval.hi()).min(n);
    let mut acc = 0.0;
    for k in *interval.lo()..=hi {
        acc += pmf(k, n, p)?;
    }
    Ok(acc.min(1.0))
}
