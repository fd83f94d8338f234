//! Inclusive interval conditions over numeric outcomes.

use std::cmp::Ordering;
use std::fmt::Debug;

use odds_core::{Condition, Error, Result};
use serde::Serialize;

use crate::event::Not;

/// `lo <= value <= hi`
#[inline]
pub fn is_in_interval<T: PartialOrd>(value: &T, lo: &T, hi: &T) -> bool {
    lo <= value && value <= hi
}

/// Closed interval `[lo, hi]`, usable as a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

/// Build a reusable condition testing `lo <= value <= hi` (inclusive).
///
/// Fails with [`Error::InvalidInterval`] when `lo > hi` or the bounds do not
/// compare (NaN).
pub fn interval_predicate<T: PartialOrd + Debug>(lo: T, hi: T) -> Result<Interval<T>> {
    match lo.partial_cmp(&hi) {
        Some(Ordering::Less | Ordering::Equal) => Ok(Interval { lo, hi }),
        _ => Err(Error::InvalidInterval(format!("lo={:?} must be <= hi={:?}", lo, hi))),
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Lower bound (inclusive).
    pub fn lo(&self) -> &T {
        &self.lo
    }

    /// Upper bound (inclusive).
    pub fn hi(&self) -> &T {
        &self.hi
    }

    /// `lo <= value <= hi`
    pub fn contains(&self, value: &T) -> bool {
        is_in_interval(value, &self.lo, &self.hi)
    }

    /// Outcomes outside `[lo, hi]`.
    pub fn complement(self) -> Not<Self> {
        Not(self)
    }
}

/// Bound arithmetic that clamps at the numeric range instead of overflowing.
pub trait SaturatingStep: Copy {
    /// `self - by`, clamped.
    fn step_down(self, by: Self) -> Self;
    /// `self + by`, clamped.
    fn step_up(self, by: Self) -> Self;
}

macro_rules! impl_saturating_step {
    ($($t:ty),*) => {
        $(
            impl SaturatingStep for $t {
                #[inline]
                fn step_down(self, by: Self) -> Self {
                    self.saturating_sub(by)
                }
                #[inline]
                fn step_up(self, by: Self) -> Self {
                    self.saturating_add(by)
                }
            }
        )*
    };
}

impl_saturating_step!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl SaturatingStep for f64 {
    fn step_down(self, by: Self) -> Self {
        self - by
    }
    fn step_up(self, by: Self) -> Self {
        self + by
    }
}

impl<T> Interval<T>
where
    T: PartialOrd + Debug + SaturatingStep,
{
    /// `[lo - by, hi + by]`, clamped to the range of `T`.
    ///
    /// A negative `by` narrows the interval; narrowing past empty fails with
    /// [`Error::InvalidInterval`].
    pub fn widen(&self, by: T) -> Result<Self> {
        interval_predicate(self.lo.step_down(by), self.hi.step_up(by))
    }
}

impl<T: PartialOrd> Condition<T> for Interval<T> {
    #[inline]
    fn holds(&self, outcome: &T) -> bool {
        self.contains(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_both_ends() {
        let i = interval_predicate(3, 7).unwrap();
        assert!(i.holds(&3));
        assert!(i.holds(&7));
        assert!(!i.holds(&2));
        assert!(!i.holds(&8));
        assert!(is_in_interval(&5.5, &5.5, &5.5));
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        assert!(matches!(interval_predicate(5, 4), Err(Error::InvalidInterval(_))));
        assert!(matches!(interval_predicate(f64::NAN, 1.0), Err(Error::InvalidInterval(_))));
        assert!(interval_predicate(4, 4).is_ok());
    }

    #[test]
    fn test_widen_and_complement() {
        let i = interval_predicate(3i64, 7).unwrap().widen(1).unwrap();
        assert_eq!((*i.lo(), *i.hi()), (2, 8));
        let outside = i.complement();
        assert!(outside.holds(&1));
        assert!(!outside.holds(&2));
    }

    #[test]
    fn test_widen_saturates_at_type_bounds() {
        let i = interval_predicate(0u32, 3).unwrap().widen(1).unwrap();
        assert_eq!((*i.lo(), *i.hi()), (0, 4));
        let top = interval_predicate(250u8, 255).unwrap().widen(10).unwrap();
        assert_eq!((*top.lo(), *top.hi()), (240, 255));
        let f = interval_predicate(0.5, 1.5).unwrap().widen(0.25).unwrap();
        assert_eq!((*f.lo(), *f.hi()), (0.25, 1.75));
    }

    #[test]
    fn test_negative_widen_cannot_reverse_bounds() {
        assert!(matches!(interval_predicate(3i64, 7).unwrap().widen(-5), Err(Error::InvalidInterval(_))));
        let narrowed = interval_predicate(3i64, 7).unwrap().widen(-2).unwrap();
        assert_eq!((*narrowed.lo(), *narrowed.hi()), (5, 5));
    }
}
