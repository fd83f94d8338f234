//! Core traits for odds
//!
//! [`Condition`] is the single seam between sample spaces and the
//! predicates evaluated over them. Any `Fn(&O) -> bool` closure is a
//! condition, so call sites rarely need to name the trait.

/// A pure predicate over outcomes.
///
/// Implementations must be side-effect free and total over `O`: the
/// evaluator calls `holds` once per outcome per query, in no particular
/// order, possibly from several threads.
pub trait Condition<O: ?Sized> {
    /// Whether `outcome` belongs to the event.
    fn holds(&self, outcome: &O) -> bool;
}

impl<O: ?Sized, F> Condition<O> for F
where
    F: Fn(&O) -> bool,
{
    #[inline]
    fn holds(&self, outcome: &O) -> bool {
        self(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsEven;

    impl Condition<u32> for IsEven {
        fn holds(&self, outcome: &u32) -> bool {
            outcome % 2 == 0
        }
    }

    fn count<C: Condition<u32>>(c: &C, xs: &[u32]) -> usize {
        xs.iter().filter(|x| c.holds(x)).count()
    }

    #[test]
    fn test_closure_and_struct_conditions() {
        let xs = [1, 2, 3, 4, 5, 6];
        assert_eq!(count(&IsEven, &xs), 3);
        assert_eq!(count(&|x: &u32| *x > 4, &xs), 2);
    }
}
