//! Combinatorial sample spaces: repeated experiments over a finite alphabet.
//!
//! A sequence of `repeat` draws over `alphabet` has `alphabet.len()^repeat`
//! equally likely outcomes. When only a derived value matters (head count,
//! sum of pips), [`collapsed_power_space`] streams the sequences once and
//! keeps only `value -> count`, which is far smaller than the raw space.

use std::fmt;
use std::hash::Hash;

use odds_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::space::SampleSpace;

/// Raw spaces above this many sequences get a warning before enumeration.
const LARGE_SPACE_WARN: u128 = 50_000_000;

/// Largest raw space the coin and dice builders agree to enumerate (2^28).
pub const MAX_ENUMERATED_SEQUENCES: u128 = 1 << 28;

/// Side of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coin {
    /// Heads side.
    Heads,
    /// Tails side.
    Tails,
}

impl Coin {
    /// Both sides, heads first.
    pub const SIDES: [Coin; 2] = [Coin::Heads, Coin::Tails];
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coin::Heads => f.write_str("Heads"),
            Coin::Tails => f.write_str("Tails"),
        }
    }
}

/// Sex of a child in the family-composition examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Child {
    /// A boy.
    Boy,
    /// A girl.
    Girl,
}

/// Every length-`repeat` sequence over `alphabet`, in lexicographic index order.
///
/// `repeat == 0` yields one empty sequence; an empty alphabet with
/// `repeat > 0` yields nothing.
pub fn cartesian_power<T: Clone>(alphabet: &[T], repeat: usize) -> CartesianPower<'_, T> {
    let done = alphabet.is_empty() && repeat > 0;
    CartesianPower { alphabet, indices: vec![0; repeat], done }
}

/// Iterator returned by [`cartesian_power`].
#[derive(Debug, Clone)]
pub struct CartesianPower<'a, T> {
    alphabet: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<T: Clone> Iterator for CartesianPower<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.indices.iter().map(|&i| self.alphabet[i].clone()).collect();

        // Odometer increment, rightmost position fastest.
        self.done = true;
        for idx in self.indices.iter_mut().rev() {
            *idx += 1;
            if *idx < self.alphabet.len() {
                self.done = false;
                break;
            }
            *idx = 0;
        }
        Some(item)
    }
}

fn raw_size(alphabet_len: usize, repeat: usize) -> u128 {
    (alphabet_len as u128).checked_pow(repeat as u32).unwrap_or(u128::MAX)
}

fn warn_if_large(alphabet_len: usize, repeat: usize) {
    let n = raw_size(alphabet_len, repeat);
    if n > LARGE_SPACE_WARN {
        log::warn!("enumerating {} sequences ({}^{}); this may take a while", n, alphabet_len, repeat);
    }
}

/// Uniform space of all length-`repeat` sequences over `alphabet`.
pub fn power_space<T>(alphabet: &[T], repeat: usize) -> SampleSpace<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    warn_if_large(alphabet.len(), repeat);
    let space = SampleSpace::uniform(cartesian_power(alphabet, repeat));
    log::debug!("built power space: {} outcomes", space.len());
    space
}

/// Weighted space of `f(sequence)` over all length-`repeat` sequences,
/// built in one pass without materializing the raw space.
pub fn collapsed_power_space<T, K, F>(alphabet: &[T], repeat: usize, f: F) -> SampleSpace<K>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&[T]) -> K,
{
    warn_if_large(alphabet.len(), repeat);
    let space = SampleSpace::from_multiset(cartesian_power(alphabet, repeat).map(|seq| f(&seq)));
    log::debug!(
        "collapsed power space: {} sequences -> {} values",
        space.total_weight(),
        space.len()
    );
    space
}

/// Fails with [`Error::Validation`] when `alphabet_len^repeat` exceeds
/// [`MAX_ENUMERATED_SEQUENCES`].
pub fn check_enumeration_size(alphabet_len: usize, repeat: usize) -> Result<u128> {
    let n = raw_size(alphabet_len, repeat);
    if n > MAX_ENUMERATED_SEQUENCES {
        return Err(Error::Validation(format!(
            "{}^{} sequences is too many to enumerate (limit {})",
            alphabet_len, repeat, MAX_ENUMERATED_SEQUENCES
        )));
    }
    Ok(n)
}

/// Head count → number of `num_flips`-long flip sequences with that many heads.
pub fn coin_head_count_space(num_flips: u32) -> Result<SampleSpace<u32>> {
    check_enumeration_size(Coin::SIDES.len(), num_flips as usize)?;
    Ok(collapsed_power_space(&Coin::SIDES, num_flips as usize, |flips| {
        flips.iter().filter(|c| **c == Coin::Heads).count() as u32
    }))
}

/// Sum of pips → number of ways `num_dice` dice with `faces` faces produce it.
pub fn dice_sum_space(num_dice: u32, faces: u32) -> Result<SampleSpace<u32>> {
    if faces == 0 {
        return Err(Error::Validation("a die needs at least one face".into()));
    }
    check_enumeration_size(faces as usize, num_dice as usize)?;
    let alphabet: Vec<u32> = (1..=faces).collect();
    Ok(collapsed_power_space(&alphabet, num_dice as usize, |roll| roll.iter().sum()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_power_order_and_size() {
        let seqs: Vec<Vec<char>> = cartesian_power(&['a', 'b'], 2).collect();
        assert_eq!(
            seqs,
            vec![vec!['a', 'a'], vec!['a', 'b'], vec!['b', 'a'], vec!['b', 'b']]
        );
        assert_eq!(cartesian_power(&[1, 2, 3], 4).count(), 81);
    }

    #[test]
    fn test_cartesian_power_edges() {
        let empty: Vec<Vec<u8>> = cartesian_power(&[1u8, 2], 0).collect();
        assert_eq!(empty, vec![Vec::<u8>::new()]);
        assert_eq!(cartesian_power::<u8>(&[], 3).count(), 0);
        assert_eq!(cartesian_power::<u8>(&[], 0).count(), 1);
    }

    #[test]
    fn test_coin_head_count_space_is_binomial_row() {
        let s = coin_head_count_space(10).unwrap();
        assert_eq!(s.total_weight(), 1024);
        let row: Vec<u64> = (0..=10).map(|k| s.weight(&k)).collect();
        assert_eq!(row, vec![1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]);
    }

    #[test]
    fn test_dice_sum_space() {
        let s = dice_sum_space(2, 6).unwrap();
        assert_eq!(s.len(), 11);
        assert_eq!(s.weight(&7), 6);
        assert_eq!(s.weight(&12), 1);
        assert!(dice_sum_space(3, 0).is_err());
    }

    #[test]
    fn test_oversized_enumeration_rejected() {
        assert!(matches!(coin_head_count_space(40), Err(Error::Validation(_))));
        assert!(matches!(dice_sum_space(12, 6), Err(Error::Validation(_))));
        assert_eq!(check_enumeration_size(2, 28).unwrap(), MAX_ENUMERATED_SEQUENCES);
        assert!(check_enumeration_size(2, 29).is_err());
        assert!(check_enumeration_size(10, 1000).is_err());
    }

    #[test]
    fn test_collapsed_matches_raw_then_collapse() {
        let raw = power_space(&[1u32, 2, 3, 4], 3);
        let via_raw = raw.collapse(|seq| seq.iter().product::<u32>());
        let streamed = collapsed_power_space(&[1u32, 2, 3, 4], 3, |seq| seq.iter().product::<u32>());
        assert_eq!(via_raw, streamed);
    }
}
