//! Combinatorics.

use crate::ratio::Ratio;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot choose {r} from {n}")]
pub struct InvalidCombination {
    pub n: u64,
    pub r: u64,
}

/// Binomial coefficient: the number of combinations obtained when sampling `r` items from a
/// set of `n` without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binomial {
    pub n: u64,
    pub r: u64,
}
impl Binomial {
    pub fn validate(&self) -> Result<(), InvalidCombination> {
        if self.r > self.n {
            return Err(InvalidCombination {
                n: self.n,
                r: self.r,
            });
        }
        Ok(())
    }

    /// Expands `n choose r` into `n·(n−1)·…·(n−r+1) / r·(r−1)·…·1`, both sides carrying exactly
    /// `r` factors.
    pub fn expand(&self) -> Result<Ratio, InvalidCombination> {
        self.validate()?;
        let numerator = FallingFactorial::new(self.n, self.r).collect::<Vec<_>>();
        let denominator = FallingFactorial::new(self.r, self.r).collect::<Vec<_>>();
        Ok(Ratio::new(numerator, denominator))
    }
}

impl Display for Binomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}C{}", self.n, self.r)
    }
}

/// Yields `from, from − 1, …` for `terms` terms.
pub struct FallingFactorial {
    next: u64,
    remaining: u64,
}
impl FallingFactorial {
    pub fn new(from: u64, terms: u64) -> Self {
        debug_assert!(terms <= from, "{terms} terms would fall below 1 from {from}");
        Self {
            next: from,
            remaining: terms,
        }
    }
}

impl Iterator for FallingFactorial {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining != 0 {
            let current = self.next;
            self.next -= 1;
            self.remaining -= 1;
            Some(current)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FallingFactorial {}
