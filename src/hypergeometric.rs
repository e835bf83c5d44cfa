//! The hypergeometric distribution of defectives observed when drawing a sample of `r` items,
//! without replacement, from a lot of `n` items of which `k` are defective.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::comb::{Binomial, InvalidCombination};
use crate::dist::{Distribution, Kind};

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("{0}")]
    InvalidCombination(#[from] InvalidCombination),

    #[error("probability {probability} of {m} defectives exceeds 1")]
    ArithmeticInconsistency { m: usize, probability: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    /// Lot size.
    pub n: usize,
    /// Defectives in the lot.
    pub k: usize,
    /// Sample size.
    pub r: usize,
}
impl Lot {
    pub fn validate(&self) -> Result<(), InvalidCombination> {
        Binomial {
            n: self.n as u64,
            r: self.k as u64,
        }
        .validate()?;
        Binomial {
            n: self.n as u64,
            r: self.r as u64,
        }
        .validate()
    }

    /// Fewest defectives any sample can contain: a sample larger than the number of good items
    /// must include at least `r − (n − k)` defectives.
    pub fn min_defectives(&self) -> usize {
        (self.r + self.k).saturating_sub(self.n)
    }

    pub fn max_defectives(&self) -> usize {
        usize::min(self.k, self.r)
    }

    /// `P(M = m) = C(n−k, r−m)·C(k, m) / C(n, r)`, evaluated from a single paired ratio.
    pub fn probability(&self, m: usize) -> Result<f64, DistributionError> {
        let good_in_lot = checked_sub(self.n, self.k)?;
        let good_in_sample = checked_sub(self.r, m)?;
        let choose_good = Binomial {
            n: good_in_lot as u64,
            r: good_in_sample as u64,
        }
        .expand()?;
        let choose_defective = Binomial {
            n: self.k as u64,
            r: m as u64,
        }
        .expand()?;
        let choose_sample = Binomial {
            n: self.n as u64,
            r: self.r as u64,
        }
        .expand()?;

        let probability = choose_good
            .multiply(&choose_defective)
            .divide(&choose_sample)
            .evaluate();
        check_probability(m, probability)
    }

    /// The analytic distribution over `0..=min(k, r)`. Support values below
    /// [min_defectives](Self::min_defectives) are impossible and carry zero mass.
    pub fn distribution(&self) -> Result<Distribution, DistributionError> {
        self.validate()?;
        let (min, max) = (self.min_defectives(), self.max_defectives());
        let support: Vec<_> = (0..=max).collect();
        let mut masses = Vec::with_capacity(support.len());
        for &m in &support {
            let probability = if m < min { 0.0 } else { self.probability(m)? };
            masses.push(probability);
        }
        let dist = Distribution::new(Kind::Analytic, support, masses);
        debug!(
            "lot {}: feasible defectives {min}..={max}, total mass {:.12}",
            self,
            dist.total()
        );
        Ok(dist)
    }
}

impl Display for Lot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n={}, k={}, r={}", self.n, self.k, self.r)
    }
}

#[inline]
fn checked_sub(from: usize, take: usize) -> Result<usize, InvalidCombination> {
    from.checked_sub(take).ok_or(InvalidCombination {
        n: from as u64,
        r: take as u64,
    })
}

fn check_probability(m: usize, probability: f64) -> Result<f64, DistributionError> {
    if probability > 1.0 {
        Err(DistributionError::ArithmeticInconsistency { m, probability })
    } else {
        Ok(probability)
    }
}

#[cfg(test)]
mod tests;
