//! Discrete distributions over the number of defectives observed in a sample.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::probs::SliceExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Analytic,
    Empirical,
}

/// An ordered support with a parallel sequence of masses. The support→mass map serves random
/// access; support values that were never assigned a mass read as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    kind: Kind,
    support: Vec<usize>,
    masses: Vec<f64>,
    lookup: FxHashMap<usize, f64>,
}
impl Distribution {
    /// Builds a distribution from parallel support and mass sequences. The support must be strictly
    /// ascending.
    pub fn new(kind: Kind, support: Vec<usize>, masses: Vec<f64>) -> Self {
        debug_assert_eq!(
            support.len(),
            masses.len(),
            "{} support values for {} masses",
            support.len(),
            masses.len()
        );
        debug_assert!(
            support.windows(2).all(|pair| pair[0] < pair[1]),
            "support must be strictly ascending: {support:?}"
        );
        let mut lookup = FxHashMap::with_capacity_and_hasher(support.len(), Default::default());
        for (&value, &mass) in support.iter().zip(masses.iter()) {
            lookup.insert(value, mass);
        }
        Self {
            kind,
            support,
            masses,
            lookup,
        }
    }

    /// Normalises raw tallies by `trials`, ordering the support in ascending order.
    pub fn from_tallies(tallies: &FxHashMap<usize, u64>, trials: u64) -> Self {
        let mut support: Vec<_> = tallies.keys().copied().collect();
        support.sort_unstable();
        let masses = support
            .iter()
            .map(|value| tallies[value] as f64 / trials as f64)
            .collect();
        Self::new(Kind::Empirical, support, masses)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn support(&self) -> &[usize] {
        &self.support
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    /// Mass at the given support value, or zero if the value is not in the support.
    pub fn mass(&self, value: usize) -> f64 {
        self.lookup.get(&value).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.masses.sum()
    }

    pub fn bounds(&self) -> Option<RangeInclusive<usize>> {
        match (self.support.first(), self.support.last()) {
            (Some(&min), Some(&max)) => Some(min..=max),
            _ => None,
        }
    }

    /// Masses of this distribution read at each value of `support`, in order.
    pub fn aligned(&self, support: &[usize]) -> Vec<f64> {
        support.iter().map(|&value| self.mass(value)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.support.iter().copied().zip(self.masses.iter().copied())
    }
}
