//! Monte Carlo simulation of sampling without replacement.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use crate::comb::InvalidCombination;
use crate::dist::Distribution;
use crate::hypergeometric::Lot;

pub const DEFAULT_TRIALS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("{0}")]
    InvalidCombination(#[from] InvalidCombination),

    #[error("at least one trial must be run")]
    NoTrials,
}

/// Runs a single trial: `k` defective slots among `n` are shuffled and the defectives among the
/// first `r` slots are counted. `slots` must hold exactly `n` elements; its contents are
/// overwritten.
pub fn run_once(lot: &Lot, slots: &mut [bool], rand: &mut impl Rand) -> usize {
    debug_assert_eq!(lot.n, slots.len());
    debug_assert!(lot.k <= lot.n, "{lot}");
    debug_assert!(lot.r <= lot.n, "{lot}");

    reset_slots(slots, lot.k);
    shuffle(slots, rand);
    slots[..lot.r].iter().filter(|&&defective| defective).count()
}

/// Fisher–Yates shuffle (Durstenfeld's variant), leaving every permutation equally likely.
pub fn shuffle<T>(slice: &mut [T], rand: &mut impl Rand) {
    for i in (1..slice.len()).rev() {
        let j = rand.next_lim_u64(i as u64 + 1) as usize;
        slice.swap(i, j);
    }
}

fn reset_slots(slots: &mut [bool], defectives: usize) {
    let (defective, good) = slots.split_at_mut(defectives);
    defective.fill(true);
    good.fill(false);
}

/// Repeats [run_once] `trials` times, reusing a single slot buffer.
pub struct MonteCarloEngine {
    lot: Lot,
    trials: u64,
    slots: Vec<bool>,
}
impl MonteCarloEngine {
    pub fn with_lot(mut self, lot: Lot) -> Self {
        self.lot = lot;
        self
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn lot(&self) -> &Lot {
        &self.lot
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Tallies the defectives counted in each trial and normalises the tallies by the number of
    /// trials.
    pub fn simulate(&mut self, rand: &mut impl Rand) -> Result<Distribution, SamplingError> {
        self.lot.validate()?;
        if self.trials == 0 {
            return Err(SamplingError::NoTrials);
        }

        self.slots.resize(self.lot.n, false);
        let mut tallies = FxHashMap::default();
        for _ in 0..self.trials {
            let defectives = run_once(&self.lot, &mut self.slots, rand);
            *tallies.entry(defectives).or_insert(0) += 1;
        }

        let dist = Distribution::from_tallies(&tallies, self.trials);
        debug!(
            "simulated lot {} over {} trials: observed {:?}",
            self.lot,
            self.trials,
            dist.bounds()
        );
        Ok(dist)
    }
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self {
            lot: Lot::default(),
            trials: DEFAULT_TRIALS,
            slots: vec![],
        }
    }
}

/// One-off simulation of `trials` samples from `lot`.
pub fn simulate(lot: Lot, trials: u64, rand: &mut impl Rand) -> Result<Distribution, SamplingError> {
    MonteCarloEngine::default()
        .with_lot(lot)
        .with_trials(trials)
        .simulate(rand)
}
