//! An experiment evaluates the analytic distribution of a lot and, optionally, scores it against a
//! Monte Carlo simulation of the same (or a different) lot.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use crate::comb::InvalidCombination;
use crate::compare::{self, OutOfBoundsObservation};
use crate::hypergeometric::{DistributionError, Lot};
use crate::mc::{self, SamplingError, DEFAULT_TRIALS};

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("{0}")]
    InvalidCombination(#[from] InvalidCombination),

    #[error("{0}")]
    Distribution(#[from] DistributionError),

    #[error("{0}")]
    Sampling(#[from] SamplingError),

    #[error("{0}")]
    OutOfBounds(#[from] OutOfBoundsObservation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    /// Mean squared error, as a percentage.
    #[default]
    Mse,
    /// KL divergence of the empirical from the analytic distribution.
    Kl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Lot to simulate; the experiment's lot when absent.
    pub lot: Option<Lot>,
    #[serde(default = "default_trials")]
    pub trials: u64,
    #[serde(default)]
    pub metric: Metric,
}

fn default_trials() -> u64 {
    DEFAULT_TRIALS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub lot: Lot,
    pub comparison: Option<Comparison>,
}
impl Experiment {
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.lot.validate()?;
        if let Some(comparison) = &self.comparison {
            if let Some(lot) = &comparison.lot {
                lot.validate()?;
            }
            if comparison.trials == 0 {
                return Err(SamplingError::NoTrials.into());
            }
        }
        Ok(())
    }

    /// Either a complete report is produced or the first error encountered is returned.
    pub fn evaluate(&self, rand: &mut impl Rand) -> Result<Report, ExperimentError> {
        self.validate()?;

        let analytic = self.lot.distribution()?;
        let mut report = Report {
            lot: self.lot,
            support: analytic.support().to_vec(),
            analytic: analytic.masses().to_vec(),
            empirical: None,
            score: None,
        };

        if let Some(comparison) = &self.comparison {
            let sampled_lot = comparison.lot.unwrap_or(self.lot);
            let empirical = mc::simulate(sampled_lot, comparison.trials, rand)?;
            let (min, max) = (0, self.lot.max_defectives());
            compare::bounds_check(&empirical, min, max)?;

            let value = match comparison.metric {
                Metric::Mse => compare::mse(&analytic, &empirical),
                Metric::Kl => compare::kl_divergence(&analytic, &empirical),
            };
            debug!(
                "lot {} against simulated lot {sampled_lot} over {} trials: {} {value:.6}",
                self.lot, comparison.trials, comparison.metric
            );
            report.empirical = Some(empirical.aligned(analytic.support()));
            report.score = Some(Score {
                metric: comparison.metric,
                value,
            });
        }
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub metric: Metric,
    pub value: f64,
}

/// Outcome of an [Experiment]. The empirical masses, when present, are aligned to `support`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub lot: Lot,
    pub support: Vec<usize>,
    pub analytic: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empirical: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}
