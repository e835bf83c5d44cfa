//! Error and divergence metrics between an analytic distribution and an empirical one.

use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use crate::dist::Distribution;
use crate::hypergeometric::Lot;
use crate::mc::{self, SamplingError};
use crate::probs::SliceExt;

/// Multiplier applied to the mean squared error so that it reads as a percentage.
pub const MSE_SCALE: f64 = 100.0;

/// Stand-in for a zero empirical mass in the KL divergence.
pub const KL_FLOOR: f64 = 1e-8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observed {observed} defectives outside of the feasible range {min}..={max}")]
pub struct OutOfBoundsObservation {
    pub observed: usize,
    pub min: usize,
    pub max: usize,
}

/// Mean over the analytic support of the squared difference between empirical and analytic
/// masses, scaled by [MSE_SCALE].
pub fn mse(analytic: &Distribution, empirical: &Distribution) -> f64 {
    let squared_errors: Vec<_> = analytic
        .iter()
        .map(|(value, mass)| (empirical.mass(value) - mass).powi(2))
        .collect();
    squared_errors.mean() * MSE_SCALE
}

/// As [mse], but against a freshly simulated empirical distribution of `trials` samples from
/// `lot`. Successive calls differ unless `rand` is reseeded.
pub fn mse_resampled(
    lot: Lot,
    analytic: &Distribution,
    trials: u64,
    rand: &mut impl Rand,
) -> Result<f64, SamplingError> {
    let empirical = mc::simulate(lot, trials, rand)?;
    let error = mse(analytic, &empirical);
    debug!("lot {lot}: resampled MSE over {trials} trials: {error:.6}");
    Ok(error)
}

/// KL divergence `D(P ‖ Q) = Σ P(m)·ln(P(m)/Q(m))`, taken over every value from the smallest to the
/// largest support value of either distribution, both ends inclusive. Terms where `P(m) = 0`
/// contribute nothing; a zero `Q(m)` is replaced by [KL_FLOOR].
pub fn kl_divergence(p: &Distribution, q: &Distribution) -> f64 {
    let values = p.support().iter().chain(q.support().iter());
    let (min, max) = match (values.clone().min(), values.max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return 0.0,
    };

    let mut sum = 0.0;
    for value in min..=max {
        let p_mass = p.mass(value);
        if p_mass == 0.0 {
            continue;
        }
        let q_mass = q.mass(value);
        let q_mass = if q_mass == 0.0 { KL_FLOOR } else { q_mass };
        sum += p_mass * f64::ln(p_mass / q_mass);
    }
    sum
}

/// Verifies that every value observed in `empirical` lies in `min..=max`.
pub fn bounds_check(
    empirical: &Distribution,
    min: usize,
    max: usize,
) -> Result<(), OutOfBoundsObservation> {
    match empirical
        .support()
        .iter()
        .find(|&&observed| observed < min || observed > max)
    {
        None => Ok(()),
        Some(&observed) => Err(OutOfBoundsObservation { observed, min, max }),
    }
}
