use serde::Deserialize;

use crate::error::AbcomputeErr;
use crate::planning::error::RangeErr;

/// Upper limit on the number of MDE values in one sweep
pub const MAX_MDE_STEPS: usize = 100_000;

/// Decimal places MDE values are rounded to
pub const MDE_DECIMALS: i32 = 6;

/// Smallest step that survives rounding to [`MDE_DECIMALS`] places
pub const MIN_MDE_STEP: f64 = 1e-6;

// Slack (in units of `step`) so that an `end` reached up to float error is
// still part of the sweep
const BOUNDARY_TOL: f64 = 1e-9;

/// MDE sweep `start, start + step, ..., end`, inclusive of `end` when `end`
/// lies on the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MdeRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl MdeRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        MdeRange { start, end, step }
    }

    /// Checks bounds and step, returning the number of values in the sweep
    pub fn validate(&self) -> Result<usize, AbcomputeErr> {
        let MdeRange { start, end, step } = *self;
        if !(start.is_finite() && end.is_finite()) {
            return Err(RangeErr::NonFiniteBounds { start, end }.into());
        }
        if start >= end {
            return Err(RangeErr::StartNotBelowEnd { start, end }.into());
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(RangeErr::NonPositiveStep(step).into());
        }
        if step < MIN_MDE_STEP {
            return Err(RangeErr::StepBelowResolution {
                step,
                min: MIN_MDE_STEP,
            }
            .into());
        }
        let steps = ((end - start) / step + BOUNDARY_TOL).floor() + 1.;
        if steps > MAX_MDE_STEPS as f64 {
            return Err(RangeErr::TooManySteps {
                steps,
                max: MAX_MDE_STEPS,
            }
            .into());
        }
        Ok(steps as usize)
    }

    /// MDE values in ascending order. Each value is computed from its index
    /// (no accumulated float error) and rounded to [`MDE_DECIMALS`] places.
    pub fn values(&self) -> Result<Vec<f64>, AbcomputeErr> {
        let n_values = self.validate()?;
        let values: Vec<f64> = (0..n_values)
            .map(|i| round_mde(self.start + i as f64 * self.step))
            .collect();
        // Rounding must not merge neighbouring values
        if values.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RangeErr::StepBelowResolution {
                step: self.step,
                min: MIN_MDE_STEP,
            }
            .into());
        }
        Ok(values)
    }
}

fn round_mde(mde: f64) -> f64 {
    let scale = 10f64.powi(MDE_DECIMALS);
    (mde * scale).round() / scale
}
