//----------------------------------------
// planning errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeErr {
    #[error("start and end should be finite; got start {start}, end {end}")]
    NonFiniteBounds { start: f64, end: f64 },
    #[error("start should be smaller than end; got start {start}, end {end}")]
    StartNotBelowEnd { start: f64, end: f64 },
    #[error("step should be finite and > 0; got {0}")]
    NonPositiveStep(f64),
    #[error("step {step} is finer than the {min} resolution MDE values are kept at")]
    StepBelowResolution { step: f64, min: f64 },
    #[error("sweep would produce {steps} values; at most {max} are allowed")]
    TooManySteps { steps: f64, max: usize },
}

impl Into<AbcomputeErr> for RangeErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::InvalidRange(self)
    }
}
