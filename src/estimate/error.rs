//----------------------------------------
// estimate errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectErr {
    #[error("absolute effect is zero (baseline {baseline}, mde {mde})")]
    ZeroEffect { baseline: f64, mde: f64 },
    #[error("required sample size does not fit in 64 bits (baseline {baseline}, mde {mde})")]
    Unbounded { baseline: f64, mde: f64 },
    #[error("group sizes for {metric} overflow 64-bit counts at mde {mde}")]
    GroupSizeOverflow { metric: String, mde: f64 },
}

impl Into<AbcomputeErr> for EffectErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::DegenerateEffect(self)
    }
}
