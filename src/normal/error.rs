//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("could not construct standard normal: {0}")]
    Construction(String),
}

impl Into<AbcomputeErr> for NormalDistErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::NormalDist(self)
    }
}
