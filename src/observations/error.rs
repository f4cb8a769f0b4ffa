//----------------------------------------
// observation errors
//----------------------------------------
use std::path::PathBuf;

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataErr {
    #[error("variance needs at least {required} finite observations; got {got}")]
    TooFewObservations { required: usize, got: usize },
}

impl Into<AbcomputeErr> for DataErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::InsufficientData(self)
    }
}

#[derive(Error, Debug)]
pub enum ObservationLoadErr {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no numeric values in the first column of {}", .0.display())]
    NoNumericValues(PathBuf),
}

impl Into<AbcomputeErr> for ObservationLoadErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::Observations(self)
    }
}
