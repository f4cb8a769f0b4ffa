//----------------------------------------
// request file errors
//----------------------------------------
use std::path::PathBuf;

use crate::error::AbcomputeErr;
use crate::planning::types::MetricType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed request file: {0}")]
    Parse(toml::de::Error),
    #[error("metric #{0} needs either `name` or both `numerator` and `denominator`")]
    MissingName(usize),
    #[error("{metric_type} metric {metric} is missing `{field}`")]
    MissingField {
        metric: String,
        metric_type: MetricType,
        field: &'static str,
    },
    #[error("`sample_ratio` is set but `daily_traffic` is not")]
    SampleRatioWithoutTraffic,
}

impl Into<AbcomputeErr> for ConfigErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::Config(self)
    }
}
