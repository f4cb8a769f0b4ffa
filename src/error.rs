//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::config::error::ConfigErr;
pub use crate::estimate::error::EffectErr;
pub use crate::normal::error::NormalDistErr;
pub use crate::observations::error::{DataErr, ObservationLoadErr};
pub use crate::planning::error::RangeErr;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterErr),
    #[error("degenerate effect: {0}")]
    DegenerateEffect(EffectErr),
    #[error("insufficient data: {0}")]
    InsufficientData(DataErr),
    #[error("invalid MDE range: {0}")]
    InvalidRange(RangeErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while loading observations: {0}")]
    Observations(ObservationLoadErr),
    #[error("while reading request file: {0}")]
    Config(ConfigErr),
    #[error("while exporting results: {0}")]
    Export(std::io::Error),
}

/// Arguments outside of their valid domain
#[derive(Error, Debug)]
pub enum ParameterErr {
    #[error("significance level should be in (0, 1); got {0}")]
    SignificanceLevel(f64),
    #[error("one-sided significance level should be in (0, 0.5); got {0}")]
    OneSidedSignificanceLevel(f64),
    #[error("power should be in (0, 1); got {0}")]
    Power(f64),
    #[error(
        "power {power} is too low for significance level {significance_level}: \
        z_alpha + z_beta should be > 0; got {z_sum}"
    )]
    PowerBelowSignificance {
        power: f64,
        significance_level: f64,
        z_sum: f64,
    },
    #[error("allocation ratio should be finite and > 0; got {0}")]
    AllocationRatio(f64),
    #[error("mde should be finite; got {0}")]
    Mde(f64),
    #[error("baseline rate should be in (0, 1); got {0}")]
    BaselineRate(f64),
    #[error("treatment rate (baseline rate * (1 + mde)) should be in [0, 1]; got {0}")]
    TreatmentRate(f64),
    #[error("baseline value should be finite; got {0}")]
    BaselineValue(f64),
    #[error("variance should be finite and >= 0; got {0}")]
    Variance(f64),
    #[error("daily traffic should be > 0; got {0}")]
    DailyTraffic(u64),
    #[error("sample ratio should be in (0, 1]; got {0}")]
    SampleRatio(f64),
    #[error("group count (non-control arms) should be >= 1; got {0}")]
    GroupCount(usize),
    #[error("unknown metric type {0:?}; expected \"mean\" or \"proportion\"")]
    MetricType(String),
}

impl Into<AbcomputeErr> for ParameterErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::InvalidParameter(self)
    }
}
