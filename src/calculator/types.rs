//----------------------------------------
// calculator mod types
//----------------------------------------
use crate::error::{AbcomputeErr, ParameterErr};
use crate::normal::std_normal::{critical_value, power_quantile};

/// Type I error rate used when none is given
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Target power used when none is given
pub const DEFAULT_POWER: f64 = 0.8;

/// Significance level and power shared by every estimate in a planning run.
///
/// The power quantile only depends on `power`, so it is computed once here
/// and reused by every estimator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    significance_level: f64,
    power: f64,
    z_beta: f64,
}

impl CalculatorConfig {
    pub fn new(significance_level: f64, power: f64) -> Result<Self, AbcomputeErr> {
        // Validates significance level for the two-sided case; one-sided
        // restrictions are checked per call
        critical_value(significance_level, true)?;
        let z_beta = power_quantile(power)?;
        Ok(CalculatorConfig {
            significance_level,
            power,
            z_beta,
        })
    }

    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn z_beta(&self) -> f64 {
        self.z_beta
    }

    pub fn critical_value(&self, two_sided: bool) -> Result<f64, AbcomputeErr> {
        critical_value(self.significance_level, two_sided)
    }

    /// (z_alpha + z_beta)^2, the factor every estimator scales by.
    ///
    /// z_alpha + z_beta must be positive, i.e. power must exceed the
    /// rejection rate of the test at zero effect.
    pub fn z_factor(&self, two_sided: bool) -> Result<f64, AbcomputeErr> {
        let z_sum = self.critical_value(two_sided)? + self.z_beta;
        if !(z_sum > 0.0) {
            return Err(ParameterErr::PowerBelowSignificance {
                power: self.power,
                significance_level: self.significance_level,
                z_sum,
            }
            .into());
        }
        Ok(z_sum.powi(2))
    }
}
