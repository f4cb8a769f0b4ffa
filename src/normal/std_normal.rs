use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{AbcomputeErr, ParameterErr};
use crate::normal::error::NormalDistErr;

fn std_normal() -> Result<Normal, AbcomputeErr> {
    Normal::new(0.0, 1.0).map_err(|e| NormalDistErr::Construction(e.to_string()).into())
}

/// Probit: the standard normal quantile at `p`
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(std_normal()?.inverse_cdf(p))
}

/// z-score threshold for a test at `significance_level`.
///
/// Two-sided tests use the `1 - significance_level / 2` quantile, one-sided
/// tests the `1 - significance_level` quantile. The upper tail is computed as
/// the negated lower-tail quantile so very small levels keep their precision.
/// One-sided levels must be below 0.5, otherwise the threshold would not be
/// positive.
pub fn critical_value(significance_level: f64, two_sided: bool) -> Result<f64, AbcomputeErr> {
    if !(significance_level > 0.0 && significance_level < 1.0) {
        return Err(ParameterErr::SignificanceLevel(significance_level).into());
    }
    if !two_sided && significance_level >= 0.5 {
        return Err(ParameterErr::OneSidedSignificanceLevel(significance_level).into());
    }
    let upper_tail = if two_sided {
        significance_level / 2.
    } else {
        significance_level
    };
    Ok(-std_normal_quantile(upper_tail)?)
}

/// z-score offset for the target power (1 - beta)
pub fn power_quantile(power: f64) -> Result<f64, AbcomputeErr> {
    if !(power > 0.0 && power < 1.0) {
        return Err(ParameterErr::Power(power).into());
    }
    std_normal_quantile(power)
}
