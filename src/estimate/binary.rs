use crate::calculator::types::CalculatorConfig;
use crate::error::{AbcomputeErr, ParameterErr};
use crate::estimate::checks::{
    check_allocation_ratio, check_finite_size, check_mde, round_up_sample, squared_effect,
};
use crate::estimate::types::BinaryRequest;

/// Computes the control group size needed to detect a relative change of
/// `mde` in a proportion metric (conversion rate, click-through rate, ...)
///
/// With delta = baseline_rate * mde, p1 = baseline_rate and p2 = p1 + delta,
/// n = (p2 (1 - p2) / k + p1 (1 - p1)) * (z_alpha + z_beta)^2 / delta^2,
/// rounded up
pub fn binary_sample_size(
    config: &CalculatorConfig,
    request: &BinaryRequest,
) -> Result<u64, AbcomputeErr> {
    let n = binary_sample_size_unrounded(config, request)?;
    Ok(round_up_sample(n))
}

pub(crate) fn binary_sample_size_unrounded(
    config: &CalculatorConfig,
    request: &BinaryRequest,
) -> Result<f64, AbcomputeErr> {
    let BinaryRequest {
        baseline_rate,
        mde,
        allocation_ratio: k,
        two_sided,
    } = *request;

    //----------------------------------------
    // Check arguments
    if !(baseline_rate > 0.0 && baseline_rate < 1.0) {
        return Err(ParameterErr::BaselineRate(baseline_rate).into());
    }
    check_mde(mde)?;
    check_allocation_ratio(k)?;
    let delta_sq = squared_effect(baseline_rate, mde)?;

    let p_ctrl = baseline_rate;
    let p_trt = baseline_rate + baseline_rate * mde;
    if !(0.0..=1.0).contains(&p_trt) {
        return Err(ParameterErr::TreatmentRate(p_trt).into());
    }

    //----------------------------------------
    // Compute size
    let var_ctrl = p_ctrl * (1. - p_ctrl);
    let var_trt = p_trt * (1. - p_trt);
    let n = (var_trt / k + var_ctrl) * config.z_factor(two_sided)? / delta_sq;
    check_finite_size(n, baseline_rate, mde)
}
