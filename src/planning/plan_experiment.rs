use itertools::Itertools;

use crate::calculator::types::CalculatorConfig;
use crate::error::{AbcomputeErr, ParameterErr};
use crate::estimate::checks::{SAMPLE_SIZE_LIMIT, check_allocation_ratio};
use crate::estimate::error::EffectErr;
use crate::planning::mde_range::MdeRange;
use crate::planning::types::{Metric, ResultTable, SampleSizeResult, TrafficModel};

/// Computes sample size requirements for every metric across an MDE sweep
///
/// For each metric (in order) and each MDE (ascending):
/// - control size comes from the metric's estimator
/// - each of the `group_count` treatment arms gets ceil(control * k)
/// - total = control + treatment * group_count
/// - days = ceil(total / (daily_traffic * sample_ratio)), when a traffic
///   model is given
///
/// Arguments are checked before any estimate is made. The first failing
/// (metric, MDE) pair aborts the whole run; no partial table is returned.
pub fn plan_experiment(
    config: &CalculatorConfig,
    metrics: &[Metric],
    mde_range: &MdeRange,
    maybe_traffic: Option<&TrafficModel>,
    allocation_ratio: f64,
    group_count: usize,
    two_sided: bool,
) -> Result<ResultTable, AbcomputeErr> {
    //----------------------------------------
    // Check arguments
    let mdes = mde_range.values()?;
    check_allocation_ratio(allocation_ratio)?;
    if group_count < 1 {
        return Err(ParameterErr::GroupCount(group_count).into());
    }
    if let Some(traffic) = maybe_traffic {
        traffic.validate()?;
    }
    // Critical value and power restrictions surface before any row
    config.z_factor(two_sided)?;

    //----------------------------------------
    // Sweep
    let rows = metrics
        .iter()
        .cartesian_product(mdes.iter())
        .map(|(metric, &mde)| -> Result<SampleSizeResult, AbcomputeErr> {
            let control = metric.kind.control_sample_size(
                config,
                mde,
                allocation_ratio,
                two_sided,
            )?;
            let overflow = || -> AbcomputeErr {
                EffectErr::GroupSizeOverflow {
                    metric: metric.name.to_string(),
                    mde,
                }
                .into()
            };
            let treatment = (control as f64 * allocation_ratio).ceil();
            if treatment >= SAMPLE_SIZE_LIMIT {
                return Err(overflow());
            }
            let treatment = (treatment as u64).max(1);
            let total = treatment
                .checked_mul(group_count as u64)
                .and_then(|arms| arms.checked_add(control))
                .ok_or_else(overflow)?;
            Ok(SampleSizeResult {
                metric_name: metric.name.to_string(),
                mde,
                control_sample_size: control,
                treatment_sample_size: treatment,
                total_sample_size: total,
                experiment_days: maybe_traffic.map(|traffic| traffic.days_for(total)),
            })
        })
        .collect::<Result<Vec<SampleSizeResult>, AbcomputeErr>>()?;

    Ok(ResultTable::new(rows))
}
