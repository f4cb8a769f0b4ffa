use crate::calculator::types::CalculatorConfig;
use crate::error::{AbcomputeErr, ParameterErr};
use crate::estimate::checks::{
    check_allocation_ratio, check_finite_size, check_mde, round_up_sample, squared_effect,
};
use crate::estimate::types::ContinuousRequest;
use crate::observations::summary::summarize;

/// Computes the control group size needed to detect a relative change of
/// `mde` in a mean metric (revenue per user, time on site, ...)
///
/// n = (1 + 1/k) * (z_alpha + z_beta)^2 * variance / (mde * baseline_value)^2,
/// rounded up
pub fn continuous_sample_size(
    config: &CalculatorConfig,
    request: &ContinuousRequest,
) -> Result<u64, AbcomputeErr> {
    let n = continuous_sample_size_unrounded(config, request)?;
    Ok(round_up_sample(n))
}

/// Same as [`continuous_sample_size`], with the baseline value and variance
/// estimated from raw observations (sample mean and Bessel-corrected
/// variance). Non-finite observations are ignored.
pub fn continuous_sample_size_from_observations(
    config: &CalculatorConfig,
    observations: &[f64],
    mde: f64,
    allocation_ratio: f64,
    two_sided: bool,
) -> Result<u64, AbcomputeErr> {
    let summary = summarize(observations)?;
    continuous_sample_size(
        config,
        &ContinuousRequest {
            baseline_value: summary.mean,
            variance: summary.variance,
            mde,
            allocation_ratio,
            two_sided,
        },
    )
}

pub(crate) fn continuous_sample_size_unrounded(
    config: &CalculatorConfig,
    request: &ContinuousRequest,
) -> Result<f64, AbcomputeErr> {
    let ContinuousRequest {
        baseline_value,
        variance,
        mde,
        allocation_ratio: k,
        two_sided,
    } = *request;

    //----------------------------------------
    // Check arguments
    if !baseline_value.is_finite() {
        return Err(ParameterErr::BaselineValue(baseline_value).into());
    }
    if !(variance.is_finite() && variance >= 0.0) {
        return Err(ParameterErr::Variance(variance).into());
    }
    check_mde(mde)?;
    check_allocation_ratio(k)?;
    let effect_sq = squared_effect(baseline_value, mde)?;

    //----------------------------------------
    // Compute size
    let n = (1. + 1. / k) * config.z_factor(two_sided)? * variance / effect_sq;
    check_finite_size(n, baseline_value, mde)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataErr, EffectErr};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn request(baseline_value: f64, variance: f64, mde: f64) -> ContinuousRequest {
        ContinuousRequest {
            baseline_value,
            variance,
            mde,
            allocation_ratio: 1.,
            two_sided: true,
        }
    }

    fn default_config() -> CalculatorConfig {
        CalculatorConfig::new(0.05, 0.8).expect("failed to construct calculator config")
    }

    #[test]
    fn small_mde_on_small_mean() {
        let n = continuous_sample_size(&default_config(), &request(0.06, 0.05, 0.001))
            .expect("failed to compute continuous sample size");
        assert_eq!(n, 218024438);
    }

    #[test]
    fn inverse_square_in_mde() {
        let config = default_config();
        let n_small = continuous_sample_size(&config, &request(0.06, 0.05, 0.001)).unwrap();
        let n_large = continuous_sample_size(&config, &request(0.06, 0.05, 0.01)).unwrap();
        assert_eq!(n_large, 2180245);
        let ratio = n_small as f64 / n_large as f64;
        assert!((ratio - 100.).abs() < 0.01);
    }

    #[test]
    fn allocation_ratio() {
        let config = default_config();
        let equal = continuous_sample_size(&config, &request(10., 4., 0.1)).unwrap();
        let double = continuous_sample_size(
            &config,
            &ContinuousRequest {
                allocation_ratio: 2.,
                ..request(10., 4., 0.1)
            },
        )
        .unwrap();
        assert_eq!(equal, 63);
        assert_eq!(double, 48);
    }

    #[test]
    fn from_observations() {
        let observations = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let n = continuous_sample_size_from_observations(
            &default_config(),
            &observations,
            0.1,
            1.,
            true,
        )
        .expect("failed to compute sample size from observations");
        assert_eq!(n, 288);
    }

    #[test]
    fn from_single_observation_err() {
        if let Err(e) =
            continuous_sample_size_from_observations(&default_config(), &[3.0], 0.1, 1., true)
        {
            assert!(matches!(
                e,
                AbcomputeErr::InsufficientData(DataErr::TooFewObservations { .. })
            ));
        } else {
            panic!()
        }
    }

    #[test]
    fn zero_mde_err() {
        assert!(matches!(
            continuous_sample_size(&default_config(), &request(10., 4., 0.)),
            Err(AbcomputeErr::DegenerateEffect(EffectErr::ZeroEffect { .. }))
        ));
    }

    #[test]
    fn size_beyond_u64_err() {
        if let Err(e) = continuous_sample_size(&default_config(), &request(1e-10, 1., 1e-6)) {
            assert!(matches!(
                e,
                AbcomputeErr::DegenerateEffect(EffectErr::Unbounded { .. })
            ));
            assert_eq!(
                String::from(
                    "degenerate effect: required sample size does not fit in 64 bits \
                    (baseline 0.0000000001, mde 0.000001)"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn size_never_decreases_with_power() {
        let sizes: Vec<u64> = (3..99)
            .map(|pct| {
                let config = CalculatorConfig::new(0.05, pct as f64 / 100.).unwrap();
                continuous_sample_size(&config, &request(10., 4., 0.05)).unwrap()
            })
            .collect();
        assert!(sizes.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn power_too_low_err() {
        let config = CalculatorConfig::new(0.05, 0.005).unwrap();
        assert!(matches!(
            continuous_sample_size(&config, &request(10., 4., 0.05)),
            Err(AbcomputeErr::InvalidParameter(ParameterErr::PowerBelowSignificance { .. }))
        ));
    }

    #[test]
    fn zero_baseline_err() {
        assert!(matches!(
            continuous_sample_size(&default_config(), &request(0., 4., 0.1)),
            Err(AbcomputeErr::DegenerateEffect(EffectErr::ZeroEffect { .. }))
        ));
    }

    #[test]
    fn negative_variance_err() {
        if let Err(e) = continuous_sample_size(&default_config(), &request(10., -1., 0.1)) {
            assert_eq!(
                String::from("invalid parameter: variance should be finite and >= 0; got -1"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn zero_variance_needs_one_unit() {
        let n = continuous_sample_size(&default_config(), &request(10., 0., 0.1)).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn ceiling_brackets_formula_value() {
        let config = default_config();
        let mut rng = StdRng::seed_from_u64(24601);
        for _ in 0..500 {
            let req = ContinuousRequest {
                baseline_value: rng.gen_range(0.5..100.0),
                variance: rng.gen_range(0.1..500.0),
                mde: rng.gen_range(0.01..0.5),
                allocation_ratio: rng.gen_range(0.2..3.0),
                two_sided: rng.gen_bool(0.5),
            };
            let raw = continuous_sample_size_unrounded(&config, &req).unwrap();
            let n = continuous_sample_size(&config, &req).unwrap() as f64;
            assert!(n >= raw.max(1.) && n < raw + 1.);
        }
    }

    #[test]
    fn non_increasing_in_mde() {
        let config = default_config();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let baseline = rng.gen_range(0.5..100.0);
            let variance = rng.gen_range(0.1..500.0);
            let small = rng.gen_range(0.01..0.5);
            let large = rng.gen_range(small..0.5);
            let n_small =
                continuous_sample_size(&config, &request(baseline, variance, small)).unwrap();
            let n_large =
                continuous_sample_size(&config, &request(baseline, variance, large)).unwrap();
            assert!(n_large <= n_small);
        }
    }

    #[test]
    fn non_decreasing_in_power() {
        let req = request(10., 4., 0.05);
        let sizes: Vec<u64> = [0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.99]
            .iter()
            .map(|&power| {
                continuous_sample_size(&CalculatorConfig::new(0.05, power).unwrap(), &req).unwrap()
            })
            .collect();
        assert!(sizes.windows(2).all(|w| w[1] >= w[0]));
    }
}
