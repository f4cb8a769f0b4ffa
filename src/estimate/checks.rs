use crate::error::{AbcomputeErr, ParameterErr};
use crate::estimate::error::EffectErr;

pub(crate) fn check_allocation_ratio(k: f64) -> Result<(), AbcomputeErr> {
    if !(k.is_finite() && k > 0.0) {
        return Err(ParameterErr::AllocationRatio(k).into());
    }
    Ok(())
}

pub(crate) fn check_mde(mde: f64) -> Result<(), AbcomputeErr> {
    if !mde.is_finite() {
        return Err(ParameterErr::Mde(mde).into());
    }
    Ok(())
}

/// Squared absolute effect, rejecting zero (including underflow to zero)
pub(crate) fn squared_effect(baseline: f64, mde: f64) -> Result<f64, AbcomputeErr> {
    let effect = baseline * mde;
    let effect_sq = effect * effect;
    if effect_sq == 0.0 {
        return Err(EffectErr::ZeroEffect { baseline, mde }.into());
    }
    Ok(effect_sq)
}

// 2^64; any value whose ceiling reaches it cannot be counted in a u64
pub(crate) const SAMPLE_SIZE_LIMIT: f64 = u64::MAX as f64;

/// Rejects formula values that are infinite or whose ceiling overflows a u64
pub(crate) fn check_finite_size(n: f64, baseline: f64, mde: f64) -> Result<f64, AbcomputeErr> {
    if !n.is_finite() || n.ceil() >= SAMPLE_SIZE_LIMIT {
        return Err(EffectErr::Unbounded { baseline, mde }.into());
    }
    Ok(n)
}

/// Rounds a formula value up to whole units; every arm gets at least one.
/// `n` must already have passed [`check_finite_size`].
pub(crate) fn round_up_sample(n: f64) -> u64 {
    (n.ceil() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_is_ceiling() {
        assert_eq!(round_up_sample(14748.045), 14749);
        assert_eq!(round_up_sample(12.0), 12);
        assert_eq!(round_up_sample(0.0), 1);
    }

    #[test]
    fn zero_effect_from_zero_baseline() {
        if let Err(e) = squared_effect(0.0, 0.1) {
            assert_eq!(
                String::from("degenerate effect: absolute effect is zero (baseline 0, mde 0.1)"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn underflowing_effect_is_zero() {
        assert!(matches!(
            squared_effect(1e-200, 1e-200),
            Err(AbcomputeErr::DegenerateEffect(EffectErr::ZeroEffect { .. }))
        ));
    }

    #[test]
    fn size_limit() {
        assert_eq!(check_finite_size(1e19, 1., 1e-9).unwrap(), 1e19);
        for n in [SAMPLE_SIZE_LIMIT, 1e33, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                check_finite_size(n, 1., 1e-9),
                Err(AbcomputeErr::DegenerateEffect(EffectErr::Unbounded { .. }))
            ));
        }
    }

    #[test]
    fn bad_allocation_ratio() {
        for k in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                check_allocation_ratio(k),
                Err(AbcomputeErr::InvalidParameter(ParameterErr::AllocationRatio(_)))
            ));
        }
        assert!(check_allocation_ratio(0.5).is_ok());
    }
}
