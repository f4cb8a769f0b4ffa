use statrs::statistics::Statistics;

use crate::error::AbcomputeErr;
use crate::observations::error::DataErr;

/// Smallest sample for which a Bessel-corrected variance exists
pub const MIN_OBSERVATIONS: usize = 2;

/// Baseline estimates for a mean metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationSummary {
    /// Number of finite observations used
    pub count: usize,
    pub mean: f64,
    /// Unbiased sample variance (divisor n - 1)
    pub variance: f64,
}

/// Sample mean and Bessel-corrected variance of the finite observations
pub fn summarize(observations: &[f64]) -> Result<ObservationSummary, AbcomputeErr> {
    let finite: Vec<f64> = observations
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .collect();
    if finite.len() < MIN_OBSERVATIONS {
        return Err(DataErr::TooFewObservations {
            required: MIN_OBSERVATIONS,
            got: finite.len(),
        }
        .into());
    }
    Ok(ObservationSummary {
        count: finite.len(),
        mean: finite.iter().mean(),
        variance: finite.iter().variance(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_values() {
        let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .expect("failed to summarize observations");
        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        assert!((summary.variance - 32. / 7.).abs() < 1e-12);
    }

    #[test]
    fn two_observations() {
        let summary = summarize(&[1.0, 3.0]).unwrap();
        assert_eq!(summary.mean, 2.0);
        assert!((summary.variance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let summary = summarize(&[1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn too_few_observations() {
        if let Err(e) = summarize(&[1.0, f64::NAN]) {
            assert_eq!(
                String::from(
                    "insufficient data: variance needs at least 2 finite observations; got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn empty() {
        assert!(matches!(
            summarize(&[]),
            Err(AbcomputeErr::InsufficientData(DataErr::TooFewObservations { got: 0, .. }))
        ));
    }
}
