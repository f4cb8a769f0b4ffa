//----------------------------------------
// planning mod types
//----------------------------------------
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::calculator::types::CalculatorConfig;
use crate::error::{AbcomputeErr, ParameterErr};
use crate::estimate::binary::binary_sample_size;
use crate::estimate::continuous::continuous_sample_size;
use crate::estimate::types::{BinaryRequest, ContinuousRequest};
use crate::observations::summary::summarize;
use crate::planning::mde_range::MdeRange;
use crate::planning::plan_experiment::plan_experiment;

/// Identifies a metric: a plain column name, or a numerator/denominator pair
/// for ratio metrics (whose baseline has already been resolved to a scalar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricName {
    Plain(String),
    Ratio {
        numerator: String,
        denominator: String,
    },
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricName::Plain(name) => write!(f, "{name}"),
            MetricName::Ratio {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

impl From<&str> for MetricName {
    fn from(name: &str) -> Self {
        MetricName::Plain(name.to_string())
    }
}

/// Textual metric type, as written in request files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Mean,
    Proportion,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::Mean => write!(f, "mean"),
            MetricType::Proportion => write!(f, "proportion"),
        }
    }
}

impl FromStr for MetricType {
    type Err = AbcomputeErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(MetricType::Mean),
            "proportion" => Ok(MetricType::Proportion),
            _ => Err(ParameterErr::MetricType(s.to_string()).into()),
        }
    }
}

/// Baseline of a metric, tagged by the estimator it goes through
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricKind {
    Proportion { baseline_rate: f64 },
    Mean { baseline_value: f64, variance: f64 },
}

impl MetricKind {
    /// Mean metric with baseline and variance estimated from raw observations
    pub fn mean_from_observations(observations: &[f64]) -> Result<Self, AbcomputeErr> {
        let summary = summarize(observations)?;
        Ok(MetricKind::Mean {
            baseline_value: summary.mean,
            variance: summary.variance,
        })
    }

    pub fn metric_type(&self) -> MetricType {
        match self {
            MetricKind::Proportion { .. } => MetricType::Proportion,
            MetricKind::Mean { .. } => MetricType::Mean,
        }
    }

    /// Control group size for this metric at one MDE
    pub fn control_sample_size(
        &self,
        config: &CalculatorConfig,
        mde: f64,
        allocation_ratio: f64,
        two_sided: bool,
    ) -> Result<u64, AbcomputeErr> {
        match *self {
            MetricKind::Proportion { baseline_rate } => binary_sample_size(
                config,
                &BinaryRequest {
                    baseline_rate,
                    mde,
                    allocation_ratio,
                    two_sided,
                },
            ),
            MetricKind::Mean {
                baseline_value,
                variance,
            } => continuous_sample_size(
                config,
                &ContinuousRequest {
                    baseline_value,
                    variance,
                    mde,
                    allocation_ratio,
                    two_sided,
                },
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: MetricName,
    pub kind: MetricKind,
}

impl Metric {
    pub fn proportion(name: impl Into<MetricName>, baseline_rate: f64) -> Self {
        Metric {
            name: name.into(),
            kind: MetricKind::Proportion { baseline_rate },
        }
    }

    pub fn mean(name: impl Into<MetricName>, baseline_value: f64, variance: f64) -> Self {
        Metric {
            name: name.into(),
            kind: MetricKind::Mean {
                baseline_value,
                variance,
            },
        }
    }
}

/// Traffic available to the experiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficModel {
    /// Units (users, sessions, ...) arriving per day
    pub daily_traffic: u64,
    /// Share of daily traffic enrolled in the experiment, in (0, 1]
    pub sample_ratio: f64,
}

impl TrafficModel {
    pub fn new(daily_traffic: u64, sample_ratio: f64) -> Result<Self, AbcomputeErr> {
        let traffic = TrafficModel {
            daily_traffic,
            sample_ratio,
        };
        traffic.validate()?;
        Ok(traffic)
    }

    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        if self.daily_traffic == 0 {
            return Err(ParameterErr::DailyTraffic(self.daily_traffic).into());
        }
        if !(self.sample_ratio > 0.0 && self.sample_ratio <= 1.0) {
            return Err(ParameterErr::SampleRatio(self.sample_ratio).into());
        }
        Ok(())
    }

    /// Days of enrolled traffic needed to collect `total_sample_size` units
    pub fn days_for(&self, total_sample_size: u64) -> u64 {
        (total_sample_size as f64 / (self.daily_traffic as f64 * self.sample_ratio)).ceil() as u64
    }
}

/// Everything one planning run needs, passed explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub config: CalculatorConfig,
    pub metrics: Vec<Metric>,
    pub mde_range: MdeRange,
    /// Without a traffic model rows carry no experiment duration
    pub traffic: Option<TrafficModel>,
    /// Size of each treatment arm relative to control (k)
    pub allocation_ratio: f64,
    /// Number of treatment arms, not counting control
    pub group_count: usize,
    pub two_sided: bool,
}

impl PlanRequest {
    pub fn run(&self) -> Result<ResultTable, AbcomputeErr> {
        plan_experiment(
            &self.config,
            &self.metrics,
            &self.mde_range,
            self.traffic.as_ref(),
            self.allocation_ratio,
            self.group_count,
            self.two_sided,
        )
    }
}

/// Requirements for one (metric, MDE) pair
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSizeResult {
    pub metric_name: String,
    pub mde: f64,
    pub control_sample_size: u64,
    /// Size of each treatment arm
    pub treatment_sample_size: u64,
    /// Control plus every treatment arm
    pub total_sample_size: u64,
    pub experiment_days: Option<u64>,
}

/// Result rows in metric-major, ascending-MDE order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<SampleSizeResult>,
}

impl ResultTable {
    pub fn new(rows: Vec<SampleSizeResult>) -> Self {
        ResultTable { rows }
    }

    pub fn rows(&self) -> &[SampleSizeResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampleSizeResult> {
        self.rows.iter()
    }

    /// Rows belonging to one metric, in MDE order
    pub fn rows_for<'a>(
        &'a self,
        metric_name: &'a str,
    ) -> impl Iterator<Item = &'a SampleSizeResult> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.metric_name == metric_name)
    }

    pub fn into_rows(self) -> Vec<SampleSizeResult> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a SampleSizeResult;
    type IntoIter = std::slice::Iter<'a, SampleSizeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_name_display() {
        assert_eq!(MetricName::from("revenue").to_string(), "revenue");
        let ratio = MetricName::Ratio {
            numerator: "clicks".into(),
            denominator: "impressions".into(),
        };
        assert_eq!(ratio.to_string(), "clicks/impressions");
    }

    #[test]
    fn metric_type_from_str() {
        assert_eq!("mean".parse::<MetricType>().unwrap(), MetricType::Mean);
        assert_eq!(
            " Proportion ".parse::<MetricType>().unwrap(),
            MetricType::Proportion
        );
        if let Err(e) = "ratio".parse::<MetricType>() {
            assert_eq!(
                String::from(
                    "invalid parameter: unknown metric type \"ratio\"; \
                    expected \"mean\" or \"proportion\""
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn kind_dispatches_to_estimator() {
        let config = CalculatorConfig::new(0.05, 0.8).unwrap();
        let proportion = MetricKind::Proportion { baseline_rate: 0.1 };
        assert_eq!(proportion.metric_type(), MetricType::Proportion);
        assert_eq!(
            proportion
                .control_sample_size(&config, 0.1, 1., true)
                .unwrap(),
            14749
        );
        let mean = MetricKind::Mean {
            baseline_value: 10.,
            variance: 4.,
        };
        assert_eq!(mean.metric_type(), MetricType::Mean);
        assert_eq!(mean.control_sample_size(&config, 0.1, 1., true).unwrap(), 63);
    }

    #[test]
    fn mean_kind_from_observations() {
        let kind = MetricKind::mean_from_observations(&[1.0, 3.0]).unwrap();
        if let MetricKind::Mean {
            baseline_value,
            variance,
        } = kind
        {
            assert_eq!(baseline_value, 2.0);
            assert!((variance - 2.0).abs() < 1e-12);
        } else {
            panic!()
        }
    }

    #[test]
    fn traffic_days() {
        let traffic = TrafficModel::new(1000, 0.5).unwrap();
        assert_eq!(traffic.days_for(29498), 59);
        assert_eq!(traffic.days_for(500), 1);
        assert_eq!(traffic.days_for(501), 2);
        assert_eq!(traffic.days_for(0), 0);
    }

    #[test]
    fn traffic_bad_parameters() {
        assert!(matches!(
            TrafficModel::new(0, 0.5),
            Err(AbcomputeErr::InvalidParameter(ParameterErr::DailyTraffic(0)))
        ));
        for ratio in [0.0, 1.01, -0.5, f64::NAN] {
            assert!(matches!(
                TrafficModel::new(100, ratio),
                Err(AbcomputeErr::InvalidParameter(ParameterErr::SampleRatio(_)))
            ));
        }
        assert!(TrafficModel::new(100, 1.0).is_ok());
    }
}
