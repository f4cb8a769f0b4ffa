//! Request files describing one planning run.
//!
//! ```toml
//! significance_level = 0.05
//! power = 0.8
//! daily_traffic = 10000
//! sample_ratio = 0.5
//!
//! [mde]
//! start = 0.01
//! end = 0.10
//! step = 0.01
//!
//! [[metrics]]
//! name = "conversion"
//! type = "proportion"
//! baseline_rate = 0.1
//!
//! [[metrics]]
//! name = "time_on_site"
//! type = "mean"
//! observations = "time_on_site.csv"
//! ```
//!
//! Everything except `mde` and `metrics` has a default. Relative
//! `observations` paths are resolved against the request file's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::calculator::types::{CalculatorConfig, DEFAULT_POWER, DEFAULT_SIGNIFICANCE_LEVEL};
use crate::config::error::ConfigErr;
use crate::error::AbcomputeErr;
use crate::observations::load::load_first_numeric_column;
use crate::planning::mde_range::MdeRange;
use crate::planning::types::{
    Metric, MetricKind, MetricName, MetricType, PlanRequest, TrafficModel,
};

/// Parsed request file, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    #[serde(default = "default_power")]
    pub power: f64,
    #[serde(default = "default_two_sided")]
    pub two_sided: bool,
    /// Treatment arm size relative to control (k)
    #[serde(default = "default_allocation_ratio")]
    pub allocation_ratio: f64,
    /// Treatment arms, not counting control
    #[serde(default = "default_group_count")]
    pub group_count: usize,
    #[serde(default)]
    pub daily_traffic: Option<u64>,
    /// Share of daily traffic in the experiment; defaults to 1 when
    /// `daily_traffic` is set
    #[serde(default)]
    pub sample_ratio: Option<f64>,
    pub mde: MdeRange,
    #[serde(default)]
    pub metrics: Vec<MetricEntry>,
}

/// One `[[metrics]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct MetricEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub numerator: Option<String>,
    #[serde(default)]
    pub denominator: Option<String>,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    #[serde(default)]
    pub baseline_rate: Option<f64>,
    #[serde(default)]
    pub baseline_value: Option<f64>,
    #[serde(default)]
    pub variance: Option<f64>,
    /// File whose first column holds raw observations of a mean metric
    #[serde(default)]
    pub observations: Option<PathBuf>,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_significance_level() -> f64 {
    DEFAULT_SIGNIFICANCE_LEVEL
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_two_sided() -> bool {
    true
}

fn default_allocation_ratio() -> f64 {
    1.0
}

fn default_group_count() -> usize {
    1
}

fn default_has_header() -> bool {
    true
}

impl PlanFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AbcomputeErr> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| -> AbcomputeErr {
            ConfigErr::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })?;
        let file = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            metrics = file.metrics.len(),
            "loaded request file"
        );
        Ok(file)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AbcomputeErr> {
        toml::from_str(content).map_err(|e| ConfigErr::Parse(e).into())
    }

    /// Validates the file and resolves every metric's baseline, loading
    /// observation files relative to `base_dir`
    pub fn into_request(self, base_dir: &Path) -> Result<PlanRequest, AbcomputeErr> {
        let config = CalculatorConfig::new(self.significance_level, self.power)?;
        let traffic = match (self.daily_traffic, self.sample_ratio) {
            (Some(daily_traffic), maybe_ratio) => {
                Some(TrafficModel::new(daily_traffic, maybe_ratio.unwrap_or(1.0))?)
            }
            (None, Some(_)) => return Err(ConfigErr::SampleRatioWithoutTraffic.into()),
            (None, None) => None,
        };
        let metrics = self
            .metrics
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_metric(i, base_dir))
            .collect::<Result<Vec<Metric>, AbcomputeErr>>()?;

        Ok(PlanRequest {
            config,
            metrics,
            mde_range: self.mde,
            traffic,
            allocation_ratio: self.allocation_ratio,
            group_count: self.group_count,
            two_sided: self.two_sided,
        })
    }
}

impl MetricEntry {
    fn into_metric(self, index: usize, base_dir: &Path) -> Result<Metric, AbcomputeErr> {
        let name = match (self.name, self.numerator, self.denominator) {
            (Some(name), _, _) => MetricName::Plain(name),
            (None, Some(numerator), Some(denominator)) => MetricName::Ratio {
                numerator,
                denominator,
            },
            _ => return Err(ConfigErr::MissingName(index).into()),
        };
        let missing = |field: &'static str| -> AbcomputeErr {
            ConfigErr::MissingField {
                metric: name.to_string(),
                metric_type: self.metric_type,
                field,
            }
            .into()
        };

        let kind = match self.metric_type {
            MetricType::Proportion => MetricKind::Proportion {
                baseline_rate: self.baseline_rate.ok_or_else(|| missing("baseline_rate"))?,
            },
            MetricType::Mean => match (self.baseline_value, self.variance, &self.observations) {
                (Some(baseline_value), Some(variance), _) => MetricKind::Mean {
                    baseline_value,
                    variance,
                },
                (_, _, Some(observations)) => {
                    let values =
                        load_first_numeric_column(&base_dir.join(observations), self.has_header)?;
                    MetricKind::mean_from_observations(&values)?
                }
                (Some(_), None, None) => return Err(missing("variance")),
                (None, _, None) => return Err(missing("baseline_value")),
            },
        };

        Ok(Metric { name, kind })
    }
}
