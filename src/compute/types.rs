//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::calculator::types::{CalculatorConfig, DEFAULT_POWER, DEFAULT_SIGNIFICANCE_LEVEL};
pub use crate::estimate::types::{BinaryRequest, ContinuousRequest};
pub use crate::observations::summary::ObservationSummary;
pub use crate::planning::mde_range::MdeRange;
pub use crate::planning::types::{
    Metric, MetricKind, MetricName, MetricType, PlanRequest, ResultTable, SampleSizeResult,
    TrafficModel,
};
