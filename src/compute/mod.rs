//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::estimate::binary::binary_sample_size;
pub use crate::estimate::continuous::{
    continuous_sample_size, continuous_sample_size_from_observations,
};
pub use crate::normal::std_normal::{critical_value, power_quantile};
pub use crate::observations::load::load_first_numeric_column;
pub use crate::observations::summary::summarize;
pub use crate::planning::plan_experiment::plan_experiment;
