//----------------------------------------
// config mod
//----------------------------------------
pub mod error;
pub mod request_file;

pub use request_file::{MetricEntry, PlanFile};
