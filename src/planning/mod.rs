//----------------------------------------
// planning mod
//----------------------------------------
pub mod error;
pub mod mde_range;
pub mod plan_experiment;
pub mod types;
