//----------------------------------------
// estimate mod
//----------------------------------------
pub mod binary;
pub(crate) mod checks;
pub mod continuous;
pub mod error;
pub mod types;
