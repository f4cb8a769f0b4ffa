//----------------------------------------
// normal mod
//----------------------------------------
pub mod error;
pub mod std_normal;
