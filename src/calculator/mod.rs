//----------------------------------------
// calculator mod
//----------------------------------------
pub mod types;
