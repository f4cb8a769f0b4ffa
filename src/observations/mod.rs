//----------------------------------------
// observations mod
//----------------------------------------
pub mod error;
pub mod load;
pub mod summary;
