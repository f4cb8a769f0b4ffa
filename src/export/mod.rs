//----------------------------------------
// export mod
//----------------------------------------
pub mod delimited;
pub mod table;

pub use delimited::{export_csv, write_delimited};
pub use table::format_table;
