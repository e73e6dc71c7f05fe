//! Data model for loaded tables and extracted columns

mod column;
mod table;

pub use column::{parse_number, NumericColumn};
pub use table::{Row, Table};
