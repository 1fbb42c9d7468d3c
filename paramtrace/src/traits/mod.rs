//! Core traits for paramtrace

mod table_row;
mod to_params;
mod to_value;

pub use table_row::{TableRow, DEFAULT_COLUMN_NAME};
pub use to_params::ToParams;
pub use to_value::ToValue;
