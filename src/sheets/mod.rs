//! Adapters between spreadsheets and the rating core. Nothing here does any
//! rating math.

pub mod reader;
pub mod writer;

pub use reader::{parse_wide_table, read_wide_csv};
pub use writer::{write_csv_sheets, write_json, Sheet};
