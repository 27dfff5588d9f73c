//! Scan-export parsing, display rounding, and JSON output.
//!
//! - [`reader`] turns delimited text into validated [`RawDefectRow`]s.
//! - [`display`] rounds records for tabular display.
//! - [`io`] writes serializable reports to disk.

pub mod display;
pub mod io;
pub mod reader;

pub use display::{defect_table, round_to, DefectTableRow, DISPLAY_DECIMALS};
pub use io::write_json_file;
pub use reader::{parse_table, read_table, RawDefectRow, TableLayout};
