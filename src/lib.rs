//! sheet-inspect - list the sheets of a workbook and preview each one
//!
//! Opens a spreadsheet workbook through calamine, enumerates its sheets in
//! workbook order and builds a [`Report`] holding, per sheet, the first rows
//! and an inferred type for every column.
//!
//! # Features
//!
//! - `.xlsx`, `.xlsb`, `.xls` and `.ods` engines, each behind a cargo feature
//! - Column type inference over the full column (int64, float64, bool,
//!   datetime, duration, text)
//! - Text, JSON and YAML renderings
//!
//! # Example
//!
//! ```no_run
//! use sheet_inspect::inspect;
//!
//! let report = inspect("budget.xlsx")?;
//! println!("Sheets: {:?}", report.sheet_names);
//! print!("{}", report);
//! # Ok::<(), sheet_inspect::InspectError>(())
//! ```

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod inspector;
pub mod preview;
pub mod report;
pub mod types;
pub mod workbook;

// Re-export commonly used types
pub use config::{InspectConfig, OutputFormat};
pub use error::{InspectError, InspectResult};
pub use inspector::{inspect, InspectEvent, Inspector};
pub use report::{Report, SheetReport};
pub use types::{CellValue, ColumnType};
