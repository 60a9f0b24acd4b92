//! Table summaries.
//!
//! Turns an already-parsed table into the statistics shown to the user and
//! into ready-made [`ContentMapping`](crate::content::ContentMapping)s for
//! the deck builder.
//!
//! # Example
//!
//! ```rust
//! use sheetdeck::summary::{CellValue, Table, overview_content};
//! use chrono::NaiveDate;
//!
//! let mut table = Table::new(["region", "sales"]);
//! table.push_row(vec![CellValue::from("north"), CellValue::Int(10)])?;
//! table.push_row(vec![CellValue::from("south")])?;
//!
//! let stats = table.stats();
//! assert_eq!(stats.rows, 2);
//! assert_eq!(stats.missing_values, 1);
//!
//! let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let content = overview_content(&table, at);
//! assert_eq!(content.section_count(), 3);
//! # Ok::<(), sheetdeck::common::Error>(())
//! ```

// Submodule declarations
mod layout;
mod stats;
mod table;

// Re-exports
pub use layout::{overview_content, workflow_content};
pub use stats::{ColumnDescription, ColumnType, TableStats};
pub use table::{CellValue, Table};
