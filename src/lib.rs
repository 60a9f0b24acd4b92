//! Sheetdeck - build slide decks from spreadsheet summaries
//!
//! This library turns an ordered mapping of section titles to content into an
//! in-memory presentation: one title slide filled with a theme color, then
//! one content slide per section.
//!
//! # Features
//!
//! - **Deck builder**: title slide plus one slide per section, bullet and
//!   `key: value` bodies
//! - **Typed content**: sections are bullet lists, key/value lists, or
//!   explicitly unsupported values
//! - **Table summaries**: record counts, missing values and duplicates
//!   turned into ready-made sections
//! - **Completion replies**: JSON from an injected completion client becomes
//!   deck content
//!
//! # Example - Building a deck
//!
//! ```rust
//! use sheetdeck::common::RGBColor;
//! use sheetdeck::content::ContentMapping;
//! use sheetdeck::deck::{DeckSpec, build};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let content = ContentMapping::from_json_str(
//!     r#"{"title": "x", "Overview": ["a", "b"], "Stats": {"Rows": 10}}"#,
//! )?;
//! let spec = DeckSpec::new("Report", RGBColor::new(31, 119, 180), content);
//!
//! let pres = build(&spec);
//! assert_eq!(pres.slide_count(), 3);
//! assert_eq!(pres.slides()[0].text(), "Report");
//! assert_eq!(pres.slides()[1].heading().as_deref(), Some("Overview"));
//! assert_eq!(pres.slides()[1].body_lines(), vec!["a", "b"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Summarising a table
//!
//! ```rust
//! use chrono::Local;
//! use sheetdeck::deck::{DeckBuilder, DeckSpec, ThemeColor};
//! use sheetdeck::summary::{CellValue, Table, workflow_content};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::from_rows(
//!     ["product", "units"],
//!     vec![
//!         vec![CellValue::from("widget"), CellValue::Int(4)],
//!         vec![CellValue::from("gadget"), CellValue::Empty],
//!     ],
//! )?;
//!
//! let content = workflow_content(&table, "sales.csv", Local::now().naive_local());
//! let spec = DeckSpec::with_theme("Analysis Report", ThemeColor::Blue, content);
//! let pres = DeckBuilder::new().build(&spec)?;
//!
//! assert_eq!(pres.slide_count(), 5);
//! assert_eq!(spec.file_name(), "Analysis_Report.pptx");
//! # Ok(())
//! # }
//! ```

/// Error type, colors and lengths shared by every module
pub mod common;

/// Content mapping and section values
pub mod content;

/// In-memory presentation document
pub mod presentation;

/// Deck spec, style and builder
pub mod deck;

/// Table statistics and ready-made content layouts
pub mod summary;

/// Deck content from an injected completion client
pub mod completion;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use content::{ContentMapping, SectionContent};
pub use deck::{DeckBuilder, DeckSpec, ThemeColor};
pub use presentation::Presentation;
