//! Content model driving slide generation.
//!
//! A [`ContentMapping`] is an ordered map from section title to
//! [`SectionContent`]. Order of insertion decides slide order, and the
//! reserved [`RESERVED_TITLE_KEY`] entry never becomes a slide.
//!
//! # Example
//!
//! ```rust
//! use sheetdeck::content::{ContentMapping, SectionContent};
//!
//! let mut content = ContentMapping::new();
//! content.insert("Overview", SectionContent::bullets(["a", "b"]));
//! content.insert("Stats", SectionContent::key_values([("Rows", 10)]));
//!
//! let titles: Vec<&str> = content.sections().map(|(title, _)| title).collect();
//! assert_eq!(titles, vec!["Overview", "Stats"]);
//! ```

// Submodule declarations
mod json;
mod mapping;
mod section;

// Re-exports
pub use mapping::{ContentMapping, RESERVED_TITLE_KEY};
pub use section::SectionContent;
