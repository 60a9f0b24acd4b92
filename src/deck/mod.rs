//! Deck building.
//!
//! A [`DeckSpec`] (title, theme color, content mapping) is turned into a
//! [`Presentation`](crate::presentation::Presentation) by the
//! [`DeckBuilder`]: one title slide filled with the theme color, followed by
//! one content slide per non-reserved section.
//!
//! # Example
//!
//! ```rust
//! use sheetdeck::content::{ContentMapping, SectionContent};
//! use sheetdeck::deck::{DeckSpec, ThemeColor, build};
//!
//! let content = ContentMapping::new()
//!     .with("Overview", SectionContent::bullets(["a", "b"]))
//!     .with("Stats", SectionContent::key_values([("Rows", 10)]));
//! let spec = DeckSpec::with_theme("Report", ThemeColor::Blue, content);
//!
//! let pres = build(&spec);
//! assert_eq!(pres.slide_count(), 3);
//! assert_eq!(pres.slides()[2].body_lines(), vec!["Rows: 10"]);
//! assert_eq!(spec.file_name(), "Report.pptx");
//! ```

// Submodule declarations
mod builder;
mod spec;
mod style;
mod theme;

// Re-exports
pub use builder::{DeckBuilder, build};
pub use spec::DeckSpec;
pub use style::{BoxGeometry, DeckStyle, UnsupportedContentPolicy};
pub use theme::ThemeColor;
