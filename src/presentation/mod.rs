//! In-memory presentation document.
//!
//! This module models the document the deck builder produces: a canvas size
//! and an ordered list of slides, each holding a background and positioned
//! text shapes. It follows the python-pptx object layout:
//! - `Presentation`: slide dimensions and slides
//! - `Slide`: layout, background and shapes
//! - `Shape`: a positioned text box or placeholder with a `TextFrame`
//!
//! # Example
//!
//! ```rust
//! use sheetdeck::presentation::{Presentation, SlideLayout};
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleAndContent);
//! slide.set_heading("Overview");
//! slide.add_body_line("First point");
//!
//! assert_eq!(pres.slide_count(), 1);
//! assert_eq!(pres.slides()[0].body_lines(), vec!["First point"]);
//! ```

// Submodule declarations
mod background;
mod prs;
mod shape;
mod slide;
mod text;

// Re-exports
pub use background::SlideBackground;
pub use prs::Presentation;
pub use shape::{Shape, ShapeKind};
pub use slide::{Slide, SlideLayout};
pub use text::{Alignment, Paragraph, TextFormat, TextFrame, VerticalAnchor};
