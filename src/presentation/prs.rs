//! Presentation document implementation.

use crate::common::Length;
use serde::{Deserialize, Serialize};

use super::slide::{Slide, SlideLayout};

// PresentationML reserves slide ids below 256.
const FIRST_SLIDE_ID: u32 = 256;

/// An in-memory presentation document.
///
/// Holds the canvas size and the ordered slides. Serialization to a file
/// format is left to the caller.
///
/// # Examples
///
/// ```rust
/// use sheetdeck::presentation::{Presentation, SlideLayout};
///
/// let mut pres = Presentation::new();
/// assert_eq!(pres.slide_width().inches(), 10.0);
/// assert_eq!(pres.slide_height().inches(), 7.5);
///
/// pres.add_slide(SlideLayout::Blank);
/// assert_eq!(pres.slide_count(), 1);
/// assert_eq!(pres.slides()[0].slide_id(), 256);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<Slide>,
    /// Slide width
    slide_width: Length,
    /// Slide height
    slide_height: Length,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5".
    pub fn new() -> Self {
        Self::with_size(Length::from_emus(9_144_000), Length::from_emus(6_858_000))
    }

    /// Create a new empty presentation with the given slide size.
    pub fn with_size(width: Length, height: Length) -> Self {
        Self {
            slides: Vec::new(),
            slide_width: width,
            slide_height: height,
        }
    }

    /// Add a new slide to the end of the presentation.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(Slide::new(slide_id, layout));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    pub fn set_slide_size(&mut self, width: Length, height: Length) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Text of every slide, separated by blank lines.
    pub fn text(&self) -> String {
        self.slides
            .iter()
            .map(Slide::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
