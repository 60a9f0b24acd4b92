//! Slide implementation for generated presentations.

use crate::common::Length;
use serde::{Deserialize, Serialize};

use super::background::SlideBackground;
use super::shape::{Shape, ShapeKind};
use super::text::Paragraph;

// Placeholder geometry of the stock "Title and Content" layout on a 10" x 7.5" master.
const TITLE_X: i64 = 457_200;
const TITLE_Y: i64 = 274_638;
const TITLE_CX: i64 = 8_229_600;
const TITLE_CY: i64 = 1_143_000;
const BODY_X: i64 = 457_200;
const BODY_Y: i64 = 1_600_200;
const BODY_CX: i64 = 8_229_600;
const BODY_CY: i64 = 4_525_963;

/// Slide layout a slide is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideLayout {
    /// No placeholders
    Blank,
    /// Title placeholder above a body placeholder
    TitleAndContent,
}

/// A slide in a generated presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    pub(crate) background: Option<SlideBackground>,
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set a background for the slide.
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    /// Get the background for the slide.
    ///
    /// Returns `None` when the slide uses the master background.
    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn next_shape_id(&self) -> u32 {
        // IDs: 1=group, 2+=shapes
        (self.shapes.len() + 2) as u32
    }

    fn push_shape(&mut self, shape: Shape) -> &mut Shape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Add a text box holding `text` as a single paragraph.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let mut shape = Shape::new(self.next_shape_id(), ShapeKind::TextBox, x, y, width, height);
        shape.set_text(text);
        self.push_shape(shape)
    }

    fn placeholder_mut(&mut self, kind: ShapeKind) -> &mut Shape {
        if let Some(index) = self.shapes.iter().position(|s| s.kind == kind) {
            return &mut self.shapes[index];
        }

        let (x, y, cx, cy) = match kind {
            ShapeKind::TitlePlaceholder => (TITLE_X, TITLE_Y, TITLE_CX, TITLE_CY),
            _ => (BODY_X, BODY_Y, BODY_CX, BODY_CY),
        };
        let shape = Shape::new(
            self.next_shape_id(),
            kind,
            Length::from_emus(x),
            Length::from_emus(y),
            Length::from_emus(cx),
            Length::from_emus(cy),
        );
        self.push_shape(shape)
    }

    /// Set the heading text, creating the title placeholder if needed.
    pub fn set_heading(&mut self, text: &str) -> &mut Shape {
        self.placeholder_mut(ShapeKind::TitlePlaceholder).set_text(text)
    }

    /// The body placeholder, created empty on first access.
    pub fn body_mut(&mut self) -> &mut Shape {
        self.placeholder_mut(ShapeKind::BodyPlaceholder)
    }

    /// Append an unformatted line to the body placeholder.
    pub fn add_body_line(&mut self, text: &str) -> &mut Paragraph {
        self.body_mut()
            .text_frame_mut()
            .add_paragraph(Paragraph::new(text))
    }

    fn find(&self, kind: ShapeKind) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.kind == kind)
    }

    /// Text of the title placeholder.
    pub fn heading(&self) -> Option<String> {
        self.find(ShapeKind::TitlePlaceholder).map(Shape::text)
    }

    /// Paragraph texts of the body placeholder, in order.
    pub fn body_lines(&self) -> Vec<&str> {
        self.find(ShapeKind::BodyPlaceholder)
            .map(|s| s.text_frame().paragraphs().iter().map(Paragraph::text).collect())
            .unwrap_or_default()
    }

    /// Paragraphs of the body placeholder, in order.
    pub fn body_paragraphs(&self) -> &[Paragraph] {
        self.find(ShapeKind::BodyPlaceholder)
            .map(|s| s.text_frame().paragraphs())
            .unwrap_or(&[])
    }

    /// All slide text, one shape per line block.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(Shape::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_placeholders_created_once() {
        let mut slide = Slide::new(256, SlideLayout::TitleAndContent);
        slide.set_heading("First");
        slide.set_heading("Second");
        slide.add_body_line("a");
        slide.add_body_line("b");

        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.heading().as_deref(), Some("Second"));
        assert_eq!(slide.body_lines(), vec!["a", "b"]);
        assert_eq!(slide.text(), "Second\na\nb");
    }

    #[test]
    fn test_empty_body() {
        let mut slide = Slide::new(257, SlideLayout::TitleAndContent);
        slide.set_heading("Only heading");
        slide.body_mut();

        assert!(slide.body_lines().is_empty());
        assert!(slide.body_paragraphs().is_empty());
        assert_eq!(slide.text(), "Only heading");
    }

    #[test]
    fn test_background_and_text_box() {
        let mut slide = Slide::new(256, SlideLayout::Blank);
        assert!(slide.background().is_none());

        slide.set_background(SlideBackground::solid(RGBColor::new(44, 160, 44)));
        let shape = slide.add_text_box(
            "Title",
            Length::from_inches(0.5),
            Length::from_inches(2.5),
            Length::from_inches(9.0),
            Length::from_inches(1.5),
        );
        assert_eq!(shape.shape_id(), 2);

        assert_eq!(
            slide.background().and_then(SlideBackground::solid_color),
            Some(RGBColor::new(44, 160, 44))
        );
        assert!(slide.heading().is_none());
    }
}
