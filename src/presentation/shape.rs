//! Shape types for slides.

use crate::common::{Length, RGBColor};
use serde::{Deserialize, Serialize};

use super::text::{Alignment, Paragraph, TextFrame, VerticalAnchor};

/// What a shape is on its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Free-standing text box
    TextBox,
    /// Title placeholder of the slide layout
    TitlePlaceholder,
    /// Body placeholder of the slide layout
    BodyPlaceholder,
}

/// A positioned shape carrying text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
    pub(crate) x: Length,
    pub(crate) y: Length,
    pub(crate) width: Length,
    pub(crate) height: Length,
    pub(crate) text_frame: TextFrame,
}

impl Shape {
    pub(crate) fn new(
        shape_id: u32,
        kind: ShapeKind,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
    ) -> Self {
        Self {
            shape_id,
            kind,
            x,
            y,
            width,
            height,
            text_frame: TextFrame::new(),
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Position of the top-left corner.
    pub fn position(&self) -> (Length, Length) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (Length, Length) {
        (self.width, self.height)
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    /// Replace the shape text with a single paragraph.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_frame.clear();
        self.text_frame.add_paragraph(Paragraph::new(text));
        self
    }

    /// Text of every paragraph joined with newlines.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    /// Builder method: set font size on every paragraph.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        for para in self.text_frame.paragraphs_mut() {
            para.format_mut().size = Some(size);
        }
        self
    }

    /// Builder method: set bold on every paragraph.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        for para in self.text_frame.paragraphs_mut() {
            para.format_mut().bold = Some(bold);
        }
        self
    }

    /// Builder method: set text color on every paragraph.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        for para in self.text_frame.paragraphs_mut() {
            para.format_mut().color = Some(color);
        }
        self
    }

    /// Builder method: center the text horizontally and vertically.
    pub fn centered(&mut self) -> &mut Self {
        for para in self.text_frame.paragraphs_mut() {
            para.set_alignment(Alignment::Center);
        }
        self.text_frame.set_anchor(VerticalAnchor::Middle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_box_formatting() {
        let mut shape = Shape::new(
            2,
            ShapeKind::TextBox,
            Length::from_inches(0.5),
            Length::from_inches(2.5),
            Length::from_inches(9.0),
            Length::from_inches(1.5),
        );
        shape
            .set_text("Quarterly")
            .font_size(54.0)
            .bold(true)
            .color(RGBColor::WHITE)
            .centered();

        let para = &shape.text_frame().paragraphs()[0];
        assert_eq!(shape.text(), "Quarterly");
        assert_eq!(para.font_size(), Some(54.0));
        assert_eq!(para.format().bold, Some(true));
        assert_eq!(para.alignment(), Some(Alignment::Center));
        assert_eq!(shape.text_frame().anchor(), VerticalAnchor::Middle);
        assert_eq!(shape.position().0.emus(), 457_200);
    }
}
