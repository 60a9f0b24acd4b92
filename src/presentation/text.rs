//! Text frames, paragraphs and character formatting.

use crate::common::RGBColor;
use serde::{Deserialize, Serialize};

/// Text formatting properties for a paragraph's runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical anchoring of text inside its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A single paragraph of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    text: String,
    alignment: Option<Alignment>,
    format: TextFormat,
}

impl Paragraph {
    /// Create an unformatted paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: None,
            format: TextFormat::default(),
        }
    }

    /// Paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Explicit alignment, `None` when inherited from the layout.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Font size in points, if set.
    pub fn font_size(&self) -> Option<f64> {
        self.format.size
    }

    /// Builder method: set font size in points.
    pub fn with_size(mut self, size: f64) -> Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set text color.
    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.format.color = Some(color);
        self
    }

    /// Builder method: set alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = Some(alignment);
    }

    pub(crate) fn format_mut(&mut self) -> &mut TextFormat {
        &mut self.format
    }
}

/// The text body of a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    anchor: VerticalAnchor,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text frame holding one paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(text)],
            anchor: VerticalAnchor::default(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub(crate) fn paragraphs_mut(&mut self) -> &mut Vec<Paragraph> {
        &mut self.paragraphs
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(paragraph);
        &mut self.paragraphs[index]
    }

    /// Remove all paragraphs.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
    }

    pub fn anchor(&self) -> VerticalAnchor {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: VerticalAnchor) {
        self.anchor = anchor;
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_builders() {
        let para = Paragraph::new("Report")
            .with_size(54.0)
            .with_bold(true)
            .with_color(RGBColor::WHITE)
            .with_alignment(Alignment::Center);

        assert_eq!(para.text(), "Report");
        assert_eq!(para.font_size(), Some(54.0));
        assert_eq!(para.format().bold, Some(true));
        assert_eq!(para.format().color, Some(RGBColor::WHITE));
        assert_eq!(para.alignment(), Some(Alignment::Center));
        assert_eq!(
            para.format(),
            &TextFormat {
                size: Some(54.0),
                bold: Some(true),
                color: Some(RGBColor::WHITE),
            }
        );
    }

    #[test]
    fn test_text_frame_text() {
        let mut frame = TextFrame::with_text("a");
        frame.add_paragraph(Paragraph::new("b"));
        assert_eq!(frame.text(), "a\nb");

        frame.clear();
        assert!(frame.paragraphs().is_empty());
        assert_eq!(frame.anchor(), VerticalAnchor::Top);
    }
}
