//! Builder styling and its YAML loader.

use crate::common::{Error, Length, RGBColor, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the builder does with a section it cannot render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedContentPolicy {
    /// Emit the heading with an empty body
    #[default]
    Skip,
    /// Fail the build with [`Error::UnsupportedContent`]
    Reject,
}

/// Position and size of a box, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    /// The box as `(x, y, width, height)` lengths.
    pub fn lengths(&self) -> (Length, Length, Length, Length) {
        (
            Length::from_inches(self.x),
            Length::from_inches(self.y),
            Length::from_inches(self.width),
            Length::from_inches(self.height),
        )
    }
}

/// Sizes and colors used by the deck builder.
///
/// Every field has a default, so a YAML file only needs the values it
/// overrides:
///
/// ```rust
/// use sheetdeck::deck::{DeckStyle, UnsupportedContentPolicy};
///
/// let style = DeckStyle::from_yaml_str("bullet_max_chars: 60\nunsupported: reject\n")?;
/// assert_eq!(style.bullet_max_chars, 60);
/// assert_eq!(style.unsupported, UnsupportedContentPolicy::Reject);
/// assert_eq!(style.title_font_size, 54.0);
/// # Ok::<(), sheetdeck::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckStyle {
    /// Canvas width in inches
    pub slide_width: f64,
    /// Canvas height in inches
    pub slide_height: f64,
    /// Title text box on the title slide
    pub title_box: BoxGeometry,
    /// Title font size in points
    pub title_font_size: f64,
    /// Title text color
    pub title_color: RGBColor,
    /// Content slide heading size in points
    pub heading_font_size: f64,
    /// Bullet line size in points
    pub bullet_font_size: f64,
    /// `key: value` line size in points
    pub key_value_font_size: f64,
    /// Bullet lines are cut to this many characters
    pub bullet_max_chars: usize,
    pub unsupported: UnsupportedContentPolicy,
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self {
            slide_width: 10.0,
            slide_height: 7.5,
            title_box: BoxGeometry {
                x: 0.5,
                y: 2.5,
                width: 9.0,
                height: 1.5,
            },
            title_font_size: 54.0,
            title_color: RGBColor::WHITE,
            heading_font_size: 44.0,
            bullet_font_size: 18.0,
            key_value_font_size: 16.0,
            bullet_max_chars: 100,
            unsupported: UnsupportedContentPolicy::Skip,
        }
    }
}

impl DeckStyle {
    /// Parse a style from YAML; missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse deck style: {}", e)))
    }

    /// Read and parse a YAML style file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Canvas as `(width, height)` lengths.
    pub fn canvas(&self) -> (Length, Length) {
        (
            Length::from_inches(self.slide_width),
            Length::from_inches(self.slide_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let style = DeckStyle::default();
        let (width, height) = style.canvas();
        assert_eq!(width.emus(), 9_144_000);
        assert_eq!(height.emus(), 6_858_000);
        assert_eq!(style.heading_font_size, 44.0);
        assert_eq!(style.bullet_font_size, 18.0);
        assert_eq!(style.key_value_font_size, 16.0);
        assert_eq!(style.unsupported, UnsupportedContentPolicy::Skip);
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = "title_font_size: 48.0\ntitle_color:\n  r: 0\n  g: 0\n  b: 0\ntitle_box:\n  x: 1.0\n  y: 2.0\n  width: 8.0\n  height: 2.0\n";
        let style = DeckStyle::from_yaml_str(yaml).unwrap();

        assert_eq!(style.title_font_size, 48.0);
        assert_eq!(style.title_color, RGBColor::BLACK);
        assert_eq!(style.title_box.lengths().0, Length::from_inches(1.0));
        assert_eq!(style.bullet_max_chars, 100);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = DeckStyle::from_yaml_str("bullet_max_chars: [not, a, number]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heading_font_size: 40.0").unwrap();

        let style = DeckStyle::from_yaml_file(file.path()).unwrap();
        assert_eq!(style.heading_font_size, 40.0);

        let err = DeckStyle::from_yaml_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
