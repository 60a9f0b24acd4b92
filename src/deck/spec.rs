use crate::common::RGBColor;
use crate::content::ContentMapping;
use serde::{Deserialize, Serialize};

use super::theme::ThemeColor;

/// Everything needed to build one presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    title: String,
    theme_color: RGBColor,
    content: ContentMapping,
}

impl DeckSpec {
    pub fn new(
        title: impl Into<String>,
        theme_color: impl Into<RGBColor>,
        content: ContentMapping,
    ) -> Self {
        Self {
            title: title.into(),
            theme_color: theme_color.into(),
            content,
        }
    }

    /// Create a spec using a palette color.
    pub fn with_theme(title: impl Into<String>, theme: ThemeColor, content: ContentMapping) -> Self {
        Self::new(title, theme.rgb(), content)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme_color(&self) -> RGBColor {
        self.theme_color
    }

    pub fn content(&self) -> &ContentMapping {
        &self.content
    }

    /// Download name for the generated deck: spaces become underscores.
    pub fn file_name(&self) -> String {
        format!("{}.pptx", self.title.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let spec = DeckSpec::new("Analysis Report Q3", RGBColor::new(31, 119, 180), ContentMapping::new());
        assert_eq!(spec.file_name(), "Analysis_Report_Q3.pptx");
        assert_eq!(spec.theme_color(), RGBColor::new(31, 119, 180));
    }

    #[test]
    fn test_with_theme() {
        let spec = DeckSpec::with_theme("Data Report", ThemeColor::Green, ContentMapping::new());
        assert_eq!(spec.theme_color(), ThemeColor::Green.rgb());
        assert_eq!(spec.title(), "Data Report");
        assert!(spec.content().is_empty());
    }
}
