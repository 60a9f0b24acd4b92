use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use super::section::SectionContent;

/// Key reserved for the deck title; never rendered as a content slide.
pub const RESERVED_TITLE_KEY: &str = "title";

/// Ordered mapping from section title to section content.
///
/// Re-inserting an existing title replaces its content but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMapping {
    entries: IndexMap<String, SectionContent>,
}

impl ContentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, returning the content it replaced.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        content: SectionContent,
    ) -> Option<SectionContent> {
        self.entries.insert(title.into(), content)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, title: impl Into<String>, content: SectionContent) -> Self {
        self.insert(title, content);
        self
    }

    pub fn get(&self, title: &str) -> Option<&SectionContent> {
        self.entries.get(title)
    }

    /// Every entry in insertion order, including the reserved title entry.
    pub fn iter(&self) -> Iter<'_, String, SectionContent> {
        self.entries.iter()
    }

    /// Entries that become content slides, in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionContent)> {
        self.entries
            .iter()
            .filter(|(title, _)| title.as_str() != RESERVED_TITLE_KEY)
            .map(|(title, content)| (title.as_str(), content))
    }

    /// Number of entries that become content slides.
    pub fn section_count(&self) -> usize {
        self.sections().count()
    }

    /// Text stored under the reserved title key, if it holds a plain string.
    pub fn reserved_title(&self) -> Option<&str> {
        match self.entries.get(RESERVED_TITLE_KEY) {
            Some(SectionContent::Unsupported { shape, text }) if shape == "string" => {
                Some(text.as_str())
            },
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SectionContent)> for ContentMapping {
    fn from_iter<T: IntoIterator<Item = (K, SectionContent)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContentMapping {
    type Item = (&'a String, &'a SectionContent);
    type IntoIter = Iter<'a, String, SectionContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_skip_reserved_title() {
        let content = ContentMapping::new()
            .with("title", SectionContent::unsupported("string", "x"))
            .with("Overview", SectionContent::bullets(["a"]))
            .with("Stats", SectionContent::key_values([("Rows", 1)]));

        assert_eq!(content.len(), 3);
        assert_eq!(content.section_count(), 2);
        assert_eq!(content.reserved_title(), Some("x"));
        let titles: Vec<&str> = content.sections().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["Overview", "Stats"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut content: ContentMapping = [
            ("A", SectionContent::bullets(["1"])),
            ("B", SectionContent::bullets(["2"])),
        ]
        .into_iter()
        .collect();

        let old = content.insert("A", SectionContent::bullets(["3"]));
        assert_eq!(old, Some(SectionContent::bullets(["1"])));

        let titles: Vec<&String> = content.iter().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(content.get("A"), Some(&SectionContent::bullets(["3"])));
    }

    #[test]
    fn test_reserved_title_requires_string() {
        let content = ContentMapping::new().with("title", SectionContent::bullets(["x"]));
        assert_eq!(content.reserved_title(), None);
        assert_eq!(content.section_count(), 0);
        assert!(!content.is_empty());
    }
}
