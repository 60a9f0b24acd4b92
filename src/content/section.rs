use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The body of one section.
///
/// Sequences render as one bullet line per item and mappings as one
/// `key: value` line per entry. Anything else is kept as `Unsupported` so the
/// builder can decide whether to skip or reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionContent {
    /// Ordered items, one line each
    BulletList(Vec<String>),
    /// Ordered key/value pairs rendered as `key: value`
    KeyValueList(Vec<(String, String)>),
    /// A value of some other shape
    Unsupported {
        /// Short name of the value's shape, e.g. `"number"`
        shape: String,
        /// Text of the value
        text: String,
    },
}

impl SectionContent {
    /// Build a bullet list from anything displayable.
    pub fn bullets<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Self::BulletList(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// Build a key/value list, rendering values with their `Display` form.
    pub fn key_values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        Self::KeyValueList(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Mark a value the builder has no rendering for.
    pub fn unsupported(shape: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Unsupported {
            shape: shape.into(),
            text: text.into(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    /// Number of lines this section renders to.
    pub fn line_count(&self) -> usize {
        match self {
            Self::BulletList(items) => items.len(),
            Self::KeyValueList(pairs) => pairs.len(),
            Self::Unsupported { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_values_use_display() {
        let section = SectionContent::key_values([("Rows", 10.to_string()), ("Ratio", 0.5.to_string())]);
        assert_eq!(
            section,
            SectionContent::KeyValueList(vec![
                ("Rows".to_string(), "10".to_string()),
                ("Ratio".to_string(), "0.5".to_string()),
            ])
        );
        assert_eq!(section.line_count(), 2);
    }

    #[test]
    fn test_unsupported_has_no_lines() {
        let section = SectionContent::unsupported("number", "42");
        assert!(!section.is_supported());
        assert_eq!(section.line_count(), 0);
        assert!(SectionContent::bullets(Vec::<String>::new()).is_supported());
    }
}
