//! Conversion of JSON documents into content mappings.
//!
//! Bullet and value texts are rendered the way a dynamically typed host
//! prints them: strings as-is, `true`/`false` as `True`/`False`, `null` as
//! `None`, and nested arrays and objects as `[1, 2]` and `{'k': 'v'}`, with
//! quoted strings inside.

use serde_json::Value;

use super::mapping::ContentMapping;
use super::section::SectionContent;
use crate::common::{Error, Result};

impl ContentMapping {
    /// Parse a JSON object into a content mapping, keeping document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetdeck::content::{ContentMapping, SectionContent};
    ///
    /// let content = ContentMapping::from_json_str(
    ///     r#"{"title": "x", "Overview": ["a", "b"], "Stats": {"Rows": 10}}"#,
    /// )?;
    ///
    /// assert_eq!(content.reserved_title(), Some("x"));
    /// assert_eq!(content.get("Overview"), Some(&SectionContent::bullets(["a", "b"])));
    /// assert_eq!(content.get("Stats"), Some(&SectionContent::key_values([("Rows", 10)])));
    /// # Ok::<(), sheetdeck::common::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Convert a JSON object into a content mapping.
    ///
    /// Arrays become bullet lists and objects become key/value lists. Other
    /// values are kept as [`SectionContent::Unsupported`].
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidContent(format!(
                "expected a JSON object, found {}",
                shape_name(value)
            )));
        };

        Ok(map
            .iter()
            .map(|(title, value)| (title.as_str(), section_from_json(value)))
            .collect())
    }
}

fn section_from_json(value: &Value) -> SectionContent {
    match value {
        Value::Array(items) => SectionContent::BulletList(items.iter().map(value_text).collect()),
        Value::Object(map) => SectionContent::KeyValueList(
            map.iter()
                .map(|(k, v)| (k.clone(), value_text(v)))
                .collect(),
        ),
        other => SectionContent::unsupported(shape_name(other), value_text(other)),
    }
}

/// Strings verbatim, everything else in its printed form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => repr(other),
    }
}

fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", items.join(", "))
        },
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        },
    }
}

// Single quotes unless the text holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            },
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_order_is_kept() {
        let content =
            ContentMapping::from_json_str(r#"{"Zeta": ["z"], "Alpha": ["a"], "Mid": {"b": 2, "a": 1}}"#)
                .unwrap();

        let titles: Vec<&str> = content.sections().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(
            content.get("Mid"),
            Some(&SectionContent::KeyValueList(vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ]))
        );
    }

    #[test]
    fn test_value_rendering() {
        let content = ContentMapping::from_json_value(&json!({
            "Items": ["text", 3, 1.5, true, null, [1, 2]],
            "Flags": {"ok": false, "name": "n", "nested": {"k": "v", "n": null}},
            "Count": 7
        }))
        .unwrap();

        assert_eq!(
            content.get("Items"),
            Some(&SectionContent::bullets(["text", "3", "1.5", "True", "None", "[1, 2]"]))
        );
        assert_eq!(
            content.get("Flags"),
            Some(&SectionContent::key_values([
                ("ok", "False"),
                ("name", "n"),
                ("nested", "{'k': 'v', 'n': None}"),
            ]))
        );
        assert_eq!(content.get("Count"), Some(&SectionContent::unsupported("number", "7")));
    }

    #[test]
    fn test_nested_strings_are_quoted() {
        assert_eq!(value_text(&json!(["a", "it's", "say \"hi\""])), r#"['a', "it's", 'say "hi"']"#);
        assert_eq!(value_text(&json!(["a\nb", "back\\slash"])), r"['a\nb', 'back\\slash']");
        assert_eq!(value_text(&json!("plain 'text'")), "plain 'text'");
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = ContentMapping::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidContent(ref msg) if msg.contains("array")));

        let err = ContentMapping::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
