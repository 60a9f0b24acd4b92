//! Deck content from a hosted completion API.
//!
//! The crate does not talk to any API itself. Callers own a client, implement
//! [`CompletionClient`] for it and pass it by reference wherever content
//! should be generated; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use sheetdeck::completion::CompletionClient;
//! use sheetdeck::common::Result;
//! use sheetdeck::deck::{DeckSpec, ThemeColor};
//!
//! struct Canned;
//!
//! impl CompletionClient for Canned {
//!     fn complete(&self, _request: &str) -> Result<String> {
//!         Ok(r#"{"title": "Sales Review", "Highlights": ["Revenue up"]}"#.to_string())
//!     }
//! }
//!
//! let spec = DeckSpec::from_completion(&Canned, "summarise", "Data Report", ThemeColor::Blue)?;
//! assert_eq!(spec.title(), "Sales Review");
//! assert_eq!(spec.content().section_count(), 1);
//! # Ok::<(), sheetdeck::common::Error>(())
//! ```

use tracing::debug;

use crate::common::{RGBColor, Result};
use crate::content::ContentMapping;
use crate::deck::DeckSpec;

/// A handle to a text completion service.
pub trait CompletionClient {
    /// Send `request` and return the reply text.
    fn complete(&self, request: &str) -> Result<String>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &str) -> Result<String> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &str) -> Result<String> {
        (**self).complete(request)
    }
}

/// Strip a surrounding Markdown code fence, if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.split_once('\n') {
        // Drop the info string ("json") on the opening line.
        Some((_, body)) => body,
        // Single-line fence: the info string runs up to the payload.
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a completion reply into a content mapping.
pub fn content_from_reply(reply: &str) -> Result<ContentMapping> {
    ContentMapping::from_json_str(strip_code_fence(reply))
}

impl DeckSpec {
    /// Ask `client` for deck content and wrap the reply in a spec.
    ///
    /// A string `"title"` entry in the reply becomes the deck title;
    /// otherwise `fallback_title` is used.
    pub fn from_completion<C: CompletionClient + ?Sized>(
        client: &C,
        request: &str,
        fallback_title: &str,
        theme_color: impl Into<RGBColor>,
    ) -> Result<Self> {
        let reply = client.complete(request)?;
        debug!(bytes = reply.len(), "received completion reply");

        let content = content_from_reply(&reply)?;
        let title = content
            .reserved_title()
            .unwrap_or(fallback_title)
            .to_string();
        Ok(Self::new(title, theme_color, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Error, RGBColor};
    use crate::content::SectionContent;
    use crate::deck::build;
    use std::cell::RefCell;

    struct Recording {
        reply: String,
        requests: RefCell<Vec<String>>,
    }

    impl CompletionClient for Recording {
        fn complete(&self, request: &str) -> Result<String> {
            self.requests.borrow_mut().push(request.to_string());
            Ok(self.reply.clone())
        }
    }

    struct Failing;

    impl CompletionClient for Failing {
        fn complete(&self, _request: &str) -> Result<String> {
            Err(Error::Completion("rate limited".to_string()))
        }
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": [1]}\n```"), "{\"a\": [1]}");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fence("```{\"a\": [1]}```"), "{\"a\": [1]}");
        assert_eq!(strip_code_fence("```json {\"a\": [1]}```"), "{\"a\": [1]}");
        assert_eq!(strip_code_fence("  {\"a\": []} "), "{\"a\": []}");
    }

    #[test]
    fn test_reply_title_is_used() {
        let client = Recording {
            reply: "```json\n{\"title\": \"Q3\", \"Overview\": [\"a\", \"b\"], \"Stats\": {\"Rows\": 10}}\n```".to_string(),
            requests: RefCell::new(Vec::new()),
        };
        let spec = DeckSpec::from_completion(&client, "make slides", "Fallback", RGBColor::new(31, 119, 180)).unwrap();

        assert_eq!(client.requests.borrow().as_slice(), ["make slides"]);
        assert_eq!(spec.title(), "Q3");

        let pres = build(&spec);
        assert_eq!(pres.slide_count(), 3);
        assert_eq!(pres.slides()[0].text(), "Q3");
        assert_eq!(pres.slides()[2].body_lines(), vec!["Rows: 10"]);
    }

    #[test]
    fn test_fallback_title() {
        let client = Recording {
            reply: r#"{"title": ["not", "text"], "Notes": ["n"]}"#.to_string(),
            requests: RefCell::new(Vec::new()),
        };
        let boxed: Box<dyn CompletionClient> = Box::new(client);
        let spec = DeckSpec::from_completion(&boxed, "", "Fallback", RGBColor::BLACK).unwrap();

        assert_eq!(spec.title(), "Fallback");
        assert_eq!(spec.content().get("Notes"), Some(&SectionContent::bullets(["n"])));
        assert_eq!(build(&spec).slide_count(), 2);
    }

    #[test]
    fn test_client_error_propagates() {
        let err = DeckSpec::from_completion(&Failing, "x", "T", RGBColor::BLACK).unwrap_err();
        assert!(matches!(err, Error::Completion(_)));
    }

    #[test]
    fn test_single_line_fenced_reply() {
        let content = content_from_reply("```{\"A\": [\"a\"]}```").unwrap();
        assert_eq!(content.get("A"), Some(&SectionContent::bullets(["a"])));

        let content = content_from_reply("```json{\"A\": {\"k\": \"v\"}}```").unwrap();
        assert_eq!(content.get("A"), Some(&SectionContent::key_values([("k", "v")])));
    }

    #[test]
    fn test_non_json_reply() {
        assert!(matches!(content_from_reply("Sorry, I can't help"), Err(Error::Json(_))));
    }
}
