//! Deck builder: content mapping in, presentation out.

use tracing::{debug, warn};

use crate::common::{Error, Result};
use crate::content::SectionContent;
use crate::presentation::{Paragraph, Presentation, SlideBackground, SlideLayout};

use super::spec::DeckSpec;
use super::style::{DeckStyle, UnsupportedContentPolicy};

/// Builds presentations from deck specs.
///
/// The builder holds no state besides its style, so one instance can serve
/// any number of builds, from any thread.
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    style: DeckStyle,
}

impl DeckBuilder {
    /// Create a builder with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: DeckStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &DeckStyle {
        &self.style
    }

    /// Build a presentation: one title slide, then one content slide per
    /// section in insertion order.
    ///
    /// Only fails when the style's policy is
    /// [`Reject`](UnsupportedContentPolicy::Reject) and a section holds
    /// unsupported content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetdeck::common::RGBColor;
    /// use sheetdeck::content::{ContentMapping, SectionContent};
    /// use sheetdeck::deck::{DeckBuilder, DeckSpec, DeckStyle, UnsupportedContentPolicy};
    ///
    /// let content = ContentMapping::new().with("Count", SectionContent::unsupported("number", "7"));
    /// let spec = DeckSpec::new("Report", RGBColor::new(31, 119, 180), content);
    ///
    /// // Default policy: the section gets a heading and an empty body.
    /// let pres = DeckBuilder::new().build(&spec)?;
    /// assert!(pres.slides()[1].body_lines().is_empty());
    ///
    /// let strict = DeckStyle { unsupported: UnsupportedContentPolicy::Reject, ..DeckStyle::default() };
    /// assert!(DeckBuilder::with_style(strict).build(&spec).is_err());
    /// # Ok::<(), sheetdeck::common::Error>(())
    /// ```
    pub fn build(&self, spec: &DeckSpec) -> Result<Presentation> {
        if self.style.unsupported == UnsupportedContentPolicy::Reject {
            if let Some((section, SectionContent::Unsupported { shape, .. })) = spec
                .content()
                .sections()
                .find(|(_, content)| !content.is_supported())
            {
                return Err(Error::UnsupportedContent {
                    section: section.to_string(),
                    shape: shape.clone(),
                });
            }
        }

        Ok(self.render(spec))
    }

    fn render(&self, spec: &DeckSpec) -> Presentation {
        debug!(
            title = spec.title(),
            sections = spec.content().section_count(),
            "building deck"
        );

        let (width, height) = self.style.canvas();
        let mut pres = Presentation::with_size(width, height);

        self.add_title_slide(&mut pres, spec);
        for (section, content) in spec.content().sections() {
            self.add_content_slide(&mut pres, section, content);
        }

        debug!(slides = pres.slide_count(), "deck built");
        pres
    }

    fn add_title_slide(&self, pres: &mut Presentation, spec: &DeckSpec) {
        let style = &self.style;
        let slide = pres.add_slide(SlideLayout::Blank);
        slide.set_background(SlideBackground::solid(spec.theme_color()));

        let (x, y, width, height) = style.title_box.lengths();
        slide
            .add_text_box(spec.title(), x, y, width, height)
            .font_size(style.title_font_size)
            .bold(true)
            .color(style.title_color)
            .centered();
    }

    fn add_content_slide(&self, pres: &mut Presentation, section: &str, content: &SectionContent) {
        let style = &self.style;
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        slide.set_heading(section).font_size(style.heading_font_size);

        let body = slide.body_mut().text_frame_mut();
        body.clear();

        match content {
            SectionContent::BulletList(items) => {
                for item in items {
                    let line = truncate_chars(item, style.bullet_max_chars);
                    body.add_paragraph(Paragraph::new(line).with_size(style.bullet_font_size));
                }
            },
            SectionContent::KeyValueList(pairs) => {
                for (key, value) in pairs {
                    body.add_paragraph(
                        Paragraph::new(format!("{}: {}", key, value))
                            .with_size(style.key_value_font_size),
                    );
                }
            },
            SectionContent::Unsupported { shape, .. } => {
                warn!(section, shape = shape.as_str(), "skipping unsupported section content");
            },
        }
    }
}

/// Build with the default style.
///
/// The default style skips unsupported sections, so this never fails.
pub fn build(spec: &DeckSpec) -> Presentation {
    DeckBuilder::new().render(spec)
}

/// First `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
