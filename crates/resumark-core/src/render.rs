//! Single-pass block renderer.
//!
//! Scans the document line by line, classifies each line and writes HTML
//! into whichever destination is active: the open section, if any, else
//! the top-level output. All scanning state lives in one [`Renderer`] for
//! the duration of a call; nothing is retained between calls.

use crate::block::{classify, slugify, Block, HeadingLevel};
use crate::inline::format_inline;
use crate::lexer::Lexer;

/// Render a document to an HTML fragment.
///
/// Never fails. Empty or blank-only input renders to an empty string.
///
/// ```rust
/// let html = resumark_core::render("## Skills\n- Rust");
/// assert_eq!(
///     html,
///     "<section class=\"resume__section resume__section--skills\">\
///      <h2 class=\"resume__heading resume__heading--section\">Skills</h2>\
///      <ul class=\"resume__list\"><li class=\"resume__list-item\">Rust</li></ul>\
///      </section>"
/// );
/// ```
pub fn render(markdown: &str) -> String {
    render_with_stats(markdown).html
}

/// Render a document and report what the scan produced.
pub fn render_with_stats(markdown: &str) -> Rendered {
    let mut renderer = Renderer::new(markdown.len());
    for line in Lexer::new(markdown) {
        renderer.stats.lines += 1;
        renderer.push(classify(line.text));
    }
    renderer.finish()
}

/// Output of [`render_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The HTML fragment.
    pub html: String,
    /// Counts gathered during the scan.
    pub stats: RenderStats,
}

/// Structural counts for one rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Lines scanned, blank ones included.
    pub lines: usize,
    /// Headings per level, index 0 is level 1.
    pub headings: [usize; 3],
    /// Sections emitted, anonymous ones included.
    pub sections: usize,
    /// `<ul>` containers emitted.
    pub lists: usize,
    /// `<li>` items emitted.
    pub list_items: usize,
    /// Paragraphs emitted.
    pub paragraphs: usize,
}

/// An open `<section>` accumulating its children.
#[derive(Debug)]
struct Section {
    /// Empty for sections opened by a stray level-3 heading, or when the
    /// heading text has no slug-able characters.
    slug: String,
    body: String,
}

impl Section {
    fn new(slug: String, heading_markup: String) -> Self {
        Self {
            slug,
            body: heading_markup,
        }
    }

    fn write_into(self, out: &mut String) {
        out.push_str(r#"<section class="resume__section"#);
        if !self.slug.is_empty() {
            out.push_str(" resume__section--");
            out.push_str(&self.slug);
        }
        out.push_str(r#"">"#);
        out.push_str(&self.body);
        out.push_str("</section>");
    }
}

struct Renderer {
    output: String,
    section: Option<Section>,
    list_open: bool,
    stats: RenderStats,
}

impl Renderer {
    fn new(capacity_hint: usize) -> Self {
        Self {
            output: String::with_capacity(capacity_hint * 2),
            section: None,
            list_open: false,
            stats: RenderStats::default(),
        }
    }

    /// Where non-heading content goes: the open section, else top level.
    #[inline]
    fn destination(&mut self) -> &mut String {
        match self.section.as_mut() {
            Some(section) => &mut section.body,
            None => &mut self.output,
        }
    }

    fn push(&mut self, block: Block<'_>) {
        match block {
            Block::Blank => self.close_list(),
            Block::Heading { level, text } => self.push_heading(level, text),
            Block::ListItem(text) => {
                if !self.list_open {
                    self.destination().push_str(r#"<ul class="resume__list">"#);
                    self.list_open = true;
                    self.stats.lists += 1;
                }
                let item = format!(
                    r#"<li class="resume__list-item">{}</li>"#,
                    format_inline(text)
                );
                self.destination().push_str(&item);
                self.stats.list_items += 1;
            }
            Block::Paragraph(text) => {
                self.close_list();
                let paragraph = format!(
                    r#"<p class="resume__paragraph">{}</p>"#,
                    format_inline(text)
                );
                self.destination().push_str(&paragraph);
                self.stats.paragraphs += 1;
            }
        }
    }

    fn push_heading(&mut self, level: HeadingLevel, text: &str) {
        self.close_list();
        self.stats.headings[usize::from(level.level() - 1)] += 1;
        let content = format_inline(text);

        match level {
            HeadingLevel::Name => {
                self.close_section();
                self.output.push_str(&format!(
                    r#"<h1 class="resume__heading resume__heading--name">{content}</h1>"#
                ));
            }
            HeadingLevel::Section => {
                self.close_section();
                let slug = slugify(text);
                tracing::trace!(slug = %slug, "opening section");
                self.section = Some(Section::new(
                    slug,
                    format!(r#"<h2 class="resume__heading resume__heading--section">{content}</h2>"#),
                ));
                self.stats.sections += 1;
            }
            HeadingLevel::Item => {
                let markup =
                    format!(r#"<h3 class="resume__heading resume__heading--item">{content}</h3>"#);
                match self.section.as_mut() {
                    Some(section) => section.body.push_str(&markup),
                    None => {
                        tracing::trace!("item heading outside a section, opening anonymous section");
                        self.section = Some(Section::new(String::new(), markup));
                        self.stats.sections += 1;
                    }
                }
            }
        }
    }

    fn close_list(&mut self) {
        if self.list_open {
            self.destination().push_str("</ul>");
            self.list_open = false;
        }
    }

    fn close_section(&mut self) {
        if let Some(section) = self.section.take() {
            tracing::trace!(slug = %section.slug, "closing section");
            section.write_into(&mut self.output);
        }
    }

    fn finish(mut self) -> Rendered {
        self.close_list();
        self.close_section();
        Rendered {
            html: self.output,
            stats: self.stats,
        }
    }
}
