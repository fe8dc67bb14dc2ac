//! Display state for a resume container.
//!
//! A page embeds the rendered fragment in a container element. Whoever
//! fetches the document decides between three states: the rendered
//! resume, an "unavailable" notice when the document renders to nothing,
//! and an error notice when the document could not be obtained at all.

use std::fmt::Display;

use crate::render::render;

/// Placeholder shown when the document renders to an empty fragment.
pub const UNAVAILABLE_MARKUP: &str =
    r#"<p class="resume__status">Resume is currently unavailable.</p>"#;

/// Placeholder shown when the document could not be loaded.
pub const FAILED_MARKUP: &str = r#"<p class="resume__status resume__status--error">Unable to load resume. Please refresh to try again.</p>"#;

/// What a resume container should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeView {
    /// A non-empty rendered fragment.
    Rendered(String),
    /// The document loaded but produced no markup.
    Unavailable,
    /// The document could not be loaded.
    Failed,
}

impl ResumeView {
    /// Render a loaded document.
    pub fn from_markdown(markdown: &str) -> Self {
        let html = render(markdown);
        if html.is_empty() {
            Self::Unavailable
        } else {
            Self::Rendered(html)
        }
    }

    /// Resolve the outcome of loading a document.
    ///
    /// The error itself is only logged; it never reaches the markup.
    pub fn from_source<E: Display>(source: Result<String, E>) -> Self {
        match source {
            Ok(markdown) => Self::from_markdown(&markdown),
            Err(err) => {
                tracing::warn!(error = %err, "resume source unavailable, showing fallback");
                Self::Failed
            }
        }
    }

    /// Markup to place inside the container.
    pub fn markup(&self) -> &str {
        match self {
            Self::Rendered(html) => html,
            Self::Unavailable => UNAVAILABLE_MARKUP,
            Self::Failed => FAILED_MARKUP,
        }
    }

    /// Whether the container should carry the error modifier.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Class attribute value for the container element.
    pub fn container_class(&self) -> &'static str {
        if self.is_error() {
            "resume resume--error"
        } else {
            "resume"
        }
    }

    /// The markup wrapped in its container element.
    pub fn wrap(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            self.container_class(),
            self.markup()
        )
    }

    /// Short state name, used in machine-readable output.
    pub fn state(&self) -> &'static str {
        match self {
            Self::Rendered(_) => "rendered",
            Self::Unavailable => "unavailable",
            Self::Failed => "failed",
        }
    }
}
