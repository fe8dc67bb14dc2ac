//! # resumark core
//!
//! Renders a small markdown dialect into sanitized HTML fragments for
//! embedding in a resume page.
//!
//! The dialect covers `#`/`##`/`###` headings, paragraphs, flat `-` lists,
//! and `**bold**`, `*italic*`, `` `code` `` and `[label](url)` inline spans.
//! All literal text is HTML-escaped, and links are limited to `http`,
//! `https` and `mailto` targets.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = resumark_core::render("# Jane Doe\n\nHello <world>");
//! assert_eq!(
//!     html,
//!     "<h1 class=\"resume__heading resume__heading--name\">Jane Doe</h1>\
//!      <p class=\"resume__paragraph\">Hello &lt;world&gt;</p>"
//! );
//! ```
//!
//! ## Sections
//!
//! Every `##` heading opens a `<section>` that collects the content below
//! it until the next `#` or `##` heading. The section carries a slug class
//! derived from the heading text:
//!
//! ```rust
//! let html = resumark_core::render("## Work & Experience!");
//! assert!(html.starts_with(
//!     "<section class=\"resume__section resume__section--work-experience\">"
//! ));
//! ```
//!
//! Rendering never fails; malformed input degrades to paragraphs.

pub mod block;
pub mod inline;
pub mod lexer;
pub mod render;
pub mod view;

pub use block::{Block, HeadingLevel};
pub use render::{render, render_with_stats, RenderStats, Rendered};
pub use view::ResumeView;
