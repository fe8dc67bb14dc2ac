//! Inline formatting with HTML escaping.
//!
//! Raw text is escaped first, then a fixed sequence of rewrite passes
//! reintroduces a small whitelist of markup:
//!
//! 1. escape `& < > " '`
//! 2. `[label](url)` links, restricted to `http`, `https` and `mailto`
//! 3. `**bold**`
//! 4. `*italic*`
//! 5. `` `code` ``
//!
//! An accepted link is parked behind a `<N>` token while the span passes
//! run, so its URL and label are never reformatted but markers wrapping it
//! still pair up. Escaped text contains no raw `<`, so tokens cannot be
//! forged by input. A rejected link leaves its label behind as ordinary
//! text. Only the passes themselves emit unescaped `<`, `>` or `"`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static STRONG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());
static ANCHOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\d+)>").unwrap());
static WEB_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());
static MAILTO_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^mailto:").unwrap());

/// Link targets the formatter is willing to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    /// `http://` or `https://`. Opens in a new tab without an opener reference.
    Web,
    /// `mailto:`.
    Mailto,
}

impl LinkScheme {
    /// Detect the scheme of an already trimmed URL.
    ///
    /// Returns `None` for anything outside the allowlist, including relative
    /// paths, `javascript:` and `data:` URLs.
    pub fn detect(url: &str) -> Option<Self> {
        if WEB_SCHEME.is_match(url) {
            Some(Self::Web)
        } else if MAILTO_SCHEME.is_match(url) {
            Some(Self::Mailto)
        } else {
            None
        }
    }

    /// Extra anchor attributes for this scheme, with a leading space.
    #[inline]
    fn anchor_attrs(self) -> &'static str {
        match self {
            Self::Web => r#" target="_blank" rel="noopener noreferrer""#,
            Self::Mailto => "",
        }
    }
}

/// A `[label](url)` span found in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef<'a> {
    /// Trimmed label text.
    pub label: &'a str,
    /// Trimmed link target.
    pub url: &'a str,
    /// Detected scheme, `None` when the link will be rendered as plain text.
    pub scheme: Option<LinkScheme>,
}

impl LinkRef<'_> {
    /// Whether the formatter keeps this link as an anchor.
    #[inline]
    pub fn is_allowed(&self) -> bool {
        self.scheme.is_some()
    }
}

/// Find every link span in raw (unescaped) text.
pub fn links(text: &str) -> impl Iterator<Item = LinkRef<'_>> {
    LINK_PATTERN.captures_iter(text).map(|caps| {
        let label = caps.get(1).map_or("", |m| m.as_str()).trim();
        let url = caps.get(2).map_or("", |m| m.as_str()).trim();
        LinkRef {
            label,
            url,
            scheme: LinkScheme::detect(url),
        }
    })
}

/// Escape the five HTML-significant characters.
///
/// Borrows the input when it contains none of them.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render one line of raw text as an HTML-safe span.
///
/// ```rust
/// use resumark_core::inline::format_inline;
///
/// assert_eq!(
///     format_inline("Built **x** with <tools>"),
///     "Built <strong>x</strong> with &lt;tools&gt;"
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let mut anchors: Vec<String> = Vec::new();

    let linked = LINK_PATTERN.replace_all(&escaped, |caps: &Captures<'_>| {
        let label = caps[1].trim();
        let url = caps[2].trim();
        match LinkScheme::detect(url) {
            Some(scheme) => {
                anchors.push(anchor(label, url, scheme));
                format!("<{}>", anchors.len() - 1)
            }
            None => {
                tracing::debug!(url, "dropping link with disallowed scheme");
                label.to_string()
            }
        }
    });

    let strong = STRONG_PATTERN.replace_all(&linked, "<strong>${1}</strong>");
    let emphasis = EMPHASIS_PATTERN.replace_all(&strong, "<em>${1}</em>");
    let code = CODE_PATTERN.replace_all(&emphasis, "<code>${1}</code>");

    if anchors.is_empty() {
        return code.into_owned();
    }
    ANCHOR_TOKEN
        .replace_all(&code, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| anchors.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Markup for an accepted link.
///
/// Label and URL come from already escaped text: the URL is attribute-safe
/// as is and the label must not be escaped a second time.
fn anchor(label: &str, url: &str, scheme: LinkScheme) -> String {
    format!(
        r#"<a class="resume__link" href="{url}"{attrs}>{label}</a>"#,
        attrs = scheme.anchor_attrs()
    )
}
