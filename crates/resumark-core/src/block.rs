//! Line classification.
//!
//! Every line of a document is exactly one [`Block`]. Classification looks
//! only at the start of the line: no indentation is tolerated before a
//! heading marker or a list dash.

/// Heading depth, one variant per supported `#` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    /// `#` - the document owner's name.
    Name,
    /// `##` - opens a new section.
    Section,
    /// `###` - an entry inside a section.
    Item,
}

impl HeadingLevel {
    /// Map a run of `#` characters to a level.
    #[inline]
    pub fn from_marker_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Name),
            2 => Some(Self::Section),
            3 => Some(Self::Item),
            _ => None,
        }
    }

    /// Numeric heading level (1-3).
    #[inline]
    pub const fn level(self) -> u8 {
        match self {
            Self::Name => 1,
            Self::Section => 2,
            Self::Item => 3,
        }
    }
}

/// A classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`, `##` or `###` followed by whitespace. `text` is trimmed.
    Heading { level: HeadingLevel, text: &'a str },
    /// `-` followed by whitespace. The item text is trimmed.
    ListItem(&'a str),
    /// Any other non-blank line, leading whitespace kept.
    Paragraph(&'a str),
    /// Empty or whitespace-only line.
    Blank,
}

/// Classify a single line.
///
/// Trailing whitespace is ignored. Total over all inputs: a line that is
/// not blank, a heading, or a list item is a paragraph.
pub fn classify(line: &str) -> Block<'_> {
    let line = line.trim_end();
    if line.is_empty() {
        return Block::Blank;
    }

    let bytes = line.as_bytes();
    match bytes[0] {
        b'#' => {
            let marker_len = bytes.iter().take_while(|&&b| b == b'#').count();
            if let Some(level) = HeadingLevel::from_marker_len(marker_len) {
                if let Some(text) = after_marker(&line[marker_len..]) {
                    return Block::Heading { level, text };
                }
            }
        }
        b'-' => {
            if let Some(text) = after_marker(&line[1..]) {
                return Block::ListItem(text);
            }
        }
        _ => {}
    }

    Block::Paragraph(line)
}

/// The marker must be followed by at least one whitespace character.
#[inline]
fn after_marker(rest: &str) -> Option<&str> {
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Derive a CSS-safe slug from raw heading text.
///
/// Lowercases, keeps only ASCII letters, digits, whitespace and `-`, trims,
/// then joins the remaining words with single hyphens. Returns an empty
/// string when nothing survives.
///
/// ```rust
/// use resumark_core::block::slugify;
///
/// assert_eq!(slugify("Work & Experience!"), "work-experience");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}
