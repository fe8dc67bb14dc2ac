//! Line splitter for the block scanner.
//!
//! The lexer walks the document one line at a time using `memchr` for
//! newline detection. Lines borrow from the input; CRLF endings and any
//! trailing whitespace are stripped before a line is handed out.

use memchr::memchr;

/// A single line of the document, trailing whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text. Never contains `\n`.
    pub text: &'a str,
    /// 1-based line number in the original input.
    pub number: usize,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterator over the lines of a document.
///
/// A final segment without a trailing newline is still yielded; an empty
/// input yields nothing.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    number: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let rest = &self.input.as_bytes()[start..];
        let end = match memchr(b'\n', rest) {
            Some(pos) => start + pos,
            None => self.input.len(),
        };

        // `\n` is ASCII, so both `end` and `end + 1` are char boundaries.
        self.offset = if end < self.input.len() { end + 1 } else { end };
        self.number += 1;

        Some(Line {
            text: self.input[start..end].trim_end(),
            number: self.number,
        })
    }
}
