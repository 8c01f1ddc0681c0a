//! Literal text search.
//!
//! Searches a UTF-8 `&str` and reports **character offsets** (not byte offsets). The needle
//! is always matched literally: it is escaped before being compiled into a regex, so
//! metacharacters such as `(` or `.` have no special meaning.

use regex::Regex;

use crate::region::Span;

/// Search errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The escaped needle failed to compile (for example, it exceeds the regex size limit).
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

fn compile_literal(needle: &str) -> Result<Regex, SearchError> {
    Ok(Regex::new(&regex::escape(needle))?)
}

/// Find every non-overlapping occurrence of `needle` in `text`, scanning left to right.
///
/// - Matching is literal and case-sensitive.
/// - Returns an empty list if `needle` is empty.
/// - Match spans are character offsets, half-open (`[start, end)`).
pub fn find_all_literal(text: &str, needle: &str) -> Result<Vec<Span>, SearchError> {
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let re = compile_literal(needle)?;
    let index = CharIndex::new(text);

    let matches: Vec<Span> = re
        .find_iter(text)
        .map(|m| Span {
            start: index.byte_to_char(m.start()),
            end: index.byte_to_char(m.end()),
        })
        .collect();

    tracing::trace!(needle, matches = matches.len(), "literal search");
    Ok(matches)
}
