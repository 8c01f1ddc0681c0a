//! Logical line index
//!
//! Rope-backed text storage with O(log N) conversion between character offsets and
//! `(line, column)` positions.

use ropey::Rope;

use crate::region::Span;

/// Logical line index - implemented using Rope data structure
///
/// Line breaks follow `ropey`: `'\n'`, `'\r'` and `"\r\n"` (one terminator), plus the
/// Unicode line and paragraph separators. Terminators never belong to a line's content span.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count (an empty document has 1 line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get line number and column (in characters) from a character offset.
    ///
    /// Offsets past the end are clamped.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line_idx = self.rope.char_to_line(char_offset);
        let line_start_char = self.rope.line_to_char(line_idx);
        (line_idx, char_offset - line_start_char)
    }

    /// Get character offset from line number and column, clamped to the line content.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        match self.line_span(line) {
            Some(span) => span.start + column.min(span.len()),
            None => self.rope.len_chars(),
        }
    }

    /// Content span of `line`, excluding its terminator.
    pub fn line_span(&self, line: usize) -> Option<Span> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let start = self.rope.line_to_char(line);
        if line + 1 == self.rope.len_lines() {
            return Some(Span {
                start,
                end: self.rope.len_chars(),
            });
        }

        // `end` is the last terminator char; "\r\n" takes two.
        let mut end = self.rope.line_to_char(line + 1) - 1;
        if end > start && self.rope.char(end) == '\n' && self.rope.char(end - 1) == '\r' {
            end -= 1;
        }

        Some(Span { start, end })
    }

    /// Get text of the specified line (excluding its terminator)
    pub fn line_text(&self, line: usize) -> Option<String> {
        let span = self.line_span(line)?;
        Some(self.rope.slice(span.start..span.end).to_string())
    }

    /// Get text in a character range. Returns `None` if the range leaves the document.
    pub fn slice(&self, span: Span) -> Option<String> {
        if span.end > self.rope.len_chars() || span.start > span.end {
            return None;
        }
        Some(self.rope.slice(span.start..span.end).to_string())
    }

    /// Replace `span` with `text`. The caller validates the span.
    pub fn replace(&mut self, span: Span, text: &str) {
        if !span.is_empty() {
            self.rope.remove(span.start..span.end);
        }
        if !text.is_empty() {
            self.rope.insert(span.start, text);
        }
    }

    /// Get complete text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_index() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1); // Rope empty document has 1 line
        assert_eq!(index.char_count(), 0);
        assert_eq!(index.line_span(0), Some(Span::new(0, 0)));
    }

    #[test]
    fn test_char_offset_to_position() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.char_offset_to_position(0), (0, 0)); // A
        assert_eq!(index.char_offset_to_position(2), (0, 2)); // C
        assert_eq!(index.char_offset_to_position(3), (0, 3)); // '\n'
        assert_eq!(index.char_offset_to_position(4), (1, 0)); // D
        assert_eq!(index.char_offset_to_position(8), (2, 0)); // G
        assert_eq!(index.char_offset_to_position(100), (2, 3));
    }

    #[test]
    fn test_position_to_char_offset() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.position_to_char_offset(0, 2), 2);
        assert_eq!(index.position_to_char_offset(1, 0), 4);
        assert_eq!(index.position_to_char_offset(1, 99), 7);
        assert_eq!(index.position_to_char_offset(9, 0), 11);
    }

    #[test]
    fn test_line_span_excludes_terminators() {
        let index = LineIndex::from_text("ab\r\ncd\n\nef");

        assert_eq!(index.line_span(0), Some(Span::new(0, 2)));
        assert_eq!(index.line_span(1), Some(Span::new(4, 6)));
        assert_eq!(index.line_span(2), Some(Span::new(7, 7)));
        assert_eq!(index.line_span(3), Some(Span::new(8, 10)));
        assert_eq!(index.line_span(4), None);
        assert_eq!(index.line_text(0).as_deref(), Some("ab"));
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let index = LineIndex::from_text("x\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_span(1), Some(Span::new(2, 2)));
    }

    #[test]
    fn test_utf8_cjk() {
        let index = LineIndex::from_text("你好\n世界");

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.char_count(), 5);
        assert_eq!(index.char_offset_to_position(3), (1, 0));
        assert_eq!(index.line_text(1).as_deref(), Some("世界"));
    }

    #[test]
    fn test_slice_and_replace() {
        let mut index = LineIndex::from_text("Hello World");

        assert_eq!(index.slice(Span::new(6, 11)).as_deref(), Some("World"));
        assert_eq!(index.slice(Span::new(6, 12)), None);

        index.replace(Span::new(6, 11), "Rope");
        assert_eq!(index.text(), "Hello Rope");

        index.replace(Span::point(0), ">> ");
        assert_eq!(index.text(), ">> Hello Rope");
    }
}
