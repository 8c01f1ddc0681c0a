//! What a batched edit did to the document.
//!
//! A batch is applied from the highest offset down, so every replacement can be stated in
//! the coordinates of the document as it was before the batch. [`TextDelta`] keeps that
//! shape: its edits are ordered by descending start, and each [`TextDeltaEdit::span`] refers
//! to the pre-batch text. Undo and redo publish deltas of the same shape, relative to the
//! document they were applied to.
//!
//! Offsets are character offsets.

use crate::region::Span;

/// One replaced range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Range replaced, in the document before the batch.
    pub span: Span,
    /// Text that was under `span`.
    pub removed: String,
    /// Text now in its place.
    pub inserted: String,
}

impl TextDeltaEdit {
    /// Length of `inserted` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    /// Signed change in document length caused by this edit.
    pub fn len_change(&self) -> isize {
        self.inserted_len() as isize - self.span.len() as isize
    }

    /// Returns `true` if the edit wrote back the text it replaced.
    pub fn is_noop(&self) -> bool {
        self.removed == self.inserted
    }
}

/// All edits of one batch (or of one undo/redo step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Document length in characters before the batch.
    pub chars_before: usize,
    /// Document length in characters after the batch.
    pub chars_after: usize,
    /// Edits by descending `span.start`, as they were applied.
    pub edits: Vec<TextDeltaEdit>,
}

impl TextDelta {
    /// Returns `true` if this delta contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Returns `true` if at least one edit changed text.
    pub fn changes_text(&self) -> bool {
        self.edits.iter().any(|e| !e.is_noop())
    }

    /// Signed change in document length.
    pub fn len_change(&self) -> isize {
        self.chars_after as isize - self.chars_before as isize
    }

    /// Edits in document order (ascending start).
    pub fn ascending(&self) -> impl Iterator<Item = &TextDeltaEdit> {
        self.edits.iter().rev()
    }

    /// Where each inserted text ended up in the document after the batch, in document order.
    pub fn inserted_spans(&self) -> Vec<Span> {
        let mut shift: isize = 0;
        self.ascending()
            .map(|edit| {
                let start = (edit.span.start as isize + shift) as usize;
                shift += edit.len_change();
                Span::new(start, start + edit.inserted_len())
            })
            .collect()
    }
}
