//! In-memory editor host.
//!
//! [`TextBuffer`] implements [`EditorHost`] on top of a rope-backed [`LineIndex`]. It keeps a
//! normalized selection set, applies batched edits atomically (one undo step each) and
//! publishes a [`TextDelta`] for every text change.
//!
//! # Example
//!
//! ```rust
//! use selection_tools::{Region, SelectionCommand, TextBuffer, execute};
//!
//! let mut buffer = TextBuffer::new("call(\n    a,\n  b)");
//! buffer.set_selections([Region::new(5, 16)]);
//!
//! execute(&mut buffer, SelectionCommand::AlignIndentation).unwrap();
//! assert_eq!(buffer.text(), "call(\n     a,\n     b)");
//!
//! buffer.undo().unwrap();
//! assert_eq!(buffer.text(), "call(\n    a,\n  b)");
//! ```

use std::collections::VecDeque;

use thiserror::Error;

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::host::{EditorHost, ReplacementBatch};
use crate::line_index::LineIndex;
use crate::region::{Region, Span, insert_region, normalize_regions};
use crate::search::{SearchError, find_all_literal};

/// Maximum number of undo steps kept by a [`TextBuffer`].
pub const DEFAULT_MAX_UNDO: usize = 1000;

/// Errors reported by [`TextBuffer`].
#[derive(Debug, Error)]
pub enum BufferError {
    /// Offset past the end of the document.
    #[error("invalid offset: {0}")]
    InvalidOffset(usize),
    /// Range that is reversed or leaves the document.
    #[error("invalid range: {start}..{end}")]
    InvalidRange {
        /// Start character offset.
        start: usize,
        /// End character offset.
        end: usize,
    },
    /// Replacement that overlaps, or is not below, the replacement applied before it.
    #[error("conflicting replacement: {start}..{end}")]
    ConflictingEdit {
        /// Start character offset.
        start: usize,
        /// End character offset.
        end: usize,
    },
    /// Literal search failed.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,
}

#[derive(Debug, Clone)]
struct TextEdit {
    start_before: usize,
    start_after: usize,
    deleted_text: String,
    inserted_text: String,
}

impl TextEdit {
    fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }
}

#[derive(Debug, Clone)]
struct UndoStep {
    /// Sorted by descending `start_before` (and therefore descending `start_after`).
    edits: Vec<TextEdit>,
    before_selections: Vec<Region>,
    after_selections: Vec<Region>,
}

#[derive(Debug)]
struct UndoHistory {
    undo_stack: VecDeque<UndoStep>,
    redo_stack: Vec<UndoStep>,
    max_undo: usize,
}

impl UndoHistory {
    fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    fn push(&mut self, step: UndoStep) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(step);
    }
}

/// Move `offsets` through non-overlapping edits given as `(start, deleted_len, inserted_len)`
/// in ascending start order, all relative to the document before the edits.
///
/// An offset inside a replaced range moves to the end of the inserted text; an offset exactly
/// at a pure insertion point is pushed past the inserted text. Offsets are visited in sorted
/// order so the edits are walked once.
fn remap_offsets(offsets: &mut [usize], edits: &[(usize, usize, usize)]) {
    let mut order: Vec<usize> = (0..offsets.len()).collect();
    order.sort_unstable_by_key(|&i| offsets[i]);

    let mut next = 0;
    let mut shift: isize = 0;
    for i in order {
        let offset = offsets[i];
        while let Some(&(start, deleted_len, inserted_len)) = edits.get(next) {
            if offset < start + deleted_len {
                break;
            }
            shift += inserted_len as isize - deleted_len as isize;
            next += 1;
        }

        let base = match edits.get(next) {
            Some(&(start, _, inserted_len)) if start < offset => start + inserted_len,
            _ => offset,
        };
        offsets[i] = (base as isize + shift) as usize;
    }
}

/// A text document with a selection set, undo history and tab size setting.
#[derive(Debug)]
pub struct TextBuffer {
    line_index: LineIndex,
    selections: Vec<Region>,
    tab_size: Option<usize>,
    history: UndoHistory,
    last_text_delta: Option<TextDelta>,
}

impl TextBuffer {
    /// Create a buffer holding `text`, with a single caret at offset 0 and no tab size set.
    pub fn new(text: &str) -> Self {
        Self {
            line_index: LineIndex::from_text(text),
            selections: vec![Region::caret(0)],
            tab_size: None,
            history: UndoHistory::new(DEFAULT_MAX_UNDO),
            last_text_delta: None,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Builder-style tab size setting.
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = Some(tab_size);
        self
    }

    /// Set or clear the tab size setting.
    pub fn set_tab_size(&mut self, tab_size: Option<usize>) {
        self.tab_size = tab_size;
    }

    /// Limit the number of undo steps kept (at least 1). Older steps are dropped first.
    pub fn set_max_undo(&mut self, max_undo: usize) {
        self.history.max_undo = max_undo.max(1);
        let excess = self
            .history
            .undo_stack
            .len()
            .saturating_sub(self.history.max_undo);
        self.history.undo_stack.drain(..excess);
    }

    /// Get text content
    pub fn text(&self) -> String {
        self.line_index.text()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.line_index.char_count()
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Text of `line`, excluding its terminator.
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.line_index.line_text(line)
    }

    /// `(line, column)` of a character offset (clamped to the document).
    pub fn position(&self, offset: usize) -> (usize, usize) {
        self.line_index.char_offset_to_position(offset)
    }

    /// Character offset of `(line, column)` (clamped to the document).
    pub fn offset(&self, line: usize, column: usize) -> usize {
        self.line_index.position_to_char_offset(line, column)
    }

    /// The current selection set.
    pub fn regions(&self) -> &[Region] {
        &self.selections
    }

    /// Replace the selection set. Regions are clamped to the document and normalized.
    pub fn set_selections(&mut self, regions: impl IntoIterator<Item = Region>) {
        let max = self.char_count();
        let clamped = regions
            .into_iter()
            .map(|r| Region::new(r.anchor.min(max), r.active.min(max)))
            .collect();
        self.selections = normalize_regions(clamped);
    }

    /// Delta produced by the last batched edit, undo or redo.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_ref()
    }

    /// Take the delta produced by the last batched edit, undo or redo.
    pub fn take_last_text_delta(&mut self) -> Option<TextDelta> {
        self.last_text_delta.take()
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.history.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.history.redo_stack.is_empty()
    }

    /// Undo stack depth (one step per batched edit)
    pub fn undo_depth(&self) -> usize {
        self.history.undo_stack.len()
    }

    /// Revert the last batched edit, restoring text and selections.
    pub fn undo(&mut self) -> Result<(), BufferError> {
        let step = self
            .history
            .undo_stack
            .pop_back()
            .ok_or(BufferError::NothingToUndo)?;

        // Inverse: replace each inserted text with the text it deleted.
        let ops: Vec<(usize, usize, &str)> = step
            .edits
            .iter()
            .map(|e| (e.start_after, e.inserted_len(), e.deleted_text.as_str()))
            .collect();
        let delta = self.apply_descending(&ops);

        self.selections = step.before_selections.clone();
        self.last_text_delta = Some(delta);
        self.history.redo_stack.push(step);
        Ok(())
    }

    /// Re-apply the last undone batched edit.
    pub fn redo(&mut self) -> Result<(), BufferError> {
        let step = self
            .history
            .redo_stack
            .pop()
            .ok_or(BufferError::NothingToRedo)?;

        let ops: Vec<(usize, usize, &str)> = step
            .edits
            .iter()
            .map(|e| (e.start_before, e.deleted_len(), e.inserted_text.as_str()))
            .collect();
        let delta = self.apply_descending(&ops);

        self.selections = step.after_selections.clone();
        self.last_text_delta = Some(delta);
        self.history.undo_stack.push_back(step);
        Ok(())
    }

    fn check_span(&self, span: Span) -> Result<(), BufferError> {
        if span.start > span.end || span.end > self.char_count() {
            return Err(BufferError::InvalidRange {
                start: span.start,
                end: span.end,
            });
        }
        Ok(())
    }

    /// Apply `(start, delete_len, insert_text)` ops that are already validated and sorted by
    /// descending start, then remap the selection set in one pass.
    fn apply_descending(&mut self, ops: &[(usize, usize, &str)]) -> TextDelta {
        let chars_before = self.char_count();
        let mut edits: Vec<TextDeltaEdit> = Vec::with_capacity(ops.len());

        for &(start, delete_len, insert_text) in ops {
            let span = Span::new(start, start + delete_len);
            let removed = self.line_index.slice(span).unwrap_or_default();
            self.line_index.replace(span, insert_text);
            edits.push(TextDeltaEdit {
                span,
                removed,
                inserted: insert_text.to_string(),
            });
        }

        let ascending: Vec<(usize, usize, usize)> = edits
            .iter()
            .rev()
            .map(|e| (e.span.start, e.span.len(), e.inserted_len()))
            .collect();
        let mut offsets: Vec<usize> = self
            .selections
            .iter()
            .flat_map(|r| [r.anchor, r.active])
            .collect();
        remap_offsets(&mut offsets, &ascending);

        let remapped = offsets
            .chunks_exact(2)
            .map(|pair| Region::new(pair[0], pair[1]))
            .collect();
        self.selections = normalize_regions(remapped);

        TextDelta {
            chars_before,
            chars_after: self.char_count(),
            edits,
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl EditorHost for TextBuffer {
    type Error = BufferError;

    fn substr(&self, span: Span) -> Result<String, BufferError> {
        self.check_span(span)?;
        self.line_index
            .slice(span)
            .ok_or(BufferError::InvalidRange {
                start: span.start,
                end: span.end,
            })
    }

    fn line_span(&self, offset: usize) -> Result<Span, BufferError> {
        if offset > self.char_count() {
            return Err(BufferError::InvalidOffset(offset));
        }
        let (line, _) = self.line_index.char_offset_to_position(offset);
        self.line_index
            .line_span(line)
            .ok_or(BufferError::InvalidOffset(offset))
    }

    fn lines(&self, span: Span) -> Result<Vec<Span>, BufferError> {
        self.check_span(span)?;
        let (first, _) = self.line_index.char_offset_to_position(span.start);
        let (last, _) = self.line_index.char_offset_to_position(span.end);

        (first..=last)
            .map(|line| {
                self.line_index
                    .line_span(line)
                    .ok_or(BufferError::InvalidRange {
                        start: span.start,
                        end: span.end,
                    })
            })
            .collect()
    }

    fn find_all_literal(&self, needle: &str) -> Result<Vec<Span>, BufferError> {
        Ok(find_all_literal(&self.text(), needle)?)
    }

    fn tab_size(&self) -> Option<usize> {
        self.tab_size
    }

    fn selections(&self) -> Vec<Region> {
        self.selections.clone()
    }

    fn replace_selections(&mut self, regions: Vec<Region>) -> Result<(), BufferError> {
        self.set_selections(regions);
        Ok(())
    }

    fn add_selection(&mut self, region: Region) -> Result<(), BufferError> {
        let max = self.char_count();
        let region = Region::new(region.anchor.min(max), region.active.min(max));
        insert_region(&mut self.selections, region);
        Ok(())
    }

    fn add_selections(&mut self, regions: Vec<Region>) -> Result<(), BufferError> {
        let mut all = std::mem::take(&mut self.selections);
        all.extend(regions);
        self.set_selections(all);
        Ok(())
    }

    fn apply_batched_edit(&mut self, batch: ReplacementBatch) -> Result<(), BufferError> {
        if batch.is_empty() {
            return Ok(());
        }

        // Validate everything before touching the document.
        let mut floor = usize::MAX;
        let mut edits: Vec<TextEdit> = Vec::with_capacity(batch.len());
        for replacement in batch.into_vec() {
            let span = replacement.span;
            self.check_span(span)?;
            if span.end > floor {
                return Err(BufferError::ConflictingEdit {
                    start: span.start,
                    end: span.end,
                });
            }
            floor = span.start;

            let deleted_text = self.substr(span)?;
            edits.push(TextEdit {
                start_before: span.start,
                start_after: span.start,
                deleted_text,
                inserted_text: replacement.text,
            });
        }

        // Offsets in the post-edit document (ascending pass).
        let mut shift: i64 = 0;
        for edit in edits.iter_mut().rev() {
            edit.start_after = (edit.start_before as i64 + shift) as usize;
            shift += edit.inserted_len() as i64 - edit.deleted_len() as i64;
        }

        let before_selections = self.selections.clone();
        let ops: Vec<(usize, usize, &str)> = edits
            .iter()
            .map(|e| (e.start_before, e.deleted_len(), e.inserted_text.as_str()))
            .collect();
        let delta = self.apply_descending(&ops);

        tracing::trace!(
            edits = edits.len(),
            before = delta.chars_before,
            after = delta.chars_after,
            "applied batched edit"
        );

        self.last_text_delta = Some(delta);
        self.history.push(UndoStep {
            edits,
            before_selections,
            after_selections: self.selections.clone(),
        });
        Ok(())
    }
}
