//! The editor surface the commands run against.
//!
//! Commands never own the document or the selection set. They borrow both through
//! [`EditorHost`], which an adapter implements over a real editor. [`crate::TextBuffer`] is
//! the in-memory implementation shipped with this crate.

use crate::region::{Region, Span};

/// One pending text substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Target range in the document as it was before the batch.
    pub span: Span,
    /// Text written over `span`.
    pub text: String,
}

impl Replacement {
    /// Create a replacement of `span` with `text`.
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

/// An ordered list of replacements applied as one edit.
///
/// Spans refer to the document before any replacement of the batch is applied. Applying the
/// replacements from the highest offset down keeps every pending span valid, so hosts apply
/// them in the order [`ReplacementBatch::iter`] yields once [`ReplacementBatch::sort_descending`]
/// has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementBatch {
    replacements: Vec<Replacement>,
}

impl ReplacementBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a replacement.
    pub fn push(&mut self, replacement: Replacement) {
        self.replacements.push(replacement);
    }

    /// Number of queued replacements.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Order by target start offset, highest first.
    ///
    /// Among replacements sharing a start offset the longer target comes first, so an
    /// insertion at `p` is applied after a replacement of `[p, q)`. The sort is stable
    /// otherwise.
    pub fn sort_descending(&mut self) {
        self.replacements
            .sort_by_key(|r| std::cmp::Reverse((r.span.start, r.span.end)));
    }

    /// Drop replacements whose target span was already queued, keeping the first one.
    pub fn dedup_targets(&mut self) {
        let mut seen = std::collections::HashSet::with_capacity(self.replacements.len());
        self.replacements.retain(|r| seen.insert(r.span));
    }

    /// Iterate in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Replacement> {
        self.replacements.iter()
    }

    /// Consume the batch.
    pub fn into_vec(self) -> Vec<Replacement> {
        self.replacements
    }
}

impl<'a> IntoIterator for &'a ReplacementBatch {
    type Item = &'a Replacement;
    type IntoIter = std::slice::Iter<'a, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Replacement> for ReplacementBatch {
    fn from_iter<I: IntoIterator<Item = Replacement>>(iter: I) -> Self {
        Self {
            replacements: iter.into_iter().collect(),
        }
    }
}

/// Document, selection set and edit primitive of a host editor.
///
/// Offsets are character offsets. The commands never validate offsets they receive from the
/// host; any failure reported here is returned to the caller unchanged.
pub trait EditorHost {
    /// Error reported by fallible host operations.
    type Error: std::error::Error;

    /// Text under `span`.
    fn substr(&self, span: Span) -> Result<String, Self::Error>;

    /// The line containing `offset`, excluding its terminator.
    fn line_span(&self, offset: usize) -> Result<Span, Self::Error>;

    /// Every line `span` touches, in document order, each excluding its terminator.
    ///
    /// An empty span yields the single line containing it.
    fn lines(&self, span: Span) -> Result<Vec<Span>, Self::Error>;

    /// Every non-overlapping literal occurrence of `needle` in the whole document.
    fn find_all_literal(&self, needle: &str) -> Result<Vec<Span>, Self::Error>;

    /// Raw `tab_size` setting, `None` when the host has none.
    fn tab_size(&self) -> Option<usize>;

    /// The current selection set, in order.
    fn selections(&self) -> Vec<Region>;

    /// Replace the whole selection set.
    fn replace_selections(&mut self, regions: Vec<Region>) -> Result<(), Self::Error>;

    /// Add one region to the selection set.
    fn add_selection(&mut self, region: Region) -> Result<(), Self::Error>;

    /// Add several regions to the selection set.
    ///
    /// Equivalent to calling [`EditorHost::add_selection`] for each region in order; hosts
    /// that keep a normalized set can override it to normalize once.
    fn add_selections(&mut self, regions: Vec<Region>) -> Result<(), Self::Error> {
        for region in regions {
            self.add_selection(region)?;
        }
        Ok(())
    }

    /// Apply every replacement of `batch` as a single undoable edit.
    ///
    /// Either all replacements are applied or none is.
    fn apply_batched_edit(&mut self, batch: ReplacementBatch) -> Result<(), Self::Error>;
}
