//! Selection coordinates.
//!
//! All offsets are **character offsets** (Unicode scalar values), not byte offsets.
//!
//! - [`Span`] is a direction-less half-open range (`[start, end)`), used for line ranges,
//!   search matches and replacement targets.
//! - [`Region`] is a selection as the user made it: an `anchor` where the selection was
//!   started and an `active` end where the caret currently is.

/// A half-open character range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl Span {
    /// Create a span. The endpoints are ordered so that `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Create an empty span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if the two spans share at least one character.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `anchor <= active`: the caret sits at the end of the selection.
    Forward,
    /// `active < anchor`: the caret sits at the start of the selection.
    Backward,
}

/// One selection or caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Where the selection was initiated.
    pub anchor: usize,
    /// The moving edge (caret position).
    pub active: usize,
}

impl Region {
    /// Create a region from its anchor and active endpoints.
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a caret (empty region) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Lower endpoint.
    pub fn begin(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Upper endpoint.
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end() - self.begin()
    }

    /// Returns `true` for a caret.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Returns `true` if the caret is before the anchor.
    pub fn is_backward(&self) -> bool {
        self.active < self.anchor
    }

    /// Direction of the region. Carets report [`Direction::Forward`].
    pub fn direction(&self) -> Direction {
        if self.is_backward() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// The covered range, without direction.
    pub fn span(&self) -> Span {
        Span::new(self.anchor, self.active)
    }

    /// Rebuild a region over `span` pointing in `direction`.
    pub fn from_span(span: Span, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::new(span.start, span.end),
            Direction::Backward => Self::new(span.end, span.start),
        }
    }
}

impl From<Span> for Region {
    fn from(span: Span) -> Self {
        Self::new(span.start, span.end)
    }
}

/// Canonicalize a selection set the way an editor keeps it: sorted by position, overlapping
/// regions merged, exact duplicates dropped.
///
/// - Regions that only touch (one ends where the next begins) are kept apart.
/// - A duplicate keeps the direction of the first occurrence.
/// - A merged region points forward.
pub fn normalize_regions(mut regions: Vec<Region>) -> Vec<Region> {
    if regions.len() < 2 {
        return regions;
    }

    regions.sort_by(|a, b| {
        a.begin()
            .cmp(&b.begin())
            .then_with(|| a.end().cmp(&b.end()))
    });

    let mut merged: Vec<Region> = Vec::with_capacity(regions.len());
    for region in regions {
        let Some(last) = merged.last_mut() else {
            merged.push(region);
            continue;
        };

        if region.span() == last.span() {
            continue;
        }

        if region.begin() < last.end() {
            let span = Span::new(last.begin(), last.end().max(region.end()));
            *last = Region::from_span(span, Direction::Forward);
        } else {
            merged.push(region);
        }
    }

    merged
}

/// Add `region` to a set already in [`normalize_regions`] form, keeping it in that form.
///
/// The result equals pushing `region` and normalizing the whole set, but only the neighbours
/// `region` overlaps are visited.
pub fn insert_region(regions: &mut Vec<Region>, region: Region) {
    let key = (region.begin(), region.end());
    let idx = regions.partition_point(|r| (r.begin(), r.end()) <= key);

    if idx > 0 && regions[idx - 1].span() == region.span() {
        return;
    }

    let mut from = idx;
    let mut merged = region;
    if idx > 0 && region.begin() < regions[idx - 1].end() {
        from = idx - 1;
        let prev = regions[from];
        let span = Span::new(prev.begin(), prev.end().max(region.end()));
        merged = Region::from_span(span, Direction::Forward);
    }

    let mut to = idx;
    while to < regions.len() && regions[to].begin() < merged.end() {
        let span = Span::new(merged.begin(), merged.end().max(regions[to].end()));
        merged = Region::from_span(span, Direction::Forward);
        to += 1;
    }

    regions.splice(from..to, std::iter::once(merged));
}
