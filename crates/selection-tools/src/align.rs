//! Indentation alignment.
//!
//! For every selection that spans several lines, the continuation lines are re-indented so
//! that their first non-whitespace character sits in the visual column where the selection
//! starts. Typical use: select the arguments of a call (everything after the opening bracket)
//! and align them flush with the bracket.
//!
//! ```text
//! call(a,            call(a,
//!   b,        ==>         b,
//!         c)              c)
//! ```
//!
//! Indentation is always written with spaces: a column that falls between two tab stops
//! cannot be expressed with tabs alone.
//!
//! All replacements of one invocation go through a single batched edit, so the whole
//! realignment is one undo step.

use crate::host::{EditorHost, Replacement, ReplacementBatch};
use crate::layout::{leading_whitespace_len, space_run, visual_column};
use crate::region::Span;
use crate::settings::IndentSettings;

/// Compute the replacements that realign every multi-line selection of `host`.
///
/// The batch is sorted by descending start offset and ready for
/// [`EditorHost::apply_batched_edit`]. When two selections cover the same continuation line,
/// the first selection in selection-set order decides its indentation.
pub fn plan_alignment<H>(host: &H, settings: IndentSettings) -> Result<ReplacementBatch, H::Error>
where
    H: EditorHost + ?Sized,
{
    let mut batch = ReplacementBatch::new();

    for region in host.selections() {
        let begin = region.begin();
        let first_line = host.line_span(begin)?;
        let first_line_text = host.substr(first_line)?;

        let column = begin - first_line.start;
        let width = visual_column(&first_line_text, column, settings.tab_size());
        let indent = space_run(width);

        // The first line keeps its indentation.
        for line in host.lines(region.span())?.into_iter().skip(1) {
            let line_text = host.substr(line)?;
            let leading = leading_whitespace_len(&line_text);
            let target = Span::new(line.start, line.start + leading);

            tracing::trace!(
                line_start = line.start,
                leading,
                width,
                "queue indentation replacement"
            );
            batch.push(Replacement::new(target, indent.clone()));
        }
    }

    batch.dedup_targets();
    batch.sort_descending();
    Ok(batch)
}

/// Realign the continuation lines of every multi-line selection.
///
/// Reads the tab size once, then applies all replacements as one batched edit. Returns the
/// number of replacements applied; selections that fit on one line contribute none, and no
/// edit is issued when nothing is queued.
pub fn align_indentation<H>(host: &mut H) -> Result<usize, H::Error>
where
    H: EditorHost + ?Sized,
{
    let settings = IndentSettings::resolve(host.tab_size());
    let batch = plan_alignment(host, settings)?;
    let replacements = batch.len();

    if !batch.is_empty() {
        host.apply_batched_edit(batch)?;
    }

    Ok(replacements)
}
