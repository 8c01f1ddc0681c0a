//! Quick "find all" over several selections at once.
//!
//! Selecting `foo` and `bar` and running the command selects every occurrence of either
//! string. Matching is literal and case-sensitive; carets contribute nothing.

use crate::host::EditorHost;
use crate::region::Region;

/// Add every literal occurrence of each selected string to the selection set.
///
/// The selected strings are all read before the first search, so matches added along the way
/// never become needles themselves. Existing selections are kept, and all matches are
/// handed to [`EditorHost::add_selections`] in one call. Returns the number of matches,
/// including the ones the host already had selected.
pub fn find_all_multi<H>(host: &mut H) -> Result<usize, H::Error>
where
    H: EditorHost + ?Sized,
{
    let mut needles: Vec<String> = Vec::new();
    for region in host.selections() {
        if region.is_empty() {
            continue;
        }
        let text = host.substr(region.span())?;
        if !text.is_empty() && !needles.contains(&text) {
            needles.push(text);
        }
    }

    let mut found: Vec<Region> = Vec::new();
    for needle in &needles {
        found.extend(host.find_all_literal(needle)?.into_iter().map(Region::from));
    }

    let matches = found.len();
    if matches > 0 {
        host.add_selections(found)?;
    }

    tracing::trace!(needles = needles.len(), matches, "find all");
    Ok(matches)
}
