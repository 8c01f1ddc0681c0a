//! Shorten selections by one character at each end.
//!
//! Handy after expanding a selection to brackets or quotes, to drop the delimiters.

use crate::host::EditorHost;
use crate::region::Region;

/// Move both endpoints one character inwards, keeping the direction.
///
/// Regions shorter than two characters collapse to a caret at their lower endpoint.
pub fn shrink_region(region: Region) -> Region {
    let Region { anchor, active } = region;
    if region.len() < 2 {
        Region::caret(region.begin())
    } else if anchor < active {
        Region::new(anchor + 1, active - 1)
    } else {
        Region::new(anchor - 1, active + 1)
    }
}

/// Shrink every region of the selection set. Returns the number of regions written back.
pub fn shrink_selection<H>(host: &mut H) -> Result<usize, H::Error>
where
    H: EditorHost + ?Sized,
{
    let shrunk: Vec<Region> = host.selections().into_iter().map(shrink_region).collect();
    let count = shrunk.len();
    host.replace_selections(shrunk)?;
    Ok(count)
}
