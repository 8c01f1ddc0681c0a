//! Toggle which end of the selections holds the caret.

use crate::host::EditorHost;
use crate::region::{Direction, Region};

/// Point every region in one direction.
///
/// Regions normally become backward (caret at the start). If any region is already
/// backward, all of them become forward instead. Count and order are preserved.
pub fn reverse_regions(regions: &[Region]) -> (Vec<Region>, Direction) {
    let target = if regions.iter().any(Region::is_backward) {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let reversed = regions
        .iter()
        .map(|r| Region::from_span(r.span(), target))
        .collect();

    (reversed, target)
}

/// Reverse the direction of the whole selection set. Returns the direction applied.
pub fn reverse_selection_direction<H>(host: &mut H) -> Result<Direction, H::Error>
where
    H: EditorHost + ?Sized,
{
    let (reversed, direction) = reverse_regions(&host.selections());
    host.replace_selections(reversed)?;
    Ok(direction)
}
