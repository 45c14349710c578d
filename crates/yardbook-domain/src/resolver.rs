//! Display distance for a club in listings

use crate::club::Club;

/// Carry shown next to a club in the bag listing
///
/// The first active shot type named `primary_shot_type` wins; otherwise the
/// club's longest active carry; 0 for a club with no active shot types.
pub fn resolve_display_distance(club: &Club, primary_shot_type: &str) -> u32 {
    club.active_shot_types()
        .find(|s| s.name == primary_shot_type)
        .or_else(|| club.active_shot_types().max_by_key(|s| s.carry_distance))
        .map(|s| s.carry_distance)
        .unwrap_or(0)
}
