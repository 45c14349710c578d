//! Yardage ladder - combinations near a target, positioned and grouped by carry
//!
//! The ladder shows every active club/shot combination whose carry falls in
//! a tolerance window around the target. Entries carrying the same distance
//! share one rung.

use crate::club::Club;
use std::collections::BTreeMap;

/// Size of the club-shot picker window
pub const COMBINATION_WINDOW: usize = 7;

/// Offset of the anchor inside the picker window when space allows
const ANCHOR_OFFSET: usize = 3;

/// The combination currently shown to the golfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedClubShot {
    /// Selected club name
    pub club_name: String,

    /// Selected shot-type name
    pub shot_type_name: String,
}

/// One club/shot combination placed on the ladder
#[derive(Debug, Clone, PartialEq)]
pub struct LadderEntry {
    /// Club name
    pub club_name: String,

    /// Club nickname used for labels
    pub club_nickname: String,

    /// Shot-type name
    pub shot_type_name: String,

    /// Carry distance
    pub carry_distance: u32,

    /// Vertical position within the window, 0.0 (min) to 1.0 (max)
    pub yardage_position: f64,

    /// Same club and shot type as the current selection
    pub is_selected: bool,

    /// Same club as the current selection, any shot type
    pub is_same_club_as_selected: bool,

    /// Shot type matches the profile's primary shot type
    pub is_primary_shot_type: bool,
}

/// Entries sharing one exact carry distance
#[derive(Debug, Clone, PartialEq)]
pub struct LadderGroup {
    /// Shared carry distance
    pub carry_distance: u32,

    /// Primary entries first, then by club name
    pub entries: Vec<LadderEntry>,
}

impl LadderGroup {
    /// Build a group, ordering its entries for display
    pub fn new(carry_distance: u32, mut entries: Vec<LadderEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.is_primary_shot_type
                .cmp(&a.is_primary_shot_type)
                .then_with(|| a.club_name.cmp(&b.club_name))
        });
        Self {
            carry_distance,
            entries,
        }
    }

    /// Label drawn next to the rung
    ///
    /// Several entries join their nicknames with " / "; a lone primary entry
    /// shows just the nickname; any other lone entry adds its shot-type name.
    pub fn display_label(&self) -> String {
        match self.entries.as_slice() {
            [] => String::new(),
            [entry] if entry.is_primary_shot_type => entry.club_nickname.clone(),
            [entry] => format!("{} {}", entry.club_nickname, entry.shot_type_name),
            entries => entries
                .iter()
                .map(|e| e.club_nickname.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }

    /// Any entry is the current selection
    pub fn is_any_selected(&self) -> bool {
        self.entries.iter().any(|e| e.is_selected)
    }

    /// Any entry shares the selected club
    pub fn is_any_same_club_as_selected(&self) -> bool {
        self.entries.iter().any(|e| e.is_same_club_as_selected)
    }

    /// Drawn at the larger primary size (single primary entry)
    pub fn is_primary_font_size(&self) -> bool {
        matches!(self.entries.as_slice(), [entry] if entry.is_primary_shot_type)
    }
}

/// The ladder model for one target
#[derive(Debug, Clone, PartialEq)]
pub struct YardageLadder {
    /// Lower bound of the window (inclusive)
    pub min_yardage: u32,

    /// Upper bound of the window (inclusive)
    pub max_yardage: u32,

    /// Rungs ordered by carry, longest first
    pub groups: Vec<LadderGroup>,
}

impl YardageLadder {
    /// Build the ladder for a target and tolerance percentage
    ///
    /// Only active shot types on active clubs are considered.
    pub fn build(
        target: u32,
        tolerance_percent: u32,
        clubs: &[Club],
        selection: Option<&SelectedClubShot>,
        primary_shot_type: &str,
    ) -> Self {
        let (min_yardage, max_yardage) = yardage_window(target, tolerance_percent);

        let mut by_distance: BTreeMap<u32, Vec<LadderEntry>> = BTreeMap::new();
        for club in clubs.iter().filter(|c| !c.is_archived) {
            let same_club = selection.is_some_and(|s| s.club_name == club.name);
            for shot in club.active_shot_types() {
                let carry = shot.carry_distance;
                if carry < min_yardage || carry > max_yardage {
                    continue;
                }
                by_distance.entry(carry).or_default().push(LadderEntry {
                    club_name: club.name.clone(),
                    club_nickname: club.nickname.clone(),
                    shot_type_name: shot.name.clone(),
                    carry_distance: carry,
                    yardage_position: yardage_position(carry, min_yardage, max_yardage),
                    is_selected: same_club
                        && selection.is_some_and(|s| s.shot_type_name == shot.name),
                    is_same_club_as_selected: same_club,
                    is_primary_shot_type: shot.name == primary_shot_type,
                });
            }
        }

        let groups = by_distance
            .into_iter()
            .rev()
            .map(|(carry, entries)| LadderGroup::new(carry, entries))
            .collect();

        Self {
            min_yardage,
            max_yardage,
            groups,
        }
    }

    /// Total entries across all rungs
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Inclusive window `[floor(T*(1-P/100)), floor(T*(1+P/100))]`
///
/// Tolerances above 100% clamp the lower bound at zero.
pub fn yardage_window(target: u32, tolerance_percent: u32) -> (u32, u32) {
    let target = u64::from(target);
    let percent = u64::from(tolerance_percent);
    let min = target * 100u64.saturating_sub(percent) / 100;
    let max = target * (100 + percent) / 100;
    (
        u32::try_from(min).unwrap_or(u32::MAX),
        u32::try_from(max).unwrap_or(u32::MAX),
    )
}

/// Normalized position of `distance` within `[min, max]`; 0.5 for a point window
pub fn yardage_position(distance: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return 0.5;
    }
    let position = (f64::from(distance) - f64::from(min)) / (f64::from(max) - f64::from(min));
    position.clamp(0.0, 1.0)
}

/// A row in the club-shot picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboEntry {
    /// Club name
    pub club_name: String,

    /// Club nickname
    pub club_nickname: String,

    /// Shot-type name
    pub shot_type_name: String,

    /// Carry distance
    pub carry_distance: u32,
}

/// Seven-entry neighborhood of the target among all active combinations
///
/// Combinations are sorted by carry, longest first. The anchor is the last
/// combination still carrying at least `target` (the first one if none
/// does); the window keeps the anchor at offset 3 and shifts to stay within
/// the list. `shot_type_names`, when given, restricts the combinations.
pub fn combination_window(
    clubs: &[Club],
    target: u32,
    shot_type_names: Option<&[String]>,
) -> Vec<ComboEntry> {
    let mut combos: Vec<ComboEntry> = clubs
        .iter()
        .filter(|c| !c.is_archived)
        .flat_map(|club| club.active_shot_types().map(move |shot| (club, shot)))
        .filter(|(_, shot)| shot_type_names.is_none_or(|names| names.contains(&shot.name)))
        .map(|(club, shot)| ComboEntry {
            club_name: club.name.clone(),
            club_nickname: club.nickname.clone(),
            shot_type_name: shot.name.clone(),
            carry_distance: shot.carry_distance,
        })
        .collect();
    combos.sort_by(|a, b| b.carry_distance.cmp(&a.carry_distance));

    let anchor = combos
        .iter()
        .rposition(|c| c.carry_distance >= target)
        .unwrap_or(0);
    let start = anchor
        .saturating_sub(ANCHOR_OFFSET)
        .min(combos.len().saturating_sub(COMBINATION_WINDOW));
    let end = (start + COMBINATION_WINDOW).min(combos.len());

    combos.drain(start..end).collect()
}
