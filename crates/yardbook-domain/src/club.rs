//! Club module - clubs in the bag and their shot types

use crate::clock::SECS_PER_DAY;
use crate::ids::{ClubId, ShotTypeId};

/// Name of the shot type every new club starts with
pub const FULL_SHOT_TYPE: &str = "Full";

/// A club in the golfer's bag
///
/// A club owns its shot types by value. Archived clubs are hidden from the
/// primary listing and do not count toward the active-club cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    /// Unique identifier
    pub id: ClubId,

    /// Display name ("7 Iron")
    pub name: String,

    /// Short label used on the ladder ("7I"); empty until derived
    pub nickname: String,

    /// User-controlled position in the bag
    pub sort_order: u32,

    /// Hidden from the primary listing when true
    pub is_archived: bool,

    /// Swing variants in display order
    pub shot_types: Vec<ShotType>,
}

impl Club {
    /// Create a new active club with no shot types
    pub fn new(name: impl Into<String>, nickname: impl Into<String>, sort_order: u32) -> Self {
        Self {
            id: ClubId::new(),
            name: name.into(),
            nickname: nickname.into(),
            sort_order,
            is_archived: false,
            shot_types: Vec::new(),
        }
    }

    /// Append a shot type owned by this club
    ///
    /// The shot type's sort order is the current total count, archived
    /// entries included, so a slot is never reused.
    pub fn push_shot_type(&mut self, name: impl Into<String>, carry_distance: u32) -> &ShotType {
        let sort_order = self.shot_types.len() as u32;
        self.shot_types
            .push(ShotType::new(self.id, name, carry_distance, sort_order));
        &self.shot_types[self.shot_types.len() - 1]
    }

    /// Shot types that are not archived
    pub fn active_shot_types(&self) -> impl Iterator<Item = &ShotType> {
        self.shot_types.iter().filter(|s| !s.is_archived)
    }

    /// Shot types that are archived
    pub fn archived_shot_types(&self) -> impl Iterator<Item = &ShotType> {
        self.shot_types.iter().filter(|s| s.is_archived)
    }

    /// Number of shot types that are not archived
    pub fn active_shot_type_count(&self) -> usize {
        self.active_shot_types().count()
    }

    /// Look up a shot type by id
    pub fn shot_type(&self, id: ShotTypeId) -> Option<&ShotType> {
        self.shot_types.iter().find(|s| s.id == id)
    }

    /// Look up a shot type by id for mutation
    pub fn shot_type_mut(&mut self, id: ShotTypeId) -> Option<&mut ShotType> {
        self.shot_types.iter_mut().find(|s| s.id == id)
    }

    /// Detach a shot type from this club, returning it
    pub fn remove_shot_type(&mut self, id: ShotTypeId) -> Option<ShotType> {
        let index = self.shot_types.iter().position(|s| s.id == id)?;
        Some(self.shot_types.remove(index))
    }
}

/// A swing variant of a club with its carry distance
#[derive(Debug, Clone, PartialEq)]
pub struct ShotType {
    /// Unique identifier
    pub id: ShotTypeId,

    /// Owning club
    pub club_id: ClubId,

    /// Name ("Full", "3/4"); unique by convention only
    pub name: String,

    /// Carry distance in yards
    pub carry_distance: u32,

    /// Position within the club
    pub sort_order: u32,

    /// Excluded from capacity counts and listings when true
    pub is_archived: bool,

    /// When the shot type was archived; `None` while active
    pub archived_at: Option<u64>,
}

impl ShotType {
    /// Create a new active shot type
    pub fn new(
        club_id: ClubId,
        name: impl Into<String>,
        carry_distance: u32,
        sort_order: u32,
    ) -> Self {
        Self {
            id: ShotTypeId::new(),
            club_id,
            name: name.into(),
            carry_distance,
            sort_order,
            is_archived: false,
            archived_at: None,
        }
    }

    /// Mark archived as of `now`
    pub fn archive(&mut self, now: u64) {
        self.is_archived = true;
        self.archived_at = Some(now);
    }

    /// Clear the archived flag and timestamp
    pub fn restore(&mut self) {
        self.is_archived = false;
        self.archived_at = None;
    }

    /// Whether this shot type was archived more than `retention_days` before `now`
    ///
    /// Active shot types never expire.
    pub fn is_expired(&self, now: u64, retention_days: u64) -> bool {
        match (self.is_archived, self.archived_at) {
            (true, Some(archived_at)) => {
                now.saturating_sub(archived_at) > retention_days.saturating_mul(SECS_PER_DAY)
            }
            _ => false,
        }
    }
}
