//! Error types for club, profile and settings operations

use thiserror::Error;
use yardbook_domain::{ClubId, ShotTypeId};

/// Errors that can occur during lifecycle operations
///
/// Every variant except `Store` is raised before any write, so the store is
/// left exactly as it was.
#[derive(Error, Debug)]
pub enum LifecycleError<E> {
    /// Adding or restoring a club would exceed the active-club cap
    #[error("Maximum of {0} active clubs reached")]
    MaximumClubsReached(usize),

    /// Adding a shot type would exceed the per-club active cap
    #[error("Maximum of {0} active shot types per club reached")]
    MaximumShotTypesReached(usize),

    /// The club's last active shot type cannot be archived or deleted
    #[error("A club must keep at least {0} active shot type(s)")]
    MinimumShotTypesRequired(usize),

    /// Referenced club does not exist
    #[error("Club not found: {0}")]
    ClubNotFound(ClubId),

    /// Referenced shot type does not exist on the club
    #[error("Shot type not found: {0}")]
    ShotTypeNotFound(ShotTypeId),

    /// Carry distance outside 1-1000
    #[error("Invalid distance: {0} (expected 1-1000 yards)")]
    InvalidDistance(u32),

    /// Handicap outside 0-54
    #[error("Invalid handicap: {0} (expected 0-54)")]
    InvalidHandicap(i32),

    /// Tolerance percentage above 100
    #[error("Invalid tolerance: {0}% (expected 0-100)")]
    InvalidTolerance(u32),

    /// Storage layer error, propagated unchanged
    #[error("Storage error: {0}")]
    Store(E),
}
