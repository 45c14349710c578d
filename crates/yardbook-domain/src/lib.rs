//! Yardbook Domain Layer
//!
//! This crate contains the core business logic and domain model for Yardbook,
//! a personal golf yardage book. It has a single external dependency (`uuid`)
//! and defines the entities, value objects, pure algorithms and store traits
//! that every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **Club**: A club in the bag, owning one or more shot types
//! - **ShotType**: A swing variant ("Full", "3/4", ...) with a carry distance
//! - **RangeSession**: A practice session logging shots for one club/shot combination
//! - **Recommendation**: The closest club/shot combinations for a target yardage
//! - **Yardage Ladder**: Combinations within a tolerance window, grouped by carry
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Aggregates own their children by value (a club owns its shot types)
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all store interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod club;
pub mod golf_mode;
pub mod ids;
pub mod ladder;
pub mod nickname;
pub mod profile;
pub mod recommendation;
pub mod resolver;
pub mod session;
pub mod stats;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use club::{Club, ShotType};
pub use golf_mode::GolfModeState;
pub use ids::{ClubId, ProfileId, SessionId, SettingsId, ShotId, ShotTypeId, StoredShotTypeId};
pub use ladder::{ComboEntry, LadderEntry, LadderGroup, SelectedClubShot, YardageLadder};
pub use profile::{AppSettings, UserProfile};
pub use recommendation::{ShotRecommendation, ShotTypeFilter};
pub use session::{RangeSession, Shot, StoredShotType};
pub use stats::RangeStats;
