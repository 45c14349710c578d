//! Trait definitions for store interactions
//!
//! These traits define the boundaries between domain logic and persistence.
//! Implementations live in other crates (`yardbook-store`).
//!
//! Writes are expressed over whole aggregates: a club is saved together with
//! its shot types and a session together with its shots. Each write call is
//! one atomic commit, so a logical operation that issues a single write is
//! all-or-nothing.

use crate::{AppSettings, Club, ClubId, RangeSession, SessionId, StoredShotType, UserProfile};

/// Storage for clubs and their shot types
pub trait ClubStore {
    /// Error type for store operations
    type Error;

    /// Fetch clubs matching the query, ordered by sort order
    fn fetch_clubs(&self, query: &ClubQuery) -> Result<Vec<Club>, Self::Error>;

    /// Get a club (with all its shot types) by id
    fn get_club(&self, id: ClubId) -> Result<Option<Club>, Self::Error>;

    /// Insert or replace clubs in one transaction
    ///
    /// Each club's stored shot types become exactly `club.shot_types`;
    /// shot types no longer present are deleted.
    fn save_clubs(&mut self, clubs: &[Club]) -> Result<(), Self::Error>;

    /// Delete a club and its shot types; returns false if it did not exist
    fn delete_club(&mut self, id: ClubId) -> Result<bool, Self::Error>;
}

/// Query criteria for retrieving clubs
#[derive(Debug, Clone, Default)]
pub struct ClubQuery {
    /// Filter by archived flag; `None` returns both
    pub archived: Option<bool>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl ClubQuery {
    /// Active (non-archived) clubs only
    pub fn active() -> Self {
        Self {
            archived: Some(false),
            ..Default::default()
        }
    }

    /// Archived clubs only
    pub fn archived() -> Self {
        Self {
            archived: Some(true),
            ..Default::default()
        }
    }

    /// Whether a club passes this query's filters
    pub fn matches(&self, club: &Club) -> bool {
        self.archived.is_none_or(|archived| club.is_archived == archived)
    }
}

/// Storage for range sessions and saved session results
pub trait SessionStore {
    /// Error type for store operations
    type Error;

    /// Insert or replace a session; its stored shots become exactly `session.shots`
    fn save_session(&mut self, session: &RangeSession) -> Result<(), Self::Error>;

    /// Get a session (with its shots) by id
    fn get_session(&self, id: SessionId) -> Result<Option<RangeSession>, Self::Error>;

    /// All sessions, newest first
    fn fetch_sessions(&self) -> Result<Vec<RangeSession>, Self::Error>;

    /// Delete a session and its shots; returns false if it did not exist
    fn delete_session(&mut self, id: SessionId) -> Result<bool, Self::Error>;

    /// Record a saved session result
    fn insert_stored_shot_type(&mut self, record: &StoredShotType) -> Result<(), Self::Error>;

    /// All saved session results, newest first
    fn fetch_stored_shot_types(&self) -> Result<Vec<StoredShotType>, Self::Error>;
}

/// Storage for the singleton profile and settings records
pub trait ProfileStore {
    /// Error type for store operations
    type Error;

    /// The stored profile, if one has been created
    fn load_profile(&self) -> Result<Option<UserProfile>, Self::Error>;

    /// Insert or replace the profile
    fn save_profile(&mut self, profile: &UserProfile) -> Result<(), Self::Error>;

    /// The stored settings, if created
    fn load_settings(&self) -> Result<Option<AppSettings>, Self::Error>;

    /// Insert or replace the settings
    fn save_settings(&mut self, settings: &AppSettings) -> Result<(), Self::Error>;
}
