//! Range session service

use crate::RangeError;
use yardbook_domain::clock::current_timestamp;
use yardbook_domain::traits::SessionStore;
use yardbook_domain::validation::{extract_distance, is_valid_distance};
use yardbook_domain::{RangeSession, RangeStats, SessionId, Shot, ShotId, StoredShotType};

/// Records practice sessions and their shots
///
/// Every mutating call issues one `save_session` (or `delete_session`) on the
/// store; validation failures write nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeService;

impl RangeService {
    /// Create a new range service
    pub fn new() -> Self {
        Self
    }

    /// Start and persist an empty session for a club/shot-type combination
    pub fn start_session<S: SessionStore>(
        &self,
        store: &mut S,
        club_name: &str,
        shot_type_name: &str,
    ) -> Result<RangeSession, RangeError<S::Error>> {
        let session = RangeSession::new(club_name, shot_type_name, current_timestamp());
        store.save_session(&session).map_err(RangeError::Store)?;
        tracing::info!(
            "Started range session {} ({} / {})",
            session.id,
            club_name,
            shot_type_name
        );
        Ok(session)
    }

    /// Load a session by id
    pub fn get_session<S: SessionStore>(
        &self,
        store: &S,
        id: SessionId,
    ) -> Result<RangeSession, RangeError<S::Error>> {
        store
            .get_session(id)
            .map_err(RangeError::Store)?
            .ok_or(RangeError::SessionNotFound(id))
    }

    /// Log a shot in a session
    pub fn add_shot<S: SessionStore>(
        &self,
        store: &mut S,
        session_id: SessionId,
        distance: u32,
        is_from_voice: bool,
    ) -> Result<Shot, RangeError<S::Error>> {
        if !is_valid_distance(distance) {
            tracing::warn!("Rejected shot distance {}", distance);
            return Err(RangeError::InvalidDistance(distance));
        }
        let mut session = self.get_session(store, session_id)?;
        let shot = session
            .push_shot(distance, is_from_voice, current_timestamp())
            .clone();
        store.save_session(&session).map_err(RangeError::Store)?;
        tracing::info!("Logged {} yards in session {}", distance, session_id);
        Ok(shot)
    }

    /// Log a shot from a speech transcript, taking the first number spoken
    pub fn add_spoken_shot<S: SessionStore>(
        &self,
        store: &mut S,
        session_id: SessionId,
        transcript: &str,
    ) -> Result<Shot, RangeError<S::Error>> {
        let distance = extract_distance(transcript)
            .ok_or_else(|| RangeError::UnrecognizedDistance(transcript.to_string()))?;
        self.add_shot(store, session_id, distance, true)
    }

    /// Remove a shot from a session
    pub fn delete_shot<S: SessionStore>(
        &self,
        store: &mut S,
        session_id: SessionId,
        shot_id: ShotId,
    ) -> Result<Shot, RangeError<S::Error>> {
        let mut session = self.get_session(store, session_id)?;
        let shot = session
            .remove_shot(shot_id)
            .ok_or(RangeError::ShotNotFound(shot_id))?;
        store.save_session(&session).map_err(RangeError::Store)?;
        tracing::info!("Removed shot {} from session {}", shot_id, session_id);
        Ok(shot)
    }

    /// Finish a session, returning its final statistics
    ///
    /// The session stays in history.
    pub fn end_session<S: SessionStore>(
        &self,
        store: &S,
        session_id: SessionId,
    ) -> Result<RangeStats, RangeError<S::Error>> {
        let stats = self.session_stats(store, session_id)?;
        tracing::info!(
            "Ended session {}: {} shots, median {}",
            session_id,
            stats.count,
            stats.median
        );
        Ok(stats)
    }

    /// Permanently delete a session and its shots
    pub fn delete_session<S: SessionStore>(
        &self,
        store: &mut S,
        session_id: SessionId,
    ) -> Result<(), RangeError<S::Error>> {
        if !store.delete_session(session_id).map_err(RangeError::Store)? {
            return Err(RangeError::SessionNotFound(session_id));
        }
        tracing::info!("Deleted session {}", session_id);
        Ok(())
    }

    /// All sessions, newest first
    pub fn fetch_sessions<S: SessionStore>(
        &self,
        store: &S,
    ) -> Result<Vec<RangeSession>, RangeError<S::Error>> {
        let sessions = store.fetch_sessions().map_err(RangeError::Store)?;
        tracing::debug!("Fetched {} sessions", sessions.len());
        Ok(sessions)
    }

    /// Statistics over a session's shots
    pub fn session_stats<S: SessionStore>(
        &self,
        store: &S,
        session_id: SessionId,
    ) -> Result<RangeStats, RangeError<S::Error>> {
        Ok(self.get_session(store, session_id)?.stats())
    }

    /// Save the session's median as the representative distance for its combination
    pub fn save_as_stored_shot_type<S: SessionStore>(
        &self,
        store: &mut S,
        session_id: SessionId,
    ) -> Result<StoredShotType, RangeError<S::Error>> {
        let session = self.get_session(store, session_id)?;
        if session.shots.is_empty() {
            return Err(RangeError::EmptySession(session_id));
        }
        let record = StoredShotType::from_session(&session, current_timestamp());
        store
            .insert_stored_shot_type(&record)
            .map_err(RangeError::Store)?;
        tracing::info!(
            "Saved {} / {} at {} yards",
            record.club_name,
            record.shot_type_name,
            record.distance
        );
        Ok(record)
    }

    /// All saved session results, newest first
    pub fn fetch_stored_shot_types<S: SessionStore>(
        &self,
        store: &S,
    ) -> Result<Vec<StoredShotType>, RangeError<S::Error>> {
        store.fetch_stored_shot_types().map_err(RangeError::Store)
    }
}
