//! Range session module - practice sessions and logged shots

use crate::ids::{SessionId, ShotId, StoredShotTypeId};
use crate::stats::RangeStats;

/// A practice session tracking one club/shot-type combination
///
/// The club and shot-type names are captured by value so that history stays
/// readable after the club is renamed or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSession {
    /// Unique identifier
    pub id: SessionId,

    /// When the session started
    pub started_at: u64,

    /// Club name at the time of the session
    pub club_name: String,

    /// Shot-type name at the time of the session
    pub shot_type_name: String,

    /// Logged shots in the order they were hit
    pub shots: Vec<Shot>,
}

impl RangeSession {
    /// Start a new empty session
    pub fn new(
        club_name: impl Into<String>,
        shot_type_name: impl Into<String>,
        started_at: u64,
    ) -> Self {
        Self {
            id: SessionId::new(),
            started_at,
            club_name: club_name.into(),
            shot_type_name: shot_type_name.into(),
            shots: Vec::new(),
        }
    }

    /// Log a shot, returning a reference to it
    pub fn push_shot(&mut self, distance: u32, is_from_voice: bool, recorded_at: u64) -> &Shot {
        self.shots.push(Shot {
            id: ShotId::new(),
            session_id: self.id,
            distance,
            recorded_at,
            is_from_voice,
        });
        &self.shots[self.shots.len() - 1]
    }

    /// Remove a shot by id, returning it
    pub fn remove_shot(&mut self, id: ShotId) -> Option<Shot> {
        let index = self.shots.iter().position(|s| s.id == id)?;
        Some(self.shots.remove(index))
    }

    /// Logged distances in hit order
    pub fn distances(&self) -> Vec<u32> {
        self.shots.iter().map(|s| s.distance).collect()
    }

    /// Dispersion statistics over the logged shots
    pub fn stats(&self) -> RangeStats {
        RangeStats::from_distances(&self.distances())
    }
}

/// A single logged shot
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    /// Unique identifier
    pub id: ShotId,

    /// Owning session
    pub session_id: SessionId,

    /// Carry distance in yards
    pub distance: u32,

    /// When the shot was logged
    pub recorded_at: u64,

    /// Captured through voice input rather than typed
    pub is_from_voice: bool,
}

/// A session result saved as the representative distance for a combination
#[derive(Debug, Clone, PartialEq)]
pub struct StoredShotType {
    /// Unique identifier
    pub id: StoredShotTypeId,

    /// Club name copied from the session
    pub club_name: String,

    /// Shot-type name copied from the session
    pub shot_type_name: String,

    /// Median carry of the session
    pub distance: u32,

    /// When the result was saved
    pub recorded_at: u64,
}

impl StoredShotType {
    /// Build a stored result from a session, using the median as the distance
    pub fn from_session(session: &RangeSession, recorded_at: u64) -> Self {
        Self {
            id: StoredShotTypeId::new(),
            club_name: session.club_name.clone(),
            shot_type_name: session.shot_type_name.clone(),
            distance: session.stats().median,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove_shot() {
        let mut session = RangeSession::new("7 Iron", "Full", 1_000);
        let first = session.push_shot(160, false, 1_001).id;
        session.push_shot(165, true, 1_002);

        assert_eq!(session.shots[1].session_id, session.id);
        assert!(session.shots[1].is_from_voice);
        assert!(session.remove_shot(first).is_some());
        assert_eq!(session.distances(), vec![165]);
    }

    #[test]
    fn test_stored_shot_type_uses_median() {
        let mut session = RangeSession::new("7 Iron", "Full", 1_000);
        for d in [155, 160, 165, 170, 200] {
            session.push_shot(d, false, 1_000);
        }

        let stored = StoredShotType::from_session(&session, 2_000);
        assert_eq!(stored.distance, 165);
        assert_eq!(stored.club_name, "7 Iron");
        assert_eq!(stored.shot_type_name, "Full");
    }
}
