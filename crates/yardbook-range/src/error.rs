//! Error types for range operations

use thiserror::Error;
use yardbook_domain::{SessionId, ShotId};

/// Errors that can occur during range operations
#[derive(Error, Debug)]
pub enum RangeError<E> {
    /// Referenced session does not exist
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// Referenced shot does not exist in the session
    #[error("Shot not found: {0}")]
    ShotNotFound(ShotId),

    /// Shot distance outside 1-1000
    #[error("Invalid distance: {0} (expected 1-1000 yards)")]
    InvalidDistance(u32),

    /// No distance could be read from a spoken transcript
    #[error("No distance recognized in \"{0}\"")]
    UnrecognizedDistance(String),

    /// The session has no shots to summarize
    #[error("Session {0} has no shots")]
    EmptySession(SessionId),

    /// Storage layer error, propagated unchanged
    #[error("Storage error: {0}")]
    Store(E),
}
