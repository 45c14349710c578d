//! Yardbook Storage Layer
//!
//! Implements the domain store traits (`ClubStore`, `SessionStore`,
//! `ProfileStore`) on SQLite.
//!
//! # Architecture
//!
//! - One table per entity; children reference parents by id
//! - Aggregate writes (a club with its shot types, a session with its shots)
//!   run inside a single transaction
//! - Cascades are explicit: deleting a club deletes its shot-type rows in the
//!   same transaction
//!
//! # Examples
//!
//! ```no_run
//! use yardbook_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for club and session operations
//! ```

#![warn(missing_docs)]

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use thiserror::Error;
use yardbook_domain::traits::{ClubQuery, ClubStore, ProfileStore, SessionStore};
use yardbook_domain::{
    AppSettings, Club, ClubId, ProfileId, RangeSession, SessionId, SettingsId, Shot, ShotId,
    ShotType, ShotTypeId, StoredShotType, StoredShotTypeId, UserProfile,
};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of the Yardbook store traits
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore`; domain operations take `&mut` so a single handle is a
/// single writer.
pub struct SqliteStore {
    conn: Connection,
}

const CLUB_COLUMNS: &str = "id, name, nickname, sort_order, is_archived";
const SHOT_TYPE_COLUMNS: &str =
    "id, club_id, name, carry_distance, sort_order, is_archived, archived_at";
const SESSION_COLUMNS: &str = "id, started_at, club_name, shot_type_name";

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use yardbook_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("yardbook.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Read a 16-byte id column, mapping malformed blobs to a conversion error
    fn id_column<T>(
        row: &Row<'_>,
        idx: usize,
        parse: fn(&[u8]) -> Result<T, String>,
    ) -> rusqlite::Result<T> {
        let bytes: Vec<u8> = row.get(idx)?;
        parse(&bytes)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Blob, e.into()))
    }

    fn club_from_row(row: &Row<'_>) -> rusqlite::Result<Club> {
        Ok(Club {
            id: Self::id_column(row, 0, ClubId::from_bytes)?,
            name: row.get(1)?,
            nickname: row.get(2)?,
            sort_order: row.get(3)?,
            is_archived: row.get(4)?,
            shot_types: Vec::new(),
        })
    }

    fn shot_type_from_row(row: &Row<'_>) -> rusqlite::Result<ShotType> {
        let archived_at: Option<i64> = row.get(6)?;
        Ok(ShotType {
            id: Self::id_column(row, 0, ShotTypeId::from_bytes)?,
            club_id: Self::id_column(row, 1, ClubId::from_bytes)?,
            name: row.get(2)?,
            carry_distance: row.get(3)?,
            sort_order: row.get(4)?,
            is_archived: row.get(5)?,
            archived_at: archived_at.map(|t| t as u64),
        })
    }

    fn session_from_row(row: &Row<'_>) -> rusqlite::Result<RangeSession> {
        Ok(RangeSession {
            id: Self::id_column(row, 0, SessionId::from_bytes)?,
            started_at: row.get::<_, i64>(1)? as u64,
            club_name: row.get(2)?,
            shot_type_name: row.get(3)?,
            shots: Vec::new(),
        })
    }

    /// Load a club's shot types in display order
    fn load_shot_types(&self, club_id: ClubId) -> Result<Vec<ShotType>, StoreError> {
        let sql = format!(
            "SELECT {} FROM shot_types WHERE club_id = ?1 ORDER BY sort_order, id",
            SHOT_TYPE_COLUMNS
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let shot_types = stmt
            .query_map(params![club_id.to_bytes()], Self::shot_type_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shot_types)
    }

    /// Load a session's shots in the order they were logged
    fn load_shots(&self, session_id: SessionId) -> Result<Vec<Shot>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, session_id, distance, recorded_at, is_from_voice
             FROM shots WHERE session_id = ?1 ORDER BY position",
        )?;
        let shots = stmt
            .query_map(params![session_id.to_bytes()], |row| {
                Ok(Shot {
                    id: Self::id_column(row, 0, ShotId::from_bytes)?,
                    session_id: Self::id_column(row, 1, SessionId::from_bytes)?,
                    distance: row.get(2)?,
                    recorded_at: row.get::<_, i64>(3)? as u64,
                    is_from_voice: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shots)
    }

    /// Write one club aggregate inside an open transaction
    fn write_club(tx: &Transaction<'_>, club: &Club) -> Result<(), StoreError> {
        let club_id = club.id.to_bytes();
        tx.execute(
            "INSERT INTO clubs (id, name, nickname, sort_order, is_archived)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
             name = excluded.name, nickname = excluded.nickname,
             sort_order = excluded.sort_order, is_archived = excluded.is_archived",
            params![club_id, club.name, club.nickname, club.sort_order, club.is_archived],
        )?;

        tx.execute("DELETE FROM shot_types WHERE club_id = ?1", params![club_id])?;
        for shot in &club.shot_types {
            if shot.club_id != club.id {
                return Err(StoreError::InvalidData(format!(
                    "Shot type {} belongs to club {}, not {}",
                    shot.id, shot.club_id, club.id
                )));
            }
            tx.execute(
                "INSERT INTO shot_types
                     (id, club_id, name, carry_distance, sort_order, is_archived, archived_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    shot.id.to_bytes(),
                    club_id,
                    shot.name,
                    shot.carry_distance,
                    shot.sort_order,
                    shot.is_archived,
                    shot.archived_at.map(|t| t as i64),
                ],
            )?;
        }
        Ok(())
    }
}

impl ClubStore for SqliteStore {
    type Error = StoreError;

    fn fetch_clubs(&self, query: &ClubQuery) -> Result<Vec<Club>, Self::Error> {
        let mut sql = format!("SELECT {} FROM clubs WHERE 1=1", CLUB_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(archived) = query.archived {
            sql.push_str(" AND is_archived = ?");
            params.push(Box::new(archived));
        }

        sql.push_str(" ORDER BY sort_order, id");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let mut clubs = stmt
            .query_map(&param_refs[..], Self::club_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for club in &mut clubs {
            club.shot_types = self.load_shot_types(club.id)?;
        }
        Ok(clubs)
    }

    fn get_club(&self, id: ClubId) -> Result<Option<Club>, Self::Error> {
        let sql = format!("SELECT {} FROM clubs WHERE id = ?1", CLUB_COLUMNS);
        let club = self
            .conn
            .query_row(&sql, params![id.to_bytes()], Self::club_from_row)
            .optional()?;

        match club {
            Some(mut club) => {
                club.shot_types = self.load_shot_types(club.id)?;
                Ok(Some(club))
            }
            None => Ok(None),
        }
    }

    fn save_clubs(&mut self, clubs: &[Club]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        for club in clubs {
            Self::write_club(&tx, club)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn delete_club(&mut self, id: ClubId) -> Result<bool, Self::Error> {
        let id_bytes = id.to_bytes();
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM shot_types WHERE club_id = ?1", params![id_bytes])?;
        let deleted = tx.execute("DELETE FROM clubs WHERE id = ?1", params![id_bytes])?;
        tx.commit()?;
        Ok(deleted > 0)
    }
}

impl SessionStore for SqliteStore {
    type Error = StoreError;

    fn save_session(&mut self, session: &RangeSession) -> Result<(), Self::Error> {
        let session_id = session.id.to_bytes();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO range_sessions (id, started_at, club_name, shot_type_name)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
             started_at = excluded.started_at, club_name = excluded.club_name,
             shot_type_name = excluded.shot_type_name",
            params![
                session_id,
                session.started_at as i64,
                session.club_name,
                session.shot_type_name,
            ],
        )?;

        tx.execute("DELETE FROM shots WHERE session_id = ?1", params![session_id])?;
        for (position, shot) in session.shots.iter().enumerate() {
            tx.execute(
                "INSERT INTO shots (id, session_id, position, distance, recorded_at, is_from_voice)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    shot.id.to_bytes(),
                    session_id,
                    position as i64,
                    shot.distance,
                    shot.recorded_at as i64,
                    shot.is_from_voice,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_session(&self, id: SessionId) -> Result<Option<RangeSession>, Self::Error> {
        let sql = format!("SELECT {} FROM range_sessions WHERE id = ?1", SESSION_COLUMNS);
        let session = self
            .conn
            .query_row(&sql, params![id.to_bytes()], Self::session_from_row)
            .optional()?;

        match session {
            Some(mut session) => {
                session.shots = self.load_shots(session.id)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    fn fetch_sessions(&self) -> Result<Vec<RangeSession>, Self::Error> {
        let sql = format!(
            "SELECT {} FROM range_sessions ORDER BY started_at DESC, id DESC",
            SESSION_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut sessions = stmt
            .query_map([], Self::session_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for session in &mut sessions {
            session.shots = self.load_shots(session.id)?;
        }
        Ok(sessions)
    }

    fn delete_session(&mut self, id: SessionId) -> Result<bool, Self::Error> {
        let id_bytes = id.to_bytes();
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM shots WHERE session_id = ?1", params![id_bytes])?;
        let deleted = tx.execute("DELETE FROM range_sessions WHERE id = ?1", params![id_bytes])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    fn insert_stored_shot_type(&mut self, record: &StoredShotType) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO stored_shot_types (id, club_name, shot_type_name, distance, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id.to_bytes(),
                record.club_name,
                record.shot_type_name,
                record.distance,
                record.recorded_at as i64,
            ],
        )?;
        Ok(())
    }

    fn fetch_stored_shot_types(&self) -> Result<Vec<StoredShotType>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, club_name, shot_type_name, distance, recorded_at
             FROM stored_shot_types ORDER BY recorded_at DESC, id DESC",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(StoredShotType {
                    id: Self::id_column(row, 0, StoredShotTypeId::from_bytes)?,
                    club_name: row.get(1)?,
                    shot_type_name: row.get(2)?,
                    distance: row.get(3)?,
                    recorded_at: row.get::<_, i64>(4)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

impl ProfileStore for SqliteStore {
    type Error = StoreError;

    fn load_profile(&self) -> Result<Option<UserProfile>, Self::Error> {
        let profile = self
            .conn
            .query_row(
                "SELECT id, name, handicap, primary_shot_type
                 FROM user_profile ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok(UserProfile {
                        id: Self::id_column(row, 0, ProfileId::from_bytes)?,
                        name: row.get(1)?,
                        handicap: row.get(2)?,
                        primary_shot_type: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    fn save_profile(&mut self, profile: &UserProfile) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO user_profile (id, name, handicap, primary_shot_type)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
             name = excluded.name, handicap = excluded.handicap,
             primary_shot_type = excluded.primary_shot_type",
            params![
                profile.id.to_bytes(),
                profile.name,
                profile.handicap,
                profile.primary_shot_type,
            ],
        )?;
        Ok(())
    }

    fn load_settings(&self) -> Result<Option<AppSettings>, Self::Error> {
        let settings = self
            .conn
            .query_row(
                "SELECT id, yardage_range_percentage FROM app_settings ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok(AppSettings {
                        id: Self::id_column(row, 0, SettingsId::from_bytes)?,
                        yardage_range_percentage: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(settings)
    }

    fn save_settings(&mut self, settings: &AppSettings) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO app_settings (id, yardage_range_percentage)
             VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET
             yardage_range_percentage = excluded.yardage_range_percentage",
            params![settings.id.to_bytes(), settings.yardage_range_percentage],
        )?;
        Ok(())
    }
}
