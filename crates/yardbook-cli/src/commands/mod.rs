//! Command implementations.
//!
//! Clubs and shot types are addressed by name, nickname or ID; sessions and
//! shots by ID or a unique ID prefix.

pub mod clubs;
pub mod ladder;
pub mod maintain;
pub mod profile;
pub mod range;
pub mod recommend;
pub mod seed;
pub mod settings;
pub mod shots;

pub use self::clubs::execute_clubs;
pub use self::ladder::execute_ladder;
pub use self::maintain::execute_maintain;
pub use self::profile::execute_profile;
pub use self::range::execute_range;
pub use self::recommend::execute_recommend;
pub use self::seed::execute_seed;
pub use self::settings::execute_settings;
pub use self::shots::execute_shots;

use crate::error::{CliError, Result};
use yardbook_domain::traits::{ClubQuery, ClubStore, SessionStore};
use yardbook_domain::{
    Club, ClubId, GolfModeState, RangeSession, SessionId, ShotId, ShotType, ShotTypeFilter,
    ShotTypeId,
};
use yardbook_lifecycle::{ClubLifecycleManager, ProfileService, SettingsService};
use yardbook_store::SqliteStore;

/// Find a club (archived included) by ID, name or nickname, ignoring case.
pub(crate) fn find_club(store: &SqliteStore, key: &str) -> Result<Club> {
    let clubs = store.fetch_clubs(&ClubQuery::default())?;
    let key = key.trim();

    if let Ok(id) = ClubId::from_string(key) {
        if let Some(club) = clubs.iter().find(|c| c.id == id) {
            return Ok(club.clone());
        }
    }

    clubs
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(key))
        .or_else(|| clubs.iter().find(|c| c.nickname.eq_ignore_ascii_case(key)))
        .cloned()
        .ok_or_else(|| CliError::NotFound(format!("club '{}'", key)))
}

/// Find a shot type on a club by ID or name; active shot types win name ties.
pub(crate) fn find_shot_type<'a>(club: &'a Club, key: &str) -> Result<&'a ShotType> {
    let key = key.trim();

    if let Ok(id) = ShotTypeId::from_string(key) {
        if let Some(shot) = club.shot_type(id) {
            return Ok(shot);
        }
    }

    club.active_shot_types()
        .find(|s| s.name.eq_ignore_ascii_case(key))
        .or_else(|| club.archived_shot_types().find(|s| s.name.eq_ignore_ascii_case(key)))
        .ok_or_else(|| CliError::NotFound(format!("shot type '{}' on {}", key, club.name)))
}

/// Find a session by full ID or unique ID prefix.
pub(crate) fn find_session(store: &SqliteStore, key: &str) -> Result<RangeSession> {
    let key = key.trim();

    if let Ok(id) = SessionId::from_string(key) {
        if let Some(session) = store.get_session(id)? {
            return Ok(session);
        }
    }

    let sessions = store.fetch_sessions()?;
    let ids: Vec<String> = sessions.iter().map(|s| s.id.to_string()).collect();
    let index = unique_prefix_match(&ids, key, "session")?;
    Ok(sessions[index].clone())
}

/// Find a shot in a session by full ID or unique ID prefix.
pub(crate) fn find_shot(session: &RangeSession, key: &str) -> Result<ShotId> {
    let ids: Vec<String> = session.shots.iter().map(|s| s.id.to_string()).collect();
    let index = unique_prefix_match(&ids, key.trim(), "shot")?;
    Ok(session.shots[index].id)
}

fn unique_prefix_match(ids: &[String], key: &str, kind: &str) -> Result<usize> {
    if key.is_empty() {
        return Err(CliError::InvalidInput(format!("Empty {} ID", kind)));
    }
    let key = key.to_ascii_lowercase();
    let matches: Vec<usize> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| id.starts_with(&key))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(CliError::NotFound(format!("{} '{}'", kind, key))),
        _ => Err(CliError::InvalidInput(format!(
            "{} ID prefix '{}' is ambiguous ({} matches)",
            kind,
            key,
            matches.len()
        ))),
    }
}

/// Parse a shot-type filter argument; absent means every shot type.
pub(crate) fn parse_filter(arg: Option<&str>) -> Result<ShotTypeFilter> {
    match arg {
        Some(raw) => raw.parse().map_err(CliError::InvalidInput),
        None => Ok(ShotTypeFilter::All),
    }
}

/// Golf-mode state over the active bag, profile and settings.
pub(crate) fn load_golf_mode(
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    target: u32,
    filter: ShotTypeFilter,
) -> Result<GolfModeState> {
    let clubs = manager.fetch_clubs(&*store)?;
    let profile = ProfileService::new().get_or_create_profile(store)?;
    let settings = SettingsService::new().get_or_create_settings(store)?;

    let mut state = GolfModeState::new();
    state.reload(&clubs, &profile, &settings);
    state.set_filter(filter);
    state.set_target_yardage(target);
    Ok(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::OutputFormat;
    use crate::output::Formatter;
    use yardbook_lifecycle::ClubLifecycleManager;
    use yardbook_store::SqliteStore;

    pub fn store() -> SqliteStore {
        SqliteStore::new(":memory:").unwrap()
    }

    pub fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    /// A bag with a 7 Iron (Full 165, 3/4 150) and a Pitching Wedge (Full 125)
    pub fn small_bag(store: &mut SqliteStore) -> ClubLifecycleManager {
        let manager = ClubLifecycleManager::default_config();
        let seven = manager.add_club(store, "7 Iron", 165, Some("7I")).unwrap();
        manager.add_shot_type(store, seven.id, "3/4", 150).unwrap();
        manager.add_club(store, "Pitching Wedge", 125, Some("PW")).unwrap();
        manager
    }
}
