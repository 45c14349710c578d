//! Club and shot-type lifecycle operations

use crate::seed::default_bag;
use crate::{LifecycleConfig, LifecycleError};
use rand::Rng;
use std::collections::BTreeSet;
use yardbook_domain::clock::current_timestamp;
use yardbook_domain::club::FULL_SHOT_TYPE;
use yardbook_domain::nickname::generate as generate_nickname;
use yardbook_domain::traits::{ClubQuery, ClubStore};
use yardbook_domain::validation::is_valid_distance;
use yardbook_domain::{Club, ClubId, ShotType, ShotTypeId};

/// Partial update for a club; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ClubUpdate {
    /// New display name
    pub name: Option<String>,

    /// New nickname
    pub nickname: Option<String>,
}

/// Enforces the bag rules over a [`ClubStore`]
///
/// Each mutating operation validates against the current stored state, then
/// issues exactly one store write (`save_clubs` or `delete_club`). A rejected
/// operation performs no write at all.
///
/// # Examples
///
/// ```no_run
/// use yardbook_lifecycle::{ClubLifecycleManager, LifecycleError};
/// use yardbook_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new(":memory:")?;
/// let manager = ClubLifecycleManager::default_config();
///
/// let club = manager.add_club(&mut store, "Driver", 250, None)?;
/// let only = club.shot_types[0].id;
///
/// // The last active shot type cannot be archived
/// match manager.archive_shot_type(&mut store, club.id, only) {
///     Err(LifecycleError::MinimumShotTypesRequired(_)) => {}
///     other => panic!("unexpected: {:?}", other.map(|s| s.name)),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClubLifecycleManager {
    config: LifecycleConfig,
}

impl ClubLifecycleManager {
    /// Create a manager with the given limits
    pub fn new(config: LifecycleConfig) -> Self {
        Self { config }
    }

    /// Create a manager with the default limits
    pub fn default_config() -> Self {
        Self::new(LifecycleConfig::default())
    }

    /// The limits in force
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Active clubs ordered by sort order
    pub fn fetch_clubs<S: ClubStore>(
        &self,
        store: &S,
    ) -> Result<Vec<Club>, LifecycleError<S::Error>> {
        let clubs = store
            .fetch_clubs(&ClubQuery::active())
            .map_err(LifecycleError::Store)?;
        tracing::debug!("Fetched {} active clubs", clubs.len());
        Ok(clubs)
    }

    /// Archived clubs ordered by sort order
    pub fn fetch_archived_clubs<S: ClubStore>(
        &self,
        store: &S,
    ) -> Result<Vec<Club>, LifecycleError<S::Error>> {
        let clubs = store
            .fetch_clubs(&ClubQuery::archived())
            .map_err(LifecycleError::Store)?;
        tracing::debug!("Fetched {} archived clubs", clubs.len());
        Ok(clubs)
    }

    /// A single club by id
    pub fn get_club<S: ClubStore>(
        &self,
        store: &S,
        id: ClubId,
    ) -> Result<Club, LifecycleError<S::Error>> {
        store
            .get_club(id)
            .map_err(LifecycleError::Store)?
            .ok_or(LifecycleError::ClubNotFound(id))
    }

    /// Add a club with a single "Full" shot type
    ///
    /// The nickname is `nickname` if supplied, else generated from `name`.
    pub fn add_club<S: ClubStore>(
        &self,
        store: &mut S,
        name: &str,
        default_distance: u32,
        nickname: Option<&str>,
    ) -> Result<Club, LifecycleError<S::Error>> {
        check_distance::<S::Error>(default_distance)?;
        let active = self.active_club_count(store)?;
        if active >= self.config.max_clubs {
            tracing::warn!("Rejected club '{}': {} active clubs already", name, active);
            return Err(LifecycleError::MaximumClubsReached(self.config.max_clubs));
        }

        let nickname = match nickname {
            Some(nickname) => nickname.to_string(),
            None => generate_nickname(name),
        };
        let mut club = Club::new(name, nickname, active as u32);
        club.push_shot_type(FULL_SHOT_TYPE, default_distance);

        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!(
            "Added club '{}' ({}) at {} yards",
            club.name,
            club.id,
            default_distance
        );
        Ok(club)
    }

    /// Move a club to the archived listing
    pub fn archive_club<S: ClubStore>(
        &self,
        store: &mut S,
        id: ClubId,
    ) -> Result<Club, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, id)?;
        if club.is_archived {
            return Ok(club);
        }
        club.is_archived = true;
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Archived club '{}'", club.name);
        Ok(club)
    }

    /// Bring an archived club back into the bag
    ///
    /// Fails with `MaximumClubsReached` if the bag is already full.
    pub fn restore_club<S: ClubStore>(
        &self,
        store: &mut S,
        id: ClubId,
    ) -> Result<Club, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, id)?;
        if !club.is_archived {
            return Ok(club);
        }
        let active = self.active_club_count(store)?;
        if active >= self.config.max_clubs {
            tracing::warn!("Rejected restore of '{}': {} active clubs already", club.name, active);
            return Err(LifecycleError::MaximumClubsReached(self.config.max_clubs));
        }
        club.is_archived = false;
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Restored club '{}'", club.name);
        Ok(club)
    }

    /// Permanently delete a club and all its shot types
    pub fn delete_club<S: ClubStore>(
        &self,
        store: &mut S,
        id: ClubId,
    ) -> Result<(), LifecycleError<S::Error>> {
        if !store.delete_club(id).map_err(LifecycleError::Store)? {
            return Err(LifecycleError::ClubNotFound(id));
        }
        tracing::info!("Deleted club {}", id);
        Ok(())
    }

    /// Apply a partial update to a club's name and nickname
    pub fn update_club<S: ClubStore>(
        &self,
        store: &mut S,
        id: ClubId,
        update: ClubUpdate,
    ) -> Result<Club, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, id)?;
        if let Some(name) = update.name {
            club.name = name;
        }
        if let Some(nickname) = update.nickname {
            club.nickname = nickname;
        }
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Updated club {} ('{}', '{}')", club.id, club.name, club.nickname);
        Ok(club)
    }

    /// Assign sort orders 0..N-1 following `ordered`
    ///
    /// Callers pass the complete active set; clubs left out keep their
    /// current position, which may then collide.
    pub fn reorder_clubs<S: ClubStore>(
        &self,
        store: &mut S,
        ordered: &[ClubId],
    ) -> Result<Vec<Club>, LifecycleError<S::Error>> {
        let mut clubs = Vec::with_capacity(ordered.len());
        for (position, id) in ordered.iter().enumerate() {
            let mut club = self.get_club(store, *id)?;
            club.sort_order = position as u32;
            clubs.push(club);
        }
        store.save_clubs(&clubs).map_err(LifecycleError::Store)?;
        tracing::info!("Reordered {} clubs", clubs.len());
        Ok(clubs)
    }

    /// Add a shot type to a club
    pub fn add_shot_type<S: ClubStore>(
        &self,
        store: &mut S,
        club_id: ClubId,
        name: &str,
        distance: u32,
    ) -> Result<ShotType, LifecycleError<S::Error>> {
        check_distance::<S::Error>(distance)?;
        let mut club = self.get_club(store, club_id)?;
        if club.active_shot_type_count() >= self.config.max_shot_types_per_club {
            tracing::warn!("Rejected shot type '{}' on '{}': club is full", name, club.name);
            return Err(LifecycleError::MaximumShotTypesReached(
                self.config.max_shot_types_per_club,
            ));
        }

        let shot_type = club.push_shot_type(name, distance).clone();
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!(
            "Added shot type '{}' to '{}' at {} yards",
            shot_type.name,
            club.name,
            distance
        );
        Ok(shot_type)
    }

    /// Replace a shot type's name and carry distance
    pub fn update_shot_type<S: ClubStore>(
        &self,
        store: &mut S,
        club_id: ClubId,
        shot_type_id: ShotTypeId,
        name: &str,
        distance: u32,
    ) -> Result<ShotType, LifecycleError<S::Error>> {
        check_distance::<S::Error>(distance)?;
        let mut club = self.get_club(store, club_id)?;
        let shot_type = club
            .shot_type_mut(shot_type_id)
            .ok_or(LifecycleError::ShotTypeNotFound(shot_type_id))?;
        shot_type.name = name.to_string();
        shot_type.carry_distance = distance;
        let updated = shot_type.clone();

        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Updated shot type {} on '{}'", shot_type_id, club.name);
        Ok(updated)
    }

    /// Archive a shot type as of now
    ///
    /// Fails with `MinimumShotTypesRequired` if it is the club's last active
    /// shot type. Archiving an already-archived shot type changes nothing.
    pub fn archive_shot_type<S: ClubStore>(
        &self,
        store: &mut S,
        club_id: ClubId,
        shot_type_id: ShotTypeId,
    ) -> Result<ShotType, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, club_id)?;
        let active = club.active_shot_type_count();
        let shot_type = club
            .shot_type_mut(shot_type_id)
            .ok_or(LifecycleError::ShotTypeNotFound(shot_type_id))?;
        if shot_type.is_archived {
            return Ok(shot_type.clone());
        }
        let minimum = self.config.min_active_shot_types();
        if active <= minimum {
            tracing::warn!("Rejected archive of '{}': last active shot type", shot_type.name);
            return Err(LifecycleError::MinimumShotTypesRequired(minimum));
        }

        shot_type.archive(current_timestamp());
        let archived = shot_type.clone();
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Archived shot type '{}' on '{}'", archived.name, club.name);
        Ok(archived)
    }

    /// Clear a shot type's archived flag and timestamp
    pub fn restore_shot_type<S: ClubStore>(
        &self,
        store: &mut S,
        club_id: ClubId,
        shot_type_id: ShotTypeId,
    ) -> Result<ShotType, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, club_id)?;
        let shot_type = club
            .shot_type_mut(shot_type_id)
            .ok_or(LifecycleError::ShotTypeNotFound(shot_type_id))?;
        shot_type.restore();
        let restored = shot_type.clone();

        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Restored shot type '{}' on '{}'", restored.name, club.name);
        Ok(restored)
    }

    /// Permanently remove a shot type from its club
    ///
    /// Fails with `MinimumShotTypesRequired` if it is the club's last active
    /// shot type.
    pub fn delete_shot_type<S: ClubStore>(
        &self,
        store: &mut S,
        club_id: ClubId,
        shot_type_id: ShotTypeId,
    ) -> Result<ShotType, LifecycleError<S::Error>> {
        let mut club = self.get_club(store, club_id)?;
        let is_archived = club
            .shot_type(shot_type_id)
            .ok_or(LifecycleError::ShotTypeNotFound(shot_type_id))?
            .is_archived;
        let minimum = self.config.min_active_shot_types();
        if !is_archived && club.active_shot_type_count() <= minimum {
            tracing::warn!("Rejected delete on '{}': last active shot type", club.name);
            return Err(LifecycleError::MinimumShotTypesRequired(minimum));
        }

        let removed = club
            .remove_shot_type(shot_type_id)
            .ok_or(LifecycleError::ShotTypeNotFound(shot_type_id))?;
        store
            .save_clubs(std::slice::from_ref(&club))
            .map_err(LifecycleError::Store)?;
        tracing::info!("Deleted shot type '{}' from '{}'", removed.name, club.name);
        Ok(removed)
    }

    /// Archived shot types past the retention window as of `now`
    pub fn expired_shot_types<S: ClubStore>(
        &self,
        store: &S,
        now: u64,
    ) -> Result<Vec<ShotType>, LifecycleError<S::Error>> {
        let clubs = store
            .fetch_clubs(&ClubQuery::default())
            .map_err(LifecycleError::Store)?;
        Ok(clubs
            .into_iter()
            .flat_map(|club| club.shot_types)
            .filter(|s| s.is_expired(now, self.config.archive_retention_days))
            .collect())
    }

    /// Delete every expired archived shot type
    pub fn purge_expired_shot_types<S: ClubStore>(
        &self,
        store: &mut S,
    ) -> Result<usize, LifecycleError<S::Error>> {
        self.purge_expired_shot_types_at(store, current_timestamp())
    }

    /// Delete every archived shot type past the retention window as of `now`
    ///
    /// Clubs and active shot types are never touched. Returns the number of
    /// shot types removed; with nothing expired no write is issued.
    pub fn purge_expired_shot_types_at<S: ClubStore>(
        &self,
        store: &mut S,
        now: u64,
    ) -> Result<usize, LifecycleError<S::Error>> {
        let retention = self.config.archive_retention_days;
        let mut purged = 0;
        let mut changed = Vec::new();

        for mut club in store
            .fetch_clubs(&ClubQuery::default())
            .map_err(LifecycleError::Store)?
        {
            let before = club.shot_types.len();
            club.shot_types.retain(|s| !s.is_expired(now, retention));
            let removed = before - club.shot_types.len();
            if removed > 0 {
                purged += removed;
                changed.push(club);
            }
        }

        if changed.is_empty() {
            tracing::debug!("No expired shot types to purge");
            return Ok(0);
        }

        store.save_clubs(&changed).map_err(LifecycleError::Store)?;
        tracing::info!("Purged {} expired shot types from {} clubs", purged, changed.len());
        Ok(purged)
    }

    /// Clubs whose nickname is empty
    pub fn clubs_missing_nickname<S: ClubStore>(
        &self,
        store: &S,
    ) -> Result<Vec<Club>, LifecycleError<S::Error>> {
        let clubs = store
            .fetch_clubs(&ClubQuery::default())
            .map_err(LifecycleError::Store)?;
        Ok(clubs.into_iter().filter(|c| c.nickname.is_empty()).collect())
    }

    /// Generate nicknames for every club that has none
    ///
    /// Returns the number of clubs updated.
    pub fn backfill_nicknames<S: ClubStore>(
        &self,
        store: &mut S,
    ) -> Result<usize, LifecycleError<S::Error>> {
        let mut clubs = self.clubs_missing_nickname(store)?;
        if clubs.is_empty() {
            return Ok(0);
        }
        for club in &mut clubs {
            club.nickname = generate_nickname(&club.name);
        }
        store.save_clubs(&clubs).map_err(LifecycleError::Store)?;
        tracing::info!("Backfilled nicknames for {} clubs", clubs.len());
        Ok(clubs.len())
    }

    /// Seed the standard bag if no clubs exist at all
    ///
    /// Returns true if the bag was created, false if any club (active or
    /// archived) already existed.
    pub fn load_default_seed<S: ClubStore, R: Rng>(
        &self,
        store: &mut S,
        rng: &mut R,
    ) -> Result<bool, LifecycleError<S::Error>> {
        let existing = store
            .fetch_clubs(&ClubQuery {
                limit: Some(1),
                ..Default::default()
            })
            .map_err(LifecycleError::Store)?;
        if !existing.is_empty() {
            tracing::debug!("Clubs already exist, skipping default seed");
            return Ok(false);
        }

        let bag = default_bag(rng);
        store.save_clubs(&bag).map_err(LifecycleError::Store)?;
        tracing::info!("Seeded {} default clubs", bag.len());
        Ok(true)
    }

    /// Distinct shot-type names across all clubs, sorted
    pub fn unique_shot_type_names<S: ClubStore>(
        &self,
        store: &S,
    ) -> Result<Vec<String>, LifecycleError<S::Error>> {
        let clubs = store
            .fetch_clubs(&ClubQuery::default())
            .map_err(LifecycleError::Store)?;
        let names: BTreeSet<String> = clubs
            .into_iter()
            .flat_map(|club| club.shot_types)
            .map(|s| s.name)
            .collect();
        Ok(names.into_iter().collect())
    }

    fn active_club_count<S: ClubStore>(
        &self,
        store: &S,
    ) -> Result<usize, LifecycleError<S::Error>> {
        Ok(store
            .fetch_clubs(&ClubQuery::active())
            .map_err(LifecycleError::Store)?
            .len())
    }
}

fn check_distance<E>(distance: u32) -> Result<(), LifecycleError<E>> {
    if is_valid_distance(distance) {
        Ok(())
    } else {
        Err(LifecycleError::InvalidDistance(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use yardbook_domain::clock::days_ago;

    // Mock store for testing
    #[derive(Default)]
    struct MockStore {
        clubs: Vec<Club>,
        writes: usize,
        fail_writes: bool,
    }

    impl ClubStore for MockStore {
        type Error = String;

        fn fetch_clubs(&self, query: &ClubQuery) -> Result<Vec<Club>, Self::Error> {
            let mut results: Vec<Club> = self
                .clubs
                .iter()
                .filter(|c| query.matches(c))
                .cloned()
                .collect();
            results.sort_by_key(|c| c.sort_order);
            if let Some(limit) = query.limit {
                results.truncate(limit);
            }
            Ok(results)
        }

        fn get_club(&self, id: ClubId) -> Result<Option<Club>, Self::Error> {
            Ok(self.clubs.iter().find(|c| c.id == id).cloned())
        }

        fn save_clubs(&mut self, clubs: &[Club]) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err("disk full".to_string());
            }
            self.writes += 1;
            for club in clubs {
                match self.clubs.iter_mut().find(|c| c.id == club.id) {
                    Some(existing) => *existing = club.clone(),
                    None => self.clubs.push(club.clone()),
                }
            }
            Ok(())
        }

        fn delete_club(&mut self, id: ClubId) -> Result<bool, Self::Error> {
            if self.fail_writes {
                return Err("disk full".to_string());
            }
            self.writes += 1;
            let before = self.clubs.len();
            self.clubs.retain(|c| c.id != id);
            Ok(self.clubs.len() < before)
        }
    }

    fn manager() -> ClubLifecycleManager {
        ClubLifecycleManager::default_config()
    }

    #[test]
    fn test_add_club_creates_full_shot_type() {
        let mut store = MockStore::default();
        let club = manager().add_club(&mut store, "7 Iron", 165, None).unwrap();

        assert_eq!(club.nickname, "7I");
        assert_eq!(club.sort_order, 0);
        assert_eq!(club.shot_types.len(), 1);
        assert_eq!(club.shot_types[0].name, FULL_SHOT_TYPE);
        assert_eq!(club.shot_types[0].carry_distance, 165);
        assert_eq!(club.shot_types[0].club_id, club.id);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_add_club_custom_nickname_and_sort_order() {
        let mut store = MockStore::default();
        let manager = manager();
        manager.add_club(&mut store, "Driver", 250, None).unwrap();
        let club = manager.add_club(&mut store, "Putter", 1, Some("Flat Stick")).unwrap();

        assert_eq!(club.nickname, "Flat Stick");
        assert_eq!(club.sort_order, 1);
    }

    #[test]
    fn test_add_club_rejects_invalid_distance() {
        let mut store = MockStore::default();
        let result = manager().add_club(&mut store, "Driver", 0, None);
        assert!(matches!(result, Err(LifecycleError::InvalidDistance(0))));
        let result = manager().add_club(&mut store, "Driver", 1001, None);
        assert!(matches!(result, Err(LifecycleError::InvalidDistance(1001))));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_fourteenth_club_rejected_until_one_archived() {
        let mut store = MockStore::default();
        let manager = manager();
        let mut first = None;
        for i in 0..13 {
            let club = manager.add_club(&mut store, &format!("Club {}", i), 100 + i, None).unwrap();
            first.get_or_insert(club.id);
        }

        let writes = store.writes;
        let result = manager.add_club(&mut store, "Extra", 120, None);
        assert!(matches!(result, Err(LifecycleError::MaximumClubsReached(13))));
        assert_eq!(store.writes, writes, "Rejected add must not write");
        assert_eq!(store.clubs.len(), 13);

        manager.archive_club(&mut store, first.unwrap()).unwrap();
        let extra = manager.add_club(&mut store, "Extra", 120, None).unwrap();
        assert_eq!(extra.sort_order, 12);
        assert_eq!(manager.fetch_clubs(&store).unwrap().len(), 13);
    }

    #[test]
    fn test_zero_minimum_still_keeps_one_shot_type() {
        let mut store = MockStore::default();
        let manager = ClubLifecycleManager::new(LifecycleConfig {
            min_shot_types_per_club: 0,
            ..Default::default()
        });
        let driver = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        let only = driver.shot_types[0].id;

        let archived = manager.archive_shot_type(&mut store, driver.id, only);
        assert!(matches!(archived, Err(LifecycleError::MinimumShotTypesRequired(1))));
        let deleted = manager.delete_shot_type(&mut store, driver.id, only);
        assert!(matches!(deleted, Err(LifecycleError::MinimumShotTypesRequired(1))));

        let club = manager.get_club(&store, driver.id).unwrap();
        assert_eq!(club.active_shot_type_count(), 1);
    }

    #[test]
    fn test_restore_club_respects_cap() {
        let mut store = MockStore::default();
        let manager = ClubLifecycleManager::new(LifecycleConfig {
            max_clubs: 1,
            ..Default::default()
        });
        let driver = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        manager.archive_club(&mut store, driver.id).unwrap();
        manager.add_club(&mut store, "3 Wood", 230, None).unwrap();

        let result = manager.restore_club(&mut store, driver.id);
        assert!(matches!(result, Err(LifecycleError::MaximumClubsReached(1))));
    }

    #[test]
    fn test_archive_and_restore_club_listings() {
        let mut store = MockStore::default();
        let manager = manager();
        let driver = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        manager.add_club(&mut store, "7 Iron", 165, None).unwrap();

        manager.archive_club(&mut store, driver.id).unwrap();
        let active = manager.fetch_clubs(&store).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "7 Iron");
        let archived = manager.fetch_archived_clubs(&store).unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].id, driver.id);

        let restored = manager.restore_club(&mut store, driver.id).unwrap();
        assert!(!restored.is_archived);
        assert_eq!(manager.fetch_clubs(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_club() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "Driver", 250, None).unwrap();

        manager.delete_club(&mut store, club.id).unwrap();
        assert!(store.clubs.is_empty());

        let result = manager.delete_club(&mut store, club.id);
        assert!(matches!(result, Err(LifecycleError::ClubNotFound(_))));
    }

    #[test]
    fn test_update_club_partial() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();

        let renamed = manager
            .update_club(
                &mut store,
                club.id,
                ClubUpdate {
                    name: Some("7 Iron (New)".into()),
                    nickname: None,
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "7 Iron (New)");
        assert_eq!(renamed.nickname, "7I");

        let nicknamed = manager
            .update_club(
                &mut store,
                club.id,
                ClubUpdate {
                    nickname: Some("7i".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(nicknamed.name, "7 Iron (New)");
        assert_eq!(nicknamed.nickname, "7i");
    }

    #[test]
    fn test_reorder_clubs_single_write() {
        let mut store = MockStore::default();
        let manager = manager();
        let driver = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        let iron = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let wedge = manager.add_club(&mut store, "Pitching Wedge", 135, None).unwrap();

        let writes = store.writes;
        manager
            .reorder_clubs(&mut store, &[wedge.id, driver.id, iron.id])
            .unwrap();
        assert_eq!(store.writes, writes + 1);

        let names: Vec<String> = manager
            .fetch_clubs(&store)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Pitching Wedge", "Driver", "7 Iron"]);
    }

    #[test]
    fn test_reorder_unknown_club_writes_nothing() {
        let mut store = MockStore::default();
        let manager = manager();
        let driver = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        let iron = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();

        let writes = store.writes;
        let result = manager.reorder_clubs(&mut store, &[iron.id, ClubId::new(), driver.id]);
        assert!(matches!(result, Err(LifecycleError::ClubNotFound(_))));
        assert_eq!(store.writes, writes);
        assert_eq!(store.get_club(driver.id).unwrap().unwrap().sort_order, 0);
    }

    #[test]
    fn test_add_shot_type_cap_counts_active_only() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let mut ids = Vec::new();
        for (name, distance) in [("3/4", 150), ("Hard", 172), ("1/2", 110), ("Punch", 140)] {
            ids.push(manager.add_shot_type(&mut store, club.id, name, distance).unwrap().id);
        }

        let result = manager.add_shot_type(&mut store, club.id, "Knockdown", 145);
        assert!(matches!(result, Err(LifecycleError::MaximumShotTypesReached(5))));

        manager.archive_shot_type(&mut store, club.id, ids[3]).unwrap();
        let knockdown = manager.add_shot_type(&mut store, club.id, "Knockdown", 145).unwrap();
        assert_eq!(knockdown.sort_order, 5, "Sort order counts archived shot types");

        let stored = store.get_club(club.id).unwrap().unwrap();
        assert_eq!(stored.active_shot_type_count(), 5);
        assert_eq!(stored.shot_types.len(), 6);
    }

    #[test]
    fn test_update_shot_type() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let shot_id = club.shot_types[0].id;

        let updated = manager
            .update_shot_type(&mut store, club.id, shot_id, "Punch", 140)
            .unwrap();
        assert_eq!(updated.name, "Punch");
        assert_eq!(updated.carry_distance, 140);

        let missing = manager.update_shot_type(&mut store, club.id, ShotTypeId::new(), "X", 100);
        assert!(matches!(missing, Err(LifecycleError::ShotTypeNotFound(_))));
    }

    #[test]
    fn test_cannot_archive_last_active_shot_type() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "Driver", 250, None).unwrap();
        let only = club.shot_types[0].id;

        let writes = store.writes;
        let result = manager.archive_shot_type(&mut store, club.id, only);
        assert!(matches!(result, Err(LifecycleError::MinimumShotTypesRequired(1))));
        assert_eq!(store.writes, writes);
        assert!(!store.get_club(club.id).unwrap().unwrap().shot_types[0].is_archived);
    }

    #[test]
    fn test_archive_and_restore_shot_type() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let three_quarter = manager.add_shot_type(&mut store, club.id, "3/4", 150).unwrap();

        let archived = manager.archive_shot_type(&mut store, club.id, three_quarter.id).unwrap();
        assert!(archived.is_archived);
        assert!(archived.archived_at.is_some());

        // Archiving again is a no-op
        let writes = store.writes;
        manager.archive_shot_type(&mut store, club.id, three_quarter.id).unwrap();
        assert_eq!(store.writes, writes);

        let restored = manager.restore_shot_type(&mut store, club.id, three_quarter.id).unwrap();
        assert!(!restored.is_archived);
        assert_eq!(restored.archived_at, None);
    }

    #[test]
    fn test_delete_shot_type() {
        let mut store = MockStore::default();
        let manager = manager();
        let club = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let full = club.shot_types[0].id;
        let punch = manager.add_shot_type(&mut store, club.id, "Punch", 140).unwrap();

        manager.archive_shot_type(&mut store, club.id, punch.id).unwrap();
        let result = manager.delete_shot_type(&mut store, club.id, full);
        assert!(matches!(result, Err(LifecycleError::MinimumShotTypesRequired(1))));

        let removed = manager.delete_shot_type(&mut store, club.id, punch.id).unwrap();
        assert_eq!(removed.name, "Punch");
        assert_eq!(store.get_club(club.id).unwrap().unwrap().shot_types.len(), 1);
    }

    #[test]
    fn test_purge_removes_only_expired() {
        let mut store = MockStore::default();
        let now = 1_800_000_000;
        let mut club = Club::new("7 Iron", "7I", 0);
        club.push_shot_type(FULL_SHOT_TYPE, 165);
        club.push_shot_type("Old", 150);
        club.push_shot_type("Recent", 140);
        club.shot_types[1].archive(days_ago(now, 8));
        club.shot_types[2].archive(days_ago(now, 5));
        store.clubs.push(club.clone());

        let manager = manager();
        let expired = manager.expired_shot_types(&store, now).unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "Old");

        let purged = manager.purge_expired_shot_types_at(&mut store, now).unwrap();
        assert_eq!(purged, 1);

        let stored = store.get_club(club.id).unwrap().unwrap();
        let names: Vec<&str> = stored.shot_types.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![FULL_SHOT_TYPE, "Recent"]);
        assert_eq!(stored.shot_types[1], club.shot_types[2], "Survivor is unchanged");
    }

    #[test]
    fn test_purge_nothing_expired_is_noop() {
        let mut store = MockStore::default();
        let manager = manager();
        manager.add_club(&mut store, "Driver", 250, None).unwrap();

        let writes = store.writes;
        assert_eq!(manager.purge_expired_shot_types(&mut store).unwrap(), 0);
        assert_eq!(manager.purge_expired_shot_types(&mut store).unwrap(), 0);
        assert_eq!(store.writes, writes);
        assert_eq!(store.clubs.len(), 1);
    }

    #[test]
    fn test_purge_keeps_archived_clubs() {
        let mut store = MockStore::default();
        let now = 1_800_000_000;
        let mut club = Club::new("2 Iron", "2I", 0);
        club.push_shot_type(FULL_SHOT_TYPE, 200);
        club.push_shot_type("Stinger", 210);
        club.shot_types[1].archive(days_ago(now, 30));
        club.is_archived = true;
        store.clubs.push(club);

        assert_eq!(manager().purge_expired_shot_types_at(&mut store, now).unwrap(), 1);
        assert_eq!(store.clubs.len(), 1);
        assert_eq!(store.clubs[0].shot_types.len(), 1);
    }

    #[test]
    fn test_backfill_nicknames_idempotent() {
        let mut store = MockStore::default();
        store.clubs.push(Club::new("Pitching Wedge", "", 0));
        store.clubs.push(Club::new("Driver", "Big Dog", 1));

        let manager = manager();
        assert_eq!(manager.backfill_nicknames(&mut store).unwrap(), 1);
        assert_eq!(store.clubs[0].nickname, "PW");
        assert_eq!(store.clubs[1].nickname, "Big Dog");

        let writes = store.writes;
        assert_eq!(manager.backfill_nicknames(&mut store).unwrap(), 0);
        assert_eq!(store.writes, writes);
    }

    #[test]
    fn test_load_default_seed() {
        let mut store = MockStore::default();
        let manager = manager();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(manager.load_default_seed(&mut store, &mut rng).unwrap());
        assert_eq!(store.writes, 1);

        let clubs = manager.fetch_clubs(&store).unwrap();
        assert_eq!(clubs.len(), 13);
        assert_eq!(clubs[0].name, "Driver");
        assert_eq!(clubs[0].shot_types.len(), 4);
        assert_eq!(clubs[0].shot_types[0].carry_distance, 250);
        assert_eq!(clubs[12].name, "Lob Wedge");
        assert_eq!(clubs[12].shot_types[0].carry_distance, 80);
    }

    #[test]
    fn test_load_default_seed_skips_when_clubs_exist() {
        let mut store = MockStore::default();
        let manager = manager();
        let custom = manager.add_club(&mut store, "Custom Club", 200, None).unwrap();
        manager.archive_club(&mut store, custom.id).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        assert!(!manager.load_default_seed(&mut store, &mut rng).unwrap());
        assert_eq!(store.clubs.len(), 1);
    }

    #[test]
    fn test_unique_shot_type_names() {
        let mut store = MockStore::default();
        let manager = manager();
        let iron = manager.add_club(&mut store, "7 Iron", 165, None).unwrap();
        let wedge = manager.add_club(&mut store, "Sand Wedge", 100, None).unwrap();
        manager.add_shot_type(&mut store, iron.id, "Punch", 140).unwrap();
        let half = manager.add_shot_type(&mut store, wedge.id, "1/2", 60).unwrap();
        manager.add_shot_type(&mut store, wedge.id, "Punch", 80).unwrap();
        manager.archive_shot_type(&mut store, wedge.id, half.id).unwrap();

        let names = manager.unique_shot_type_names(&store).unwrap();
        assert_eq!(names, vec!["1/2", "Full", "Punch"]);
    }

    #[test]
    fn test_store_error_propagates() {
        let mut store = MockStore {
            fail_writes: true,
            ..Default::default()
        };
        let result = manager().add_club(&mut store, "Driver", 250, None);
        match result {
            Err(LifecycleError::Store(e)) => assert_eq!(e, "disk full"),
            other => panic!("expected store error, got {:?}", other.map(|c| c.name)),
        }
        assert!(store.clubs.is_empty());
    }
}
