//! Core Janitor implementation for archive purging and nickname backfill

use crate::{JanitorConfig, JanitorError, JanitorMetrics};
use std::fmt::Display;
use std::time::Instant;
use yardbook_domain::clock::current_timestamp;
use yardbook_domain::traits::ClubStore;
use yardbook_lifecycle::{ClubLifecycleManager, LifecycleError};

/// Janitor service for scheduled bag maintenance
///
/// Responsible for:
/// - Purging archived shot types past the retention window
/// - Backfilling nicknames for clubs that have none
/// - Collecting metrics on maintenance operations
///
/// # Examples
///
/// ```no_run
/// use yardbook_janitor::{Janitor, JanitorConfig};
/// use yardbook_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new(":memory:")?;
/// let mut janitor = Janitor::default_config();
///
/// // Perform a single sweep
/// let metrics = janitor.sweep(&mut store)?;
/// println!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct Janitor {
    config: JanitorConfig,
    manager: ClubLifecycleManager,
    metrics: JanitorMetrics,
}

impl Janitor {
    /// Create a new Janitor with the given configuration and lifecycle rules
    pub fn new(config: JanitorConfig, manager: ClubLifecycleManager) -> Self {
        Self {
            config,
            manager,
            metrics: JanitorMetrics::new(),
        }
    }

    /// Create a Janitor with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default(), ClubLifecycleManager::default_config())
    }

    /// The configuration in force
    pub fn config(&self) -> &JanitorConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &JanitorMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Perform a complete sweep cycle as of now
    pub fn sweep<S>(&mut self, store: &mut S) -> Result<JanitorMetrics, JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        self.sweep_at(store, current_timestamp())
    }

    /// Perform a complete sweep cycle as of `now`
    ///
    /// 1. Purges archived shot types past retention (or counts them in dry-run)
    /// 2. Backfills empty nicknames if enabled
    ///
    /// Returns the updated metrics after the sweep.
    pub fn sweep_at<S>(&mut self, store: &mut S, now: u64) -> Result<JanitorMetrics, JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        let start = Instant::now();

        self.purge_expired(store, now)?;
        if self.config.backfill_nicknames {
            self.backfill(store)?;
        }

        self.metrics.record_sweep(now);
        self.metrics.total_runtime_secs += start.elapsed().as_secs();
        Ok(self.metrics.clone())
    }

    fn purge_expired<S>(&mut self, store: &mut S, now: u64) -> Result<usize, JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        if self.config.dry_run {
            let expired = self
                .manager
                .expired_shot_types(store, now)
                .map_err(store_error)?;
            if !expired.is_empty() {
                tracing::info!(
                    "DRY RUN: Would purge {} archived shot types older than {} days",
                    expired.len(),
                    self.manager.config().archive_retention_days
                );
            }
            self.metrics.record_candidates(expired.len());
            return Ok(0);
        }

        let purged = self
            .manager
            .purge_expired_shot_types_at(store, now)
            .map_err(store_error)?;
        self.metrics.record_purge(purged);
        Ok(purged)
    }

    fn backfill<S>(&mut self, store: &mut S) -> Result<usize, JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        if self.config.dry_run {
            let missing = self
                .manager
                .clubs_missing_nickname(store)
                .map_err(store_error)?;
            if !missing.is_empty() {
                tracing::info!("DRY RUN: Would backfill {} nicknames", missing.len());
            }
            return Ok(0);
        }

        let updated = self.manager.backfill_nicknames(store).map_err(store_error)?;
        self.metrics.record_backfill(updated);
        Ok(updated)
    }
}

fn store_error<E: Display>(error: LifecycleError<E>) -> JanitorError {
    match error {
        LifecycleError::Store(inner) => JanitorError::Store(inner.to_string()),
        other => JanitorError::Store(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardbook_domain::clock::days_ago;
    use yardbook_domain::traits::ClubQuery;
    use yardbook_domain::{Club, ClubId};

    const NOW: u64 = 1_800_000_000;

    // Mock store for testing
    #[derive(Default)]
    struct MockStore {
        clubs: Vec<Club>,
        fail: bool,
    }

    impl ClubStore for MockStore {
        type Error = String;

        fn fetch_clubs(&self, query: &ClubQuery) -> Result<Vec<Club>, Self::Error> {
            if self.fail {
                return Err("database is locked".to_string());
            }
            Ok(self.clubs.iter().filter(|c| query.matches(c)).cloned().collect())
        }

        fn get_club(&self, id: ClubId) -> Result<Option<Club>, Self::Error> {
            Ok(self.clubs.iter().find(|c| c.id == id).cloned())
        }

        fn save_clubs(&mut self, clubs: &[Club]) -> Result<(), Self::Error> {
            for club in clubs {
                if let Some(existing) = self.clubs.iter_mut().find(|c| c.id == club.id) {
                    *existing = club.clone();
                }
            }
            Ok(())
        }

        fn delete_club(&mut self, id: ClubId) -> Result<bool, Self::Error> {
            let before = self.clubs.len();
            self.clubs.retain(|c| c.id != id);
            Ok(self.clubs.len() < before)
        }
    }

    fn store_with_expired() -> MockStore {
        let mut wedge = Club::new("Sand Wedge", "", 0);
        wedge.push_shot_type("Full", 100);
        wedge.push_shot_type("Flop", 60);
        wedge.push_shot_type("Bump", 70);
        wedge.shot_types[1].archive(days_ago(NOW, 10));
        wedge.shot_types[2].archive(days_ago(NOW, 2));

        let mut driver = Club::new("Driver", "Dr", 1);
        driver.push_shot_type("Full", 250);

        MockStore {
            clubs: vec![wedge, driver],
            fail: false,
        }
    }

    #[test]
    fn test_janitor_creation() {
        let janitor = Janitor::default_config();
        assert_eq!(janitor.metrics().sweep_count, 0);
        assert!(!janitor.config().dry_run);
    }

    #[test]
    fn test_sweep_purges_and_backfills() {
        let mut store = store_with_expired();
        let mut janitor = Janitor::default_config();

        let metrics = janitor.sweep_at(&mut store, NOW).unwrap();
        assert_eq!(metrics.purged_shot_types, 1);
        assert_eq!(metrics.nicknames_backfilled, 1);
        assert_eq!(metrics.sweep_count, 1);
        assert_eq!(metrics.last_sweep_at, Some(NOW));

        let wedge = &store.clubs[0];
        assert_eq!(wedge.nickname, "SW");
        let names: Vec<&str> = wedge.shot_types.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Full", "Bump"]);
        assert_eq!(store.clubs[1].shot_types.len(), 1);
    }

    #[test]
    fn test_sweep_respects_dry_run() {
        let mut store = store_with_expired();
        let config = JanitorConfig {
            dry_run: true,
            ..Default::default()
        };
        let mut janitor = Janitor::new(config, ClubLifecycleManager::default_config());

        let metrics = janitor.sweep_at(&mut store, NOW).unwrap();
        assert_eq!(metrics.purged_shot_types, 0);
        assert_eq!(metrics.purge_candidates, 1);
        assert_eq!(store.clubs[0].shot_types.len(), 3);
        assert_eq!(store.clubs[0].nickname, "");
    }

    #[test]
    fn test_backfill_can_be_disabled() {
        let mut store = store_with_expired();
        let config = JanitorConfig {
            backfill_nicknames: false,
            ..Default::default()
        };
        let mut janitor = Janitor::new(config, ClubLifecycleManager::default_config());

        let metrics = janitor.sweep_at(&mut store, NOW).unwrap();
        assert_eq!(metrics.nicknames_backfilled, 0);
        assert_eq!(store.clubs[0].nickname, "");
    }

    #[test]
    fn test_second_sweep_is_noop() {
        let mut store = store_with_expired();
        let mut janitor = Janitor::default_config();

        janitor.sweep_at(&mut store, NOW).unwrap();
        let metrics = janitor.sweep_at(&mut store, NOW).unwrap();
        assert_eq!(metrics.purged_shot_types, 1);
        assert_eq!(metrics.nicknames_backfilled, 1);
        assert_eq!(metrics.sweep_count, 2);
    }

    #[test]
    fn test_store_error_is_stringified() {
        let mut store = MockStore {
            fail: true,
            ..Default::default()
        };
        let mut janitor = Janitor::default_config();

        match janitor.sweep_at(&mut store, NOW) {
            Err(error @ JanitorError::Store(_)) => {
                assert_eq!(error.to_string(), "Storage error: database is locked");
            }
            other => panic!("expected store error, got {:?}", other),
        }
        assert_eq!(janitor.metrics().sweep_count, 0);
    }
}
