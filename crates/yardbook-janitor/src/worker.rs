//! Interval-driven maintenance worker

use crate::{Janitor, JanitorConfig, JanitorError, JanitorMetrics};
use std::fmt::Display;
use tokio::time::{interval, Duration};
use yardbook_domain::traits::ClubStore;
use yardbook_lifecycle::ClubLifecycleManager;

/// Runs [`Janitor`] sweeps on a fixed interval
///
/// # Examples
///
/// ```no_run
/// use yardbook_janitor::{JanitorWorker, JanitorConfig};
/// use yardbook_store::SqliteStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = SqliteStore::new("yardbook.db")?;
///     let mut worker = JanitorWorker::new(JanitorConfig::default(), Default::default());
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(store).await?;
///     Ok(())
/// }
/// ```
pub struct JanitorWorker {
    janitor: Janitor,
    interval: Duration,
}

impl JanitorWorker {
    /// Create a new background worker
    pub fn new(config: JanitorConfig, manager: ClubLifecycleManager) -> Self {
        let interval = config.sweep_interval();
        Self {
            janitor: Janitor::new(config, manager),
            interval,
        }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default(), ClubLifecycleManager::default_config())
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    ///
    /// A failed sweep is logged and the worker keeps going.
    pub async fn run<S>(&mut self, mut store: S) -> Result<(), JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        self.janitor.config().validate()?;
        let mut ticker = interval(self.interval);

        tracing::info!("Janitor worker started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Sweep tick");

                    match self.janitor.sweep(&mut store) {
                        Ok(metrics) => {
                            tracing::info!(
                                "Sweep completed: {} purged, {} nicknames backfilled",
                                metrics.purged_shot_types,
                                metrics.nicknames_backfilled
                            );
                        }
                        Err(e) => {
                            tracing::error!("Sweep failed: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received, stopping maintenance worker");
                    break;
                }
            }
        }

        tracing::info!("Janitor stopped. Final metrics:\n{}", self.janitor.metrics().summary());
        Ok(())
    }

    /// Run for a specific number of cycles
    ///
    /// The first cycle runs immediately; later ones wait for the interval.
    /// Stops at the first failed sweep.
    pub async fn run_cycles<S>(&mut self, mut store: S, cycles: usize) -> Result<(), JanitorError>
    where
        S: ClubStore,
        S::Error: Display,
    {
        self.janitor.config().validate()?;
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Janitor worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;

            tracing::debug!("Starting sweep cycle {}/{}", cycle + 1, cycles);

            match self.janitor.sweep(&mut store) {
                Ok(metrics) => {
                    tracing::info!(
                        "Sweep {}/{} completed: {} purged, {} nicknames backfilled",
                        cycle + 1,
                        cycles,
                        metrics.purged_shot_types,
                        metrics.nicknames_backfilled
                    );
                }
                Err(e) => {
                    tracing::error!("Sweep {}/{} failed: {}", cycle + 1, cycles, e);
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Janitor finished {} cycles. Final metrics:\n{}",
            cycles,
            self.janitor.metrics().summary()
        );
        Ok(())
    }

    /// Get a reference to the janitor's current metrics
    pub fn metrics(&self) -> &JanitorMetrics {
        self.janitor.metrics()
    }

    /// Reset the janitor's metrics counters
    pub fn reset_metrics(&mut self) {
        self.janitor.reset_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardbook_domain::clock::{current_timestamp, days_ago};
    use yardbook_domain::traits::ClubQuery;
    use yardbook_domain::{Club, ClubId};

    // Mock store for testing
    #[derive(Default)]
    struct MockStore {
        clubs: Vec<Club>,
    }

    impl ClubStore for MockStore {
        type Error = String;

        fn fetch_clubs(&self, query: &ClubQuery) -> Result<Vec<Club>, Self::Error> {
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

    fn store_with_expired_shot_type() -> MockStore {
        let mut club = Club::new("Lob Wedge", "LW", 0);
        club.push_shot_type("Full", 80);
        club.push_shot_type("Flop", 50);
        club.shot_types[1].archive(days_ago(current_timestamp(), 9));
        MockStore { clubs: vec![club] }
    }

    #[tokio::test]
    async fn test_worker_creation() {
        let worker = JanitorWorker::default_config();
        assert_eq!(worker.metrics().sweep_count, 0);
    }

    #[tokio::test]
    async fn test_run_single_cycle() {
        let store = store_with_expired_shot_type();
        let config = JanitorConfig {
            sweep_interval_minutes: 1,
            ..Default::default()
        };
        let mut worker = JanitorWorker::new(config, ClubLifecycleManager::default_config());

        worker.run_cycles(store, 1).await.unwrap();

        let metrics = worker.metrics();
        assert_eq!(metrics.sweep_count, 1);
        assert_eq!(metrics.purged_shot_types, 1);
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let config = JanitorConfig {
            sweep_interval_minutes: 0,
            ..Default::default()
        };
        let mut worker = JanitorWorker::new(config, ClubLifecycleManager::default_config());

        let result = worker.run_cycles(MockStore::default(), 1).await;
        assert!(matches!(result, Err(JanitorError::Config(_))));
        assert_eq!(worker.metrics().sweep_count, 0);
    }

    #[tokio::test]
    async fn test_reset_metrics() {
        let config = JanitorConfig {
            sweep_interval_minutes: 1,
            ..Default::default()
        };
        let mut worker = JanitorWorker::new(config, ClubLifecycleManager::default_config());

        worker.run_cycles(MockStore::default(), 1).await.unwrap();
        assert_eq!(worker.metrics().sweep_count, 1);

        worker.reset_metrics();
        assert_eq!(worker.metrics().sweep_count, 0);
    }
}
