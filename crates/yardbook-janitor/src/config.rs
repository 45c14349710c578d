//! Maintenance sweep settings
//!
//! Defines the sweep interval and which maintenance passes run.

use crate::JanitorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Janitor service
///
/// The retention window for archived shot types comes from the lifecycle
/// limits, not from here.
///
/// # Examples
///
/// ```
/// use yardbook_janitor::JanitorConfig;
///
/// // Default configuration (hourly)
/// let config = JanitorConfig::default();
/// assert_eq!(config.sweep_interval_minutes, 60);
///
/// // Frequent sweeps
/// let config = JanitorConfig::frequent();
/// assert_eq!(config.sweep_interval_minutes, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// How often to run the sweep cycle (in minutes)
    /// Default: Every 60 minutes (hourly)
    pub sweep_interval_minutes: u64,

    /// Dry-run mode: Log what would be purged without writing
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Generate nicknames for clubs that have none
    /// Default: true
    #[serde(default = "default_backfill_nicknames")]
    pub backfill_nicknames: bool,
}

fn default_backfill_nicknames() -> bool {
    true
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            sweep_interval_minutes: 60,
            dry_run: false,
            backfill_nicknames: true,
        }
    }
}

impl JanitorConfig {
    /// Sweep every 5 minutes
    pub fn frequent() -> Self {
        Self {
            sweep_interval_minutes: 5,
            ..Self::default()
        }
    }

    /// Get sweep interval as Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_minutes * 60)
    }

    /// Reject settings the worker cannot run with
    pub fn validate(&self) -> Result<(), JanitorError> {
        if self.sweep_interval_minutes == 0 {
            return Err(JanitorError::Config(
                "sweep_interval_minutes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JanitorConfig::default();
        assert_eq!(config.sweep_interval_minutes, 60);
        assert!(!config.dry_run);
        assert!(config.backfill_nicknames);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_frequent_config() {
        let config = JanitorConfig::frequent();
        assert_eq!(config.sweep_interval_minutes, 5);
        assert!(config.sweep_interval() < JanitorConfig::default().sweep_interval());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = JanitorConfig {
            sweep_interval_minutes: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(JanitorError::Config(_))));
    }

    #[test]
    fn test_serde_defaults() {
        let config: JanitorConfig =
            serde_json::from_str(r#"{"sweep_interval_minutes": 15}"#).unwrap();
        assert_eq!(config.sweep_interval(), Duration::from_secs(15 * 60));
        assert!(!config.dry_run);
        assert!(config.backfill_nicknames);
    }
}
