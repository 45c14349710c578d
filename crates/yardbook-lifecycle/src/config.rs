//! Limits enforced by the club lifecycle manager

use serde::{Deserialize, Serialize};

/// Configuration for club and shot-type limits
///
/// # Examples
///
/// ```
/// use yardbook_lifecycle::LifecycleConfig;
///
/// let config = LifecycleConfig::default();
/// assert_eq!(config.max_clubs, 13);
/// assert_eq!(config.max_shot_types_per_club, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Maximum number of active clubs
    /// Default: 13
    pub max_clubs: usize,

    /// Maximum number of active shot types on one club
    /// Default: 5
    pub max_shot_types_per_club: usize,

    /// Minimum number of active shot types a club must keep
    /// Default: 1
    pub min_shot_types_per_club: usize,

    /// Days an archived shot type is kept before it is purged
    /// Default: 7
    pub archive_retention_days: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_clubs: 13,
            max_shot_types_per_club: 5,
            min_shot_types_per_club: 1,
            archive_retention_days: 7,
        }
    }
}

impl LifecycleConfig {
    /// Minimum active shot types, never less than one
    pub fn min_active_shot_types(&self) -> usize {
        self.min_shot_types_per_club.max(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_clubs == 0 {
            return Err("max_clubs must be greater than 0".to_string());
        }
        if self.min_shot_types_per_club == 0 {
            return Err("min_shot_types_per_club must be at least 1".to_string());
        }
        if self.min_shot_types_per_club > self.max_shot_types_per_club {
            return Err(format!(
                "min_shot_types_per_club ({}) exceeds max_shot_types_per_club ({})",
                self.min_shot_types_per_club, self.max_shot_types_per_club
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
        let config = LifecycleConfig::default();
        assert_eq!(config.max_clubs, 13);
        assert_eq!(config.max_shot_types_per_club, 5);
        assert_eq!(config.min_shot_types_per_club, 1);
        assert_eq!(config.archive_retention_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unusable_limits() {
        let zero_min = LifecycleConfig {
            min_shot_types_per_club: 0,
            ..Default::default()
        };
        assert!(zero_min.validate().is_err());
        assert_eq!(zero_min.min_active_shot_types(), 1);

        let no_clubs = LifecycleConfig {
            max_clubs: 0,
            ..Default::default()
        };
        assert!(no_clubs.validate().is_err());

        let inverted = LifecycleConfig {
            min_shot_types_per_club: 6,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LifecycleConfig = toml::from_str("archive_retention_days = 14").unwrap();
        assert_eq!(config.archive_retention_days, 14);
        assert_eq!(config.max_clubs, 13);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = LifecycleConfig {
            max_clubs: 14,
            ..Default::default()
        };
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: LifecycleConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
