//! Singleton records: the user profile and app settings

use crate::club::FULL_SHOT_TYPE;
use crate::ids::{ProfileId, SettingsId};

/// Lowest accepted handicap index
pub const MIN_HANDICAP: i32 = 0;

/// Highest accepted handicap index
pub const MAX_HANDICAP: i32 = 54;

/// Default ladder tolerance, in percent
pub const DEFAULT_TOLERANCE_PERCENT: u32 = 15;

/// Highest accepted ladder tolerance, in percent
pub const MAX_TOLERANCE_PERCENT: u32 = 100;

/// The golfer using this installation
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Unique identifier
    pub id: ProfileId,

    /// Display name
    pub name: String,

    /// Handicap index, 0-54
    pub handicap: u8,

    /// Shot-type name used as the default filter and ladder emphasis
    pub primary_shot_type: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: ProfileId::new(),
            name: String::new(),
            handicap: 18,
            primary_shot_type: FULL_SHOT_TYPE.to_string(),
        }
    }
}

/// Validate a handicap index, returning it narrowed when in range
pub fn validate_handicap(handicap: i32) -> Option<u8> {
    if (MIN_HANDICAP..=MAX_HANDICAP).contains(&handicap) {
        Some(handicap as u8)
    } else {
        None
    }
}

/// App-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Unique identifier
    pub id: SettingsId,

    /// Ladder tolerance around the target, in percent
    pub yardage_range_percentage: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: SettingsId::new(),
            yardage_range_percentage: DEFAULT_TOLERANCE_PERCENT,
        }
    }
}
