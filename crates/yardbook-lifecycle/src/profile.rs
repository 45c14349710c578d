//! Profile and settings services over the singleton records

use crate::LifecycleError;
use yardbook_domain::profile::{validate_handicap, MAX_TOLERANCE_PERCENT};
use yardbook_domain::traits::ProfileStore;
use yardbook_domain::{AppSettings, UserProfile};

/// Partial update for the profile; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// Display name
    pub name: Option<String>,

    /// Handicap index; must be 0-54
    pub handicap: Option<i32>,

    /// Primary shot-type name
    pub primary_shot_type: Option<String>,
}

/// Access to the singleton user profile
///
/// The profile is created with defaults on first access and never duplicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileService;

impl ProfileService {
    /// Create a new profile service
    pub fn new() -> Self {
        Self
    }

    /// Load the profile, creating and saving the default one if none exists
    pub fn get_or_create_profile<S: ProfileStore>(
        &self,
        store: &mut S,
    ) -> Result<UserProfile, LifecycleError<S::Error>> {
        if let Some(profile) = store.load_profile().map_err(LifecycleError::Store)? {
            return Ok(profile);
        }
        let profile = UserProfile::default();
        store.save_profile(&profile).map_err(LifecycleError::Store)?;
        tracing::info!("Created user profile {}", profile.id);
        Ok(profile)
    }

    /// Apply a partial update to the profile
    ///
    /// The handicap is validated before anything is written.
    pub fn update_profile<S: ProfileStore>(
        &self,
        store: &mut S,
        update: ProfileUpdate,
    ) -> Result<UserProfile, LifecycleError<S::Error>> {
        let handicap = match update.handicap {
            Some(raw) => match validate_handicap(raw) {
                Some(handicap) => Some(handicap),
                None => {
                    tracing::warn!("Rejected handicap {}", raw);
                    return Err(LifecycleError::InvalidHandicap(raw));
                }
            },
            None => None,
        };

        let mut profile = store
            .load_profile()
            .map_err(LifecycleError::Store)?
            .unwrap_or_default();
        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(handicap) = handicap {
            profile.handicap = handicap;
        }
        if let Some(primary) = update.primary_shot_type {
            profile.primary_shot_type = primary;
        }
        store.save_profile(&profile).map_err(LifecycleError::Store)?;
        tracing::info!("Updated user profile {}", profile.id);
        Ok(profile)
    }
}

/// Access to the singleton app settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsService;

impl SettingsService {
    /// Create a new settings service
    pub fn new() -> Self {
        Self
    }

    /// Load the settings, creating and saving defaults if none exist
    pub fn get_or_create_settings<S: ProfileStore>(
        &self,
        store: &mut S,
    ) -> Result<AppSettings, LifecycleError<S::Error>> {
        if let Some(settings) = store.load_settings().map_err(LifecycleError::Store)? {
            return Ok(settings);
        }
        let settings = AppSettings::default();
        store.save_settings(&settings).map_err(LifecycleError::Store)?;
        tracing::info!("Created app settings {}", settings.id);
        Ok(settings)
    }

    /// Set the ladder tolerance percentage (0-100)
    pub fn update_tolerance<S: ProfileStore>(
        &self,
        store: &mut S,
        percent: u32,
    ) -> Result<AppSettings, LifecycleError<S::Error>> {
        if percent > MAX_TOLERANCE_PERCENT {
            tracing::warn!("Rejected tolerance {}%", percent);
            return Err(LifecycleError::InvalidTolerance(percent));
        }
        let mut settings = store
            .load_settings()
            .map_err(LifecycleError::Store)?
            .unwrap_or_default();
        settings.yardage_range_percentage = percent;
        store.save_settings(&settings).map_err(LifecycleError::Store)?;
        tracing::info!("Ladder tolerance set to {}%", percent);
        Ok(settings)
    }
}
