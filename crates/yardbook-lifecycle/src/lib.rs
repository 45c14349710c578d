//! Yardbook Lifecycle
//!
//! Policy layer over the club, profile and settings stores.
//!
//! # Overview
//!
//! The [`ClubLifecycleManager`] enforces the bag rules before anything is
//! written:
//! - At most 13 active clubs (archived clubs do not count)
//! - Between 1 and 5 active shot types per club
//! - Archived shot types are purged after 7 days
//!
//! Every mutating operation validates first and then issues a single store
//! write, so a rejected operation never leaves partial state behind.
//!
//! [`ProfileService`] and [`SettingsService`] manage the singleton profile and
//! settings records, creating each lazily on first access.
//!
//! # Usage
//!
//! ```no_run
//! use yardbook_lifecycle::ClubLifecycleManager;
//! use yardbook_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("yardbook.db")?;
//! let manager = ClubLifecycleManager::default_config();
//!
//! let club = manager.add_club(&mut store, "7 Iron", 165, None)?;
//! assert_eq!(club.nickname, "7I");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod clubs;
mod config;
mod error;
mod profile;
mod seed;

pub use clubs::{ClubLifecycleManager, ClubUpdate};
pub use config::LifecycleConfig;
pub use error::LifecycleError;
pub use profile::{ProfileService, ProfileUpdate, SettingsService};
pub use seed::{DEFAULT_CLUBS, SeedVariant, SEED_VARIANTS};
