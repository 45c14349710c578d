//! Yardbook Range
//!
//! Practice-session tracking on top of a [`SessionStore`](yardbook_domain::traits::SessionStore).
//!
//! A session follows one club/shot-type combination, captured by name so the
//! history survives later renames. Shots accumulate until the session ends;
//! ending a session reports its statistics but keeps it as history until it
//! is explicitly deleted. A session's median can be saved as the
//! representative distance for its combination.
//!
//! # Usage
//!
//! ```no_run
//! use yardbook_range::RangeService;
//! use yardbook_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("yardbook.db")?;
//! let range = RangeService::new();
//!
//! let session = range.start_session(&mut store, "7 Iron", "Full")?;
//! range.add_shot(&mut store, session.id, 160, false)?;
//! range.add_spoken_shot(&mut store, session.id, "that was about 165")?;
//!
//! let stats = range.end_session(&store, session.id)?;
//! println!("median {} over {} shots", stats.median, stats.count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod service;

pub use error::RangeError;
pub use service::RangeService;
