//! Yardbook Janitor
//!
//! Background maintenance service for the club store.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Archive purging**: Permanently deleting shot types archived longer
//!   than the retention window (7 days by default). Clubs and active shot
//!   types are never touched.
//! - **Nickname backfill**: Generating nicknames for clubs created without one
//! - **Metrics collection**: Tracking maintenance operations
//!
//! Both passes are idempotent; a sweep with nothing to do writes nothing.
//!
//! # Usage
//!
//! ## One-time Sweep
//!
//! ```no_run
//! use yardbook_janitor::Janitor;
//! use yardbook_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("yardbook.db")?;
//! let mut janitor = Janitor::default_config();
//!
//! let metrics = janitor.sweep(&mut store)?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use yardbook_janitor::JanitorWorker;
//! use yardbook_store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::new("yardbook.db")?;
//!     let mut worker = JanitorWorker::default_config();
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run(store).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The Janitor can be configured via TOML:
//!
//! ```toml
//! [janitor]
//! sweep_interval_minutes = 60
//! dry_run = false
//! backfill_nicknames = true
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod janitor;
mod metrics;
mod worker;

pub use config::JanitorConfig;
pub use error::JanitorError;
pub use janitor::Janitor;
pub use metrics::JanitorMetrics;
pub use worker::JanitorWorker;
