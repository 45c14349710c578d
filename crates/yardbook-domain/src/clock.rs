//! Wall-clock helpers
//!
//! All timestamps in Yardbook are Unix seconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds in one day
pub const SECS_PER_DAY: u64 = 86_400;

/// Current timestamp in seconds since Unix epoch
///
/// A clock set before 1970 reads as 0 rather than failing.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Timestamp `days` days before `now`
pub fn days_ago(now: u64, days: u64) -> u64 {
    now.saturating_sub(days.saturating_mul(SECS_PER_DAY))
}
