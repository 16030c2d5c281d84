//! Shared helper utilities for factory methods.

use chrono::{Duration, NaiveDateTime, Utc};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Timestamp `seconds` before now, for building rows with a known ordering.
pub fn seconds_ago(seconds: i64) -> NaiveDateTime {
    (Utc::now() - Duration::seconds(seconds)).naive_utc()
}
