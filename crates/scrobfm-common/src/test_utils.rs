//! Test utilities and shared test helpers for scrobfm.
//!
//! This module provides common testing utilities, fixtures, and helper
//! functions used across the workspace crates for unit and integration
//! testing.

use crate::types::{EventLog, ScrobbleEvent};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
}

/// Create a tokio runtime for testing async functions.
/// This is useful for tests that need to run async code in a synchronous test context.
pub fn create_test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("Failed to create test runtime")
}

/// Test fixture for creating a timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Test fixture for creating a calendar date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Fixture builders for scrobble events and logs.
pub mod scrobble_fixtures {
    use super::*;

    /// Build a single scrobble played at noon on the given day.
    pub fn scrobble(artist: &str, album: &str, track: &str, date: NaiveDate) -> ScrobbleEvent {
        let ts = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
        ScrobbleEvent::new(artist, album, track, ts).expect("valid fixture scrobble")
    }

    /// Build an event log from `(artist, album, track, date)` tuples,
    /// delivered newest first like the real API.
    pub fn log_from(entries: &[(&str, &str, &str, NaiveDate)]) -> EventLog {
        let mut events: Vec<ScrobbleEvent> = entries
            .iter()
            .map(|(artist, album, track, date)| scrobble(artist, album, track, *date))
            .collect();
        events.sort_by_key(|e| std::cmp::Reverse(e.timestamp()));
        EventLog::new(events)
    }

    /// A small log spanning January 2024: artist "A" twice, artist "B"
    /// once, matching the worked example in the analyzer docs.
    pub fn january_log() -> EventLog {
        log_from(&[
            ("A", "X", "T1", mock_date(2024, 1, 1)),
            ("A", "X", "T1", mock_date(2024, 1, 2)),
            ("B", "Y", "T2", mock_date(2024, 1, 3)),
        ])
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating non-empty artist/album/track names.
    pub fn name_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z][a-zA-Z0-9 ]{0,23}".prop_map(|s| s.trim_end().to_string()).prop_filter(
            "name must stay non-empty after trimming",
            |s| !s.is_empty(),
        )
    }

    /// Strategy for generating dates within a few recent years.
    pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2018i32..=2025, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    /// Strategy for generating a scrobble event.
    pub fn scrobble_strategy() -> impl Strategy<Value = ScrobbleEvent> {
        (name_strategy(), name_strategy(), name_strategy(), date_strategy()).prop_map(
            |(artist, album, track, date)| {
                scrobble_fixtures::scrobble(&artist, &album, &track, date)
            },
        )
    }
}
