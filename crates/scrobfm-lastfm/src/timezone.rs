//! Timezone adjustment between host-local calendar days and API times.
//!
//! Last.fm serves timestamps in UTC, but the analyzer groups scrobbles
//! by the listener's calendar day. Day boundaries sent to the API and
//! timestamps read back are therefore shifted by the host's UTC offset,
//! sampled once when the client is built.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Offset, Utc};

/// The host's current UTC offset in seconds (negative west of
/// Greenwich).
pub fn host_utc_offset_seconds() -> i32 {
    Local::now().offset().fix().local_minus_utc()
}

/// Unix timestamp of local midnight on `date`, for the API's `from`/`to`
/// parameters. Local midnight lies `offset` seconds before UTC midnight
/// of the same calendar day.
pub fn date_to_api_seconds(date: NaiveDate, utc_offset_seconds: i32) -> i64 {
    let utc_midnight = date.and_time(NaiveTime::MIN).and_utc();
    utc_midnight.timestamp() - i64::from(utc_offset_seconds)
}

/// Converts a scrobble's `uts` value into the timestamp stored on the
/// event: UTC play time shifted to host wall-clock time, so that range
/// queries over calendar days match what the listener experienced.
pub fn scrobble_timestamp(uts: i64, utc_offset_seconds: i32) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(uts + i64::from(utc_offset_seconds), 0)
}
