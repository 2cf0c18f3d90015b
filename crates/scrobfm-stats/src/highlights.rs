//! Current-versus-previous period highlight composition.

use crate::period::{Period, PeriodWindow};
use crate::ranking::{top_by, Category, RankedRow};
use chrono::NaiveDate;
use scrobfm_common::EventLog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A snapshot comparing one period against the one before it: totals,
/// daily averages, percentage deltas, and the top row of each category.
///
/// Built once by [`compose_highlights`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSummary {
    /// Which period kind this summary covers.
    pub period: Period,

    /// Unique artists scrobbled in the current period.
    pub artists_cur: u64,
    /// Unique albums scrobbled in the current period.
    pub albums_cur: u64,
    /// Unique tracks scrobbled in the current period.
    pub tracks_cur: u64,
    /// Total scrobbles in the current period.
    pub scrobbles_cur: u64,
    /// Average daily scrobbles in the current period.
    pub average_daily_cur: u64,

    /// Unique artists scrobbled in the previous period.
    pub artists_prev: u64,
    /// Unique albums scrobbled in the previous period.
    pub albums_prev: u64,
    /// Unique tracks scrobbled in the previous period.
    pub tracks_prev: u64,
    /// Total scrobbles in the previous period.
    pub scrobbles_prev: u64,
    /// Average daily scrobbles in the previous period.
    pub average_daily_prev: u64,

    /// Percentage delta of unique artists, current vs. previous.
    pub percentage_artists: i64,
    /// Percentage delta of unique albums, current vs. previous.
    pub percentage_albums: i64,
    /// Percentage delta of unique tracks, current vs. previous.
    pub percentage_tracks: i64,
    /// Percentage delta of total scrobbles, current vs. previous.
    pub percentage_scrobbles: i64,
    /// Percentage delta of average daily scrobbles, current vs. previous.
    pub percentage_average_daily: i64,

    /// Most listened artist of the current period.
    pub top_artist: RankedRow,
    /// Most listened album of the current period.
    pub top_album: RankedRow,
    /// Most listened track of the current period.
    pub top_track: RankedRow,
}

/// Composes the highlight summary for the period containing (or, for
/// weeks, ending at) the anchor date.
///
/// Rankings for all three categories are computed over the current and
/// previous windows; totals fall out of the ranking row counts, and the
/// total scrobble count is the sum of the track ranking (the finest
/// grouping, so it covers every event). Empty windows produce zeroed
/// totals and placeholder top rows, never an error.
pub fn compose_highlights(log: &EventLog, period: Period, anchor: NaiveDate) -> HighlightSummary {
    let current = period.resolve_window(anchor);
    let previous = period.previous_window(&current);

    let rank = |window: &PeriodWindow, category: Category| {
        top_by(log.events_in_range(window.start, window.end), category)
    };

    let artists_cur = rank(&current, Category::Artist);
    let albums_cur = rank(&current, Category::Album);
    let tracks_cur = rank(&current, Category::Track);
    let artists_prev = rank(&previous, Category::Artist);
    let albums_prev = rank(&previous, Category::Album);
    let tracks_prev = rank(&previous, Category::Track);

    let scrobbles_cur = total_count(&tracks_cur);
    let scrobbles_prev = total_count(&tracks_prev);
    let average_daily_cur = average_daily(scrobbles_cur, period);
    let average_daily_prev = average_daily(scrobbles_prev, period);

    HighlightSummary {
        period,

        artists_cur: artists_cur.len() as u64,
        albums_cur: albums_cur.len() as u64,
        tracks_cur: tracks_cur.len() as u64,
        scrobbles_cur,
        average_daily_cur,

        artists_prev: artists_prev.len() as u64,
        albums_prev: albums_prev.len() as u64,
        tracks_prev: tracks_prev.len() as u64,
        scrobbles_prev,
        average_daily_prev,

        percentage_artists: percentage_delta(artists_cur.len() as u64, artists_prev.len() as u64),
        percentage_albums: percentage_delta(albums_cur.len() as u64, albums_prev.len() as u64),
        percentage_tracks: percentage_delta(tracks_cur.len() as u64, tracks_prev.len() as u64),
        percentage_scrobbles: percentage_delta(scrobbles_cur, scrobbles_prev),
        percentage_average_daily: percentage_delta(average_daily_cur, average_daily_prev),

        top_artist: top_row(artists_cur, Category::Artist),
        top_album: top_row(albums_cur, Category::Album),
        top_track: top_row(tracks_cur, Category::Track),
    }
}

/// Percentage change from `previous` to `current`, rounded half away
/// from zero.
///
/// Both zero compares as no change. A nonzero current against a zero
/// previous divides by 1 instead, so growth from nothing reports as
/// `current * 100`% rather than failing on a zero denominator.
pub fn percentage_delta(current: u64, previous: u64) -> i64 {
    if current == 0 && previous == 0 {
        return 0;
    }
    let denominator = previous.max(1);
    (((current as f64 / denominator as f64) - 1.0) * 100.0).round() as i64
}

/// Average daily scrobbles over the period's nominal length, rounded
/// half away from zero.
pub fn average_daily(scrobbles: u64, period: Period) -> u64 {
    (scrobbles as f64 / f64::from(period.nominal_days())).round() as u64
}

fn total_count(rows: &[RankedRow]) -> u64 {
    rows.iter().map(|row| row.count).sum()
}

fn top_row(mut rows: Vec<RankedRow>, category: Category) -> RankedRow {
    if rows.is_empty() {
        RankedRow::placeholder(category)
    } else {
        rows.swap_remove(0)
    }
}

impl fmt::Display for HighlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--Current {}--", self.period)?;
        writeln!(f, "Total Artists listened: {}", self.artists_cur)?;
        writeln!(f, "Total Albums listened: {}", self.albums_cur)?;
        writeln!(f, "Total Tracks listened: {}", self.tracks_cur)?;
        writeln!(f, "Total Scrobbles: {}", self.scrobbles_cur)?;
        writeln!(f, "Average Daily: {}", self.average_daily_cur)?;
        writeln!(f)?;
        writeln!(f, "--Previous {}--", self.period)?;
        writeln!(f, "Total Artists listened: {}", self.artists_prev)?;
        writeln!(f, "Total Albums listened: {}", self.albums_prev)?;
        writeln!(f, "Total Tracks listened: {}", self.tracks_prev)?;
        writeln!(f, "Total Scrobbles: {}", self.scrobbles_prev)?;
        writeln!(f, "Average Daily: {}", self.average_daily_prev)?;
        writeln!(f)?;
        writeln!(f, "--Statistics vs. previous {}--", self.period)?;
        writeln!(f, "Total Artists listened: {}%", self.percentage_artists)?;
        writeln!(f, "Total Albums listened: {}%", self.percentage_albums)?;
        writeln!(f, "Total Tracks listened: {}%", self.percentage_tracks)?;
        writeln!(f, "Total Scrobbles: {}%", self.percentage_scrobbles)?;
        writeln!(f, "Average Daily: {}%", self.percentage_average_daily)?;
        writeln!(f)?;
        writeln!(f, "--Top listened--")?;
        writeln!(
            f,
            "Artist: {} with {} scrobbles",
            self.top_artist.artist, self.top_artist.count
        )?;
        writeln!(
            f,
            "Album: {} by {} with {} scrobbles",
            self.top_album.album.as_deref().unwrap_or("-"),
            self.top_album.artist,
            self.top_album.count
        )?;
        write!(
            f,
            "Track: {} from {} by {} with {} scrobbles",
            self.top_track.track.as_deref().unwrap_or("-"),
            self.top_track.album.as_deref().unwrap_or("-"),
            self.top_track.artist,
            self.top_track.count
        )
    }
}
