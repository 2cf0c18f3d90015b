//! Serde models for the `user.getrecenttracks` payload.
//!
//! The Last.fm JSON shape is irregular: tag-style objects keep their
//! value under `"#text"`, page metadata lives under `"@attr"`, and every
//! numeric field is a string.

use crate::timezone::scrobble_timestamp;
use scrobfm_common::{ScrobError, ScrobbleEvent};
use serde::Deserialize;

/// Top-level `user.getrecenttracks` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracksResponse {
    /// The single page of history this response carries.
    pub recenttracks: RecentTracksPage,
}

/// One page of recent tracks with its pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracksPage {
    /// Scrobbles on this page, newest first.
    #[serde(default)]
    pub track: Vec<TrackEntry>,
    /// Pagination metadata.
    #[serde(rename = "@attr")]
    pub attr: PageAttributes,
}

/// Pagination metadata of a recent-tracks page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageAttributes {
    /// User the history belongs to.
    #[serde(default)]
    pub user: String,
    /// 1-based page number.
    pub page: String,
    /// Results per page.
    #[serde(rename = "perPage", default)]
    pub per_page: String,
    /// Total number of pages for the query.
    #[serde(rename = "totalPages")]
    pub total_pages: String,
    /// Total number of scrobbles for the query.
    #[serde(default)]
    pub total: String,
}

/// One scrobble as served by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackEntry {
    /// Artist tag object.
    pub artist: TaggedText,
    /// Album tag object; the `#text` is empty for web-player scrobbles.
    #[serde(default)]
    pub album: TaggedText,
    /// Track name.
    pub name: String,
    /// Play time; absent on the "now playing" entry.
    #[serde(default)]
    pub date: Option<ScrobbleDate>,
    /// Entry attributes; only present on the "now playing" entry.
    #[serde(rename = "@attr", default)]
    pub attr: Option<TrackAttributes>,
}

/// A `{"#text": ..}` tag object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaggedText {
    /// The tag's text value.
    #[serde(rename = "#text", default)]
    pub text: String,
}

/// Play time of a scrobble.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrobbleDate {
    /// Human-readable form, e.g. `"13 Jun 2021, 14:03"`.
    #[serde(rename = "#text", default)]
    pub text: String,
    /// Unix timestamp, UTC.
    pub uts: String,
}

/// Attributes attached to a track entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackAttributes {
    /// `"true"` on the currently playing, not yet scrobbled track.
    #[serde(default)]
    pub nowplaying: Option<String>,
}

impl TrackEntry {
    /// Whether this entry is the in-flight "now playing" track rather
    /// than a finished scrobble.
    pub fn is_now_playing(&self) -> bool {
        self.date.is_none()
            || self
                .attr
                .as_ref()
                .and_then(|attr| attr.nowplaying.as_deref())
                == Some("true")
    }

    /// Normalizes this entry into a [`ScrobbleEvent`], shifting the play
    /// time by the host's UTC offset.
    ///
    /// # Errors
    ///
    /// Returns [`ScrobError::LastFm`] for entries without a usable play
    /// time and [`ScrobError::InvalidArgument`] for entries the event
    /// factory rejects.
    pub fn to_event(&self, utc_offset_seconds: i32) -> Result<ScrobbleEvent, ScrobError> {
        let date = self.date.as_ref().ok_or_else(|| {
            ScrobError::LastFm(format!("scrobble '{}' has no play time", self.name))
        })?;
        let uts: i64 = date.uts.parse().map_err(|_| {
            ScrobError::LastFm(format!("malformed uts value '{}'", date.uts))
        })?;
        let timestamp = scrobble_timestamp(uts, utc_offset_seconds).ok_or_else(|| {
            ScrobError::LastFm(format!("uts value '{}' is out of range", date.uts))
        })?;

        ScrobbleEvent::new(
            self.artist.text.clone(),
            self.album.text.clone(),
            self.name.clone(),
            timestamp,
        )
    }
}

/// Parses one of the API's stringly-typed counters.
pub(crate) fn parse_count(value: &str, field: &str) -> Result<u32, ScrobError> {
    value
        .parse()
        .map_err(|_| ScrobError::LastFm(format!("malformed {field} value '{value}'")))
}
