//! Core domain types for scrobble history analysis.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Album value substituted at ingestion for scrobbles without album
/// metadata (tracks played through the Last.fm web player). Kept as a
/// distinct non-empty string so these events never collapse into a real
/// album group.
pub const WEB_PLAYER_ALBUM: &str = "Last.fm Web Player";

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum ScrobError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Last.fm API error.
    #[error("Last.fm API error: {0}")]
    LastFm(String),

    /// Invalid caller-supplied argument (category, period, or date).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// One logged play event. Immutable once constructed; all construction
/// goes through [`ScrobbleEvent::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrobbleEvent {
    artist: String,
    album: String,
    track: String,
    timestamp: DateTime<Utc>,
}

impl ScrobbleEvent {
    /// Creates a scrobble event, normalizing an empty album field to the
    /// [`WEB_PLAYER_ALBUM`] sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`ScrobError::InvalidArgument`] if the artist or track
    /// name is empty.
    pub fn new(
        artist: impl Into<String>,
        album: impl Into<String>,
        track: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> std::result::Result<Self, ScrobError> {
        let artist = artist.into();
        let track = track.into();
        if artist.is_empty() {
            return Err(ScrobError::InvalidArgument(
                "scrobble artist cannot be empty".to_string(),
            ));
        }
        if track.is_empty() {
            return Err(ScrobError::InvalidArgument(
                "scrobble track cannot be empty".to_string(),
            ));
        }

        let album = album.into();
        let album = if album.is_empty() {
            WEB_PLAYER_ALBUM.to_string()
        } else {
            album
        };

        Ok(Self {
            artist,
            album,
            track,
            timestamp,
        })
    }

    /// The artist name.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// The album name, or [`WEB_PLAYER_ALBUM`] if the scrobble carried no
    /// album metadata.
    pub fn album(&self) -> &str {
        &self.album
    }

    /// The track name.
    pub fn track(&self) -> &str {
        &self.track
    }

    /// When the track was played.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether this scrobble carries the no-album sentinel.
    pub fn is_web_player(&self) -> bool {
        self.album == WEB_PLAYER_ALBUM
    }
}

/// A user's full scrobble history, as delivered by the ingestion layer
/// (newest first). Range queries compare timestamps, never positions, so
/// nothing here depends on the delivery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<ScrobbleEvent>,
}

impl EventLog {
    /// Creates an event log from already-normalized events.
    pub fn new(events: Vec<ScrobbleEvent>) -> Self {
        Self { events }
    }

    /// Number of scrobbles in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log holds no scrobbles.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in delivery order.
    pub fn events(&self) -> &[ScrobbleEvent] {
        &self.events
    }

    /// The day of the oldest scrobble, if any.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.events
            .iter()
            .map(ScrobbleEvent::timestamp)
            .min()
            .map(|ts| ts.date_naive())
    }

    /// The day of the newest scrobble, if any.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.events
            .iter()
            .map(ScrobbleEvent::timestamp)
            .max()
            .map(|ts| ts.date_naive())
    }

    /// All events with `start <= timestamp < end`, in delivery order.
    /// An empty range yields an empty iterator.
    pub fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &ScrobbleEvent> {
        let start_ts = start.and_time(NaiveTime::MIN).and_utc();
        let end_ts = end.and_time(NaiveTime::MIN).and_utc();

        self.events
            .iter()
            .filter(move |event| event.timestamp() >= start_ts && event.timestamp() < end_ts)
    }
}
