//! Grouping, counting, and ranking of scrobbles by category.

use scrobfm_common::{ScrobError, ScrobbleEvent};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The three ranking categories.
///
/// Albums and tracks are keyed together with their artist: two artists
/// releasing a same-titled album (or track) form two distinct groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Group scrobbles by artist name.
    Artist,
    /// Group scrobbles by (artist, album).
    Album,
    /// Group scrobbles by (artist, track).
    Track,
}

impl Category {
    /// All categories, in ranking-report order.
    pub const ALL: [Self; 3] = [Self::Artist, Self::Album, Self::Track];

    /// Lowercase name as used on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ScrobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "album" => Ok(Self::Album),
            "track" => Ok(Self::Track),
            _ => Err(ScrobError::InvalidArgument(format!(
                "category should be 'artist', 'album' or 'track', but '{s}' was passed"
            ))),
        }
    }
}

/// One row of a ranking: a unique group and how many times it was
/// scrobbled. Field presence follows the category: artist rankings carry
/// only the artist, album rankings add the album, track rankings carry
/// all three (the album is the one of the most recent play, for display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Artist name of the group.
    pub artist: String,
    /// Album name, when the category carries one.
    pub album: Option<String>,
    /// Track name, for track rankings.
    pub track: Option<String>,
    /// How many scrobbles fell into this group. At least 1 in any
    /// aggregator output; 0 only in the placeholder row.
    pub count: u64,
}

impl RankedRow {
    /// Placeholder row returned as the "top" of an empty ranking, so
    /// callers never index into an empty sequence.
    pub fn placeholder(category: Category) -> Self {
        Self {
            artist: "-".to_string(),
            album: matches!(category, Category::Album | Category::Track)
                .then(|| "-".to_string()),
            track: matches!(category, Category::Track).then(|| "-".to_string()),
            count: 0,
        }
    }
}

/// Ranks the given events by the requested category.
///
/// Events are grouped by exact (case-sensitive) key, counted, and sorted
/// by descending count. Ties are broken case-insensitively: artist name
/// first, then the category's own field. For album rankings, scrobbles
/// carrying the no-album sentinel are dropped first; they still count
/// toward artist and track rankings.
///
/// Empty input produces an empty ranking.
pub fn top_by<'a, I>(events: I, category: Category) -> Vec<RankedRow>
where
    I: IntoIterator<Item = &'a ScrobbleEvent>,
{
    let mut groups: HashMap<(String, String), RankedRow> = HashMap::new();

    for event in events {
        if category == Category::Album && event.is_web_player() {
            continue;
        }

        let key = match category {
            Category::Artist => (event.artist().to_string(), String::new()),
            Category::Album => (event.artist().to_string(), event.album().to_string()),
            Category::Track => (event.artist().to_string(), event.track().to_string()),
        };

        groups
            .entry(key)
            .and_modify(|row| row.count += 1)
            .or_insert_with(|| RankedRow {
                artist: event.artist().to_string(),
                album: matches!(category, Category::Album | Category::Track)
                    .then(|| event.album().to_string()),
                track: matches!(category, Category::Track)
                    .then(|| event.track().to_string()),
                count: 1,
            });
    }

    let mut rows: Vec<RankedRow> = groups.into_values().collect();
    rows.sort_by(|a, b| compare_rows(a, b, category));
    rows
}

/// Descending count, then case-insensitive artist, then the category's
/// own field. Stored strings are never case-folded; normalization happens
/// only here at the comparison site.
fn compare_rows(a: &RankedRow, b: &RankedRow, category: Category) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| fold(&a.artist).cmp(&fold(&b.artist)))
        .then_with(|| match category {
            Category::Artist => Ordering::Equal,
            Category::Album => fold_opt(a.album.as_deref()).cmp(&fold_opt(b.album.as_deref())),
            Category::Track => fold_opt(a.track.as_deref()).cmp(&fold_opt(b.track.as_deref())),
        })
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

fn fold_opt(s: Option<&str>) -> String {
    s.map(fold).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobfm_common::test_utils::{mock_date, scrobble_fixtures::log_from};

    #[test]
    fn test_category_parsing() {
        assert_eq!("artist".parse::<Category>().unwrap(), Category::Artist);
        assert_eq!("Album".parse::<Category>().unwrap(), Category::Album);
        assert_eq!("TRACK".parse::<Category>().unwrap(), Category::Track);

        let err = "genre".parse::<Category>().unwrap_err();
        assert!(matches!(err, ScrobError::InvalidArgument(_)));
    }

    #[test]
    fn test_top_by_counts_and_order() {
        let log = log_from(&[
            ("A", "X", "T1", mock_date(2024, 1, 1)),
            ("A", "X", "T1", mock_date(2024, 1, 2)),
            ("B", "Y", "T2", mock_date(2024, 1, 3)),
        ]);

        let rows = top_by(log.events(), Category::Artist);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].artist.as_str(), rows[0].count), ("A", 2));
        assert_eq!((rows[1].artist.as_str(), rows[1].count), ("B", 1));
        assert!(rows[0].album.is_none());
    }

    #[test]
    fn test_top_by_case_insensitive_tie_break() {
        let log = log_from(&[
            ("Zz", "X", "T", mock_date(2024, 1, 1)),
            ("abba", "Y", "T", mock_date(2024, 1, 2)),
        ]);

        let rows = top_by(log.events(), Category::Artist);
        assert_eq!(rows[0].artist, "abba");
        assert_eq!(rows[1].artist, "Zz");
    }

    #[test]
    fn test_top_by_tie_break_secondary_field() {
        let log = log_from(&[
            ("A", "beta", "T1", mock_date(2024, 1, 1)),
            ("A", "Alpha", "T2", mock_date(2024, 1, 2)),
        ]);

        let rows = top_by(log.events(), Category::Album);
        assert_eq!(rows[0].album.as_deref(), Some("Alpha"));
        assert_eq!(rows[1].album.as_deref(), Some("beta"));
    }

    #[test]
    fn test_same_title_different_artists_stay_distinct() {
        let log = log_from(&[
            ("A", "Greatest Hits", "Intro", mock_date(2024, 1, 1)),
            ("B", "Greatest Hits", "Intro", mock_date(2024, 1, 2)),
        ]);

        assert_eq!(top_by(log.events(), Category::Album).len(), 2);
        assert_eq!(top_by(log.events(), Category::Track).len(), 2);
    }

    #[test]
    fn test_album_ranking_drops_web_player_sentinel() {
        let log = log_from(&[
            ("A", "", "T1", mock_date(2024, 1, 1)),
            ("A", "", "T1", mock_date(2024, 1, 2)),
            ("A", "X", "T2", mock_date(2024, 1, 3)),
        ]);

        let albums = top_by(log.events(), Category::Album);
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].album.as_deref(), Some("X"));

        // The same events still count everywhere else.
        assert_eq!(top_by(log.events(), Category::Artist)[0].count, 3);
        let track_total: u64 = top_by(log.events(), Category::Track)
            .iter()
            .map(|row| row.count)
            .sum();
        assert_eq!(track_total, 3);
    }

    #[test]
    fn test_top_by_empty_input() {
        let log = log_from(&[]);
        assert!(top_by(log.events(), Category::Track).is_empty());
    }

    #[test]
    fn test_placeholder_rows() {
        let row = RankedRow::placeholder(Category::Track);
        assert_eq!(row.artist, "-");
        assert_eq!(row.album.as_deref(), Some("-"));
        assert_eq!(row.track.as_deref(), Some("-"));
        assert_eq!(row.count, 0);

        let row = RankedRow::placeholder(Category::Artist);
        assert!(row.album.is_none());
        assert!(row.track.is_none());
    }
}
