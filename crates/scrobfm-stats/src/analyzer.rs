//! Read-only analysis facade over a scrobble history snapshot.

use crate::highlights::{compose_highlights, HighlightSummary};
use crate::period::Period;
use crate::ranking::{top_by, Category, RankedRow};
use chrono::NaiveDate;
use scrobfm_common::EventLog;

/// Analysis entry points over one user's event log.
///
/// The analyzer only reads the log; separate calls share no state, so a
/// single instance can serve concurrent queries for different anchors.
#[derive(Debug, Clone)]
pub struct Analyzer {
    log: EventLog,
}

impl Analyzer {
    /// Wraps an already-ingested event log.
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }

    /// The underlying event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Ranks the requested category within the period containing (or,
    /// for weeks, ending at) the anchor date.
    pub fn top_by(&self, period: Period, category: Category, anchor: NaiveDate) -> Vec<RankedRow> {
        let window = period.resolve_window(anchor);
        top_by(self.log.events_in_range(window.start, window.end), category)
    }

    /// Composes the current-versus-previous highlight summary for the
    /// period around the anchor date.
    pub fn highlights(&self, period: Period, anchor: NaiveDate) -> HighlightSummary {
        compose_highlights(&self.log, period, anchor)
    }

    /// Renders the highlight summary as the fixed-layout text report.
    pub fn summary_text(&self, period: Period, anchor: NaiveDate) -> String {
        self.highlights(period, anchor).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobfm_common::test_utils::{mock_date, scrobble_fixtures::january_log};

    #[test]
    fn test_top_by_month_example() {
        let analyzer = Analyzer::new(january_log());
        let rows = analyzer.top_by(Period::Month, Category::Artist, mock_date(2024, 1, 20));

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].artist.as_str(), rows[0].count), ("A", 2));
        assert_eq!((rows[1].artist.as_str(), rows[1].count), ("B", 1));
    }

    #[test]
    fn test_top_by_week_excludes_anchor_day() {
        let analyzer = Analyzer::new(january_log());
        // Window [2023-12-27, 2024-01-03): the Jan 3 scrobble is out.
        let rows = analyzer.top_by(Period::Week, Category::Track, mock_date(2024, 1, 3));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].track.as_deref(), Some("T1"));
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn test_summary_text_matches_highlights() {
        let analyzer = Analyzer::new(january_log());
        let anchor = mock_date(2024, 1, 20);
        assert_eq!(
            analyzer.summary_text(Period::Month, anchor),
            analyzer.highlights(Period::Month, anchor).to_string()
        );
    }
}
