//! Week/month/year window resolution and previous-period arithmetic.

use chrono::{Datelike, Days, NaiveDate};
use scrobfm_common::ScrobError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation granularity for highlight reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// The 7 days before the anchor date.
    Week,
    /// The calendar month containing the anchor date.
    Month,
    /// The calendar year containing the anchor date.
    Year,
}

/// A half-open date window: `start` is included, `end` is not. The end
/// date always belongs to the next window, so adjacent windows never
/// double-count a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// First day after the window (exclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Lowercase name as used on the CLI and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Nominal period length in days, used as the average-daily divisor.
    ///
    /// These are fixed approximations (a month is always 30 days, a year
    /// always 365), kept for output compatibility with historical
    /// reports; they are not the actual day count of a given window.
    pub fn nominal_days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    /// Resolves the window containing (or, for weeks, ending at) the
    /// anchor date.
    ///
    /// A week window covers the 7 days before the anchor, excluding the
    /// anchor itself. Month and year windows cover the calendar month or
    /// year the anchor falls in.
    pub fn resolve_window(self, anchor: NaiveDate) -> PeriodWindow {
        match self {
            Self::Week => PeriodWindow {
                start: anchor - Days::new(7),
                end: anchor,
            },
            Self::Month => {
                let start = first_of_month(anchor.year(), anchor.month());
                PeriodWindow {
                    start,
                    end: next_month(start),
                }
            }
            Self::Year => PeriodWindow {
                start: first_of_month(anchor.year(), 1),
                end: first_of_month(anchor.year() + 1, 1),
            },
        }
    }

    /// The comparable window immediately before `window`.
    ///
    /// Weeks shift back a fixed 7 days; months and years step back one
    /// calendar unit, so varying month lengths and year rollover are
    /// handled exactly (the month before January is December of the
    /// prior year).
    pub fn previous_window(self, window: &PeriodWindow) -> PeriodWindow {
        match self {
            Self::Week => PeriodWindow {
                start: window.start - Days::new(7),
                end: window.start,
            },
            Self::Month => PeriodWindow {
                start: previous_month(window.start),
                end: window.start,
            },
            Self::Year => PeriodWindow {
                start: first_of_month(window.start.year() - 1, 1),
                end: window.start,
            },
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = ScrobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(ScrobError::InvalidArgument(format!(
                "period should be 'week', 'month' or 'year', but '{s}' was passed"
            ))),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
}

fn next_month(start: NaiveDate) -> NaiveDate {
    if start.month() == 12 {
        first_of_month(start.year() + 1, 1)
    } else {
        first_of_month(start.year(), start.month() + 1)
    }
}

fn previous_month(start: NaiveDate) -> NaiveDate {
    if start.month() == 1 {
        first_of_month(start.year() - 1, 12)
    } else {
        first_of_month(start.year(), start.month() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobfm_common::test_utils::mock_date;

    #[test]
    fn test_period_parsing() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("YEAR".parse::<Period>().unwrap(), Period::Year);
        assert!(matches!(
            "decade".parse::<Period>(),
            Err(ScrobError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_week_window_excludes_anchor() {
        let window = Period::Week.resolve_window(mock_date(2024, 1, 8));
        assert_eq!(window.start, mock_date(2024, 1, 1));
        assert_eq!(window.end, mock_date(2024, 1, 8));
    }

    #[test]
    fn test_month_window_spans_calendar_month() {
        let window = Period::Month.resolve_window(mock_date(2024, 2, 15));
        assert_eq!(window.start, mock_date(2024, 2, 1));
        assert_eq!(window.end, mock_date(2024, 3, 1));

        let december = Period::Month.resolve_window(mock_date(2023, 12, 31));
        assert_eq!(december.end, mock_date(2024, 1, 1));
    }

    #[test]
    fn test_year_window_spans_calendar_year() {
        let window = Period::Year.resolve_window(mock_date(2024, 6, 15));
        assert_eq!(window.start, mock_date(2024, 1, 1));
        assert_eq!(window.end, mock_date(2025, 1, 1));
    }

    #[test]
    fn test_previous_month_handles_year_rollover() {
        let january = Period::Month.resolve_window(mock_date(2024, 1, 10));
        let previous = Period::Month.previous_window(&january);
        assert_eq!(previous.start, mock_date(2023, 12, 1));
        assert_eq!(previous.end, mock_date(2024, 1, 1));
    }

    #[test]
    fn test_previous_month_handles_varying_lengths() {
        // Previous of March is all of February, leap year included.
        let march = Period::Month.resolve_window(mock_date(2024, 3, 20));
        let previous = Period::Month.previous_window(&march);
        assert_eq!(previous.start, mock_date(2024, 2, 1));
        assert_eq!(previous.end, mock_date(2024, 3, 1));
    }

    #[test]
    fn test_previous_week_is_fixed_shift() {
        let window = Period::Week.resolve_window(mock_date(2024, 1, 15));
        let previous = Period::Week.previous_window(&window);
        assert_eq!(previous.start, mock_date(2024, 1, 1));
        assert_eq!(previous.end, mock_date(2024, 1, 8));
    }

    #[test]
    fn test_previous_year() {
        let window = Period::Year.resolve_window(mock_date(2024, 7, 1));
        let previous = Period::Year.previous_window(&window);
        assert_eq!(previous.start, mock_date(2023, 1, 1));
        assert_eq!(previous.end, mock_date(2024, 1, 1));
    }

    #[test]
    fn test_previous_twice_agrees_with_direct_resolution() {
        // Stepping back twice equals resolving two periods back directly.
        let anchor = mock_date(2024, 3, 14);
        for period in [Period::Week, Period::Month, Period::Year] {
            let current = period.resolve_window(anchor);
            let stepped = period.previous_window(&period.previous_window(&current));

            let direct_anchor = match period {
                Period::Week => anchor - Days::new(14),
                Period::Month => mock_date(2024, 1, 14),
                Period::Year => mock_date(2022, 3, 14),
            };
            assert_eq!(stepped, period.resolve_window(direct_anchor), "{period}");
        }
    }

    #[test]
    fn test_nominal_days() {
        assert_eq!(Period::Week.nominal_days(), 7);
        assert_eq!(Period::Month.nominal_days(), 30);
        assert_eq!(Period::Year.nominal_days(), 365);
    }
}
