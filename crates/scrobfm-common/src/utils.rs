//! Shared date parsing and formatting helpers.

use crate::types::ScrobError;
use chrono::{Datelike, NaiveDate};

/// Date format used at every user-facing boundary (CLI and config).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date string.
///
/// Years are limited to four digits. `%Y` itself accepts years far
/// beyond that, right up against chrono's representable range, where
/// window arithmetic around the date could no longer step forward.
///
/// # Errors
///
/// Returns [`ScrobError::InvalidArgument`] for anything that is not a
/// valid calendar date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate, ScrobError> {
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        ScrobError::InvalidArgument(format!("date should be YYYY-MM-DD, but '{input}' was passed"))
    })?;

    if !(1..=9999).contains(&date.year()) {
        return Err(ScrobError::InvalidArgument(format!(
            "date year should be between 1 and 9999, but '{input}' was passed"
        )));
    }

    Ok(date)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(format_date(date), "2024-02-29");
    }

    #[test]
    fn test_parse_date_invalid() {
        for input in ["2024-13-01", "2023-02-29", "01 Jan 2024", "garbage", ""] {
            let err = parse_date(input).unwrap_err();
            assert!(matches!(err, ScrobError::InvalidArgument(_)), "input: {input}");
        }
    }

    #[test]
    fn test_parse_date_rejects_out_of_range_years() {
        // Years near chrono's ceiling parse under %Y but would leave no
        // room for the year after; they are rejected at the boundary.
        for input in ["262142-06-01", "10000-01-01", "0000-01-01", "-0001-01-01"] {
            let err = parse_date(input).unwrap_err();
            assert!(matches!(err, ScrobError::InvalidArgument(_)), "input: {input}");
        }
        assert!(parse_date("9999-12-31").is_ok());
        assert!(parse_date("0001-01-01").is_ok());
    }
}
