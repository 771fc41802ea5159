use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::{ChartError, ChartResult};

/// Parses a calendar year from free text using the fixed 4-digit format
/// shared by the dataset loader and the year-range inputs.
///
/// Surrounding whitespace is tolerated; anything other than exactly four
/// ASCII digits is rejected.
pub fn parse_year(text: &str) -> ChartResult<i32> {
    let trimmed = text.trim();
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed
            .parse::<i32>()
            .map_err(|_| ChartError::InvalidYearText {
                input: text.to_owned(),
            })
    } else {
        Err(ChartError::InvalidYearText {
            input: text.to_owned(),
        })
    }
}

/// Formats a year as the 4-digit string used for axis ticks and the
/// year-range inputs.
#[must_use]
pub fn format_year(year: i32) -> String {
    format!("{year:04}")
}

/// Maps a calendar year to the unix timestamp of Jan 1 00:00:00 UTC.
///
/// The time axis runs over these instants, so year positions reflect true
/// calendar spacing rather than a uniform index.
#[must_use]
pub fn year_to_unix_seconds(year: i32) -> f64 {
    match Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single() {
        Some(moment) => datetime_to_unix_seconds(moment),
        // Jan 1 midnight exists in every UTC year; only out-of-range years
        // (beyond chrono's +/-262143) fall through.
        None => f64::NAN,
    }
}

/// Returns the calendar year containing a unix timestamp.
#[must_use]
pub fn year_from_unix_seconds(seconds: f64) -> Option<i32> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp(seconds.floor() as i64, 0).map(|moment| moment.year())
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
