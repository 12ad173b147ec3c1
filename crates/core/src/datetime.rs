//! Parsing for the date and time string formats used on the wire.
//!
//! Update requests and extraction-service output carry dates as
//! `YYYY-MM-DD` strings and times as `HH:MM` or `HH:MM:SS`. These helpers
//! are the single place those formats are interpreted.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;

/// Date format accepted everywhere a date string appears.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

/// Parse a time string as `HH:MM` or `HH:MM:SS`, chosen by colon count.
pub fn parse_time(value: &str) -> Result<NaiveTime, CoreError> {
    let format = if value.matches(':').count() == 2 {
        "%H:%M:%S"
    } else {
        "%H:%M"
    };
    NaiveTime::parse_from_str(value, format).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid time '{value}', expected HH:MM or HH:MM:SS"
        ))
    })
}
