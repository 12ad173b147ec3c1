//! Calendar event entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use offload_core::datetime::{parse_date, parse_time};
use offload_core::error::CoreError;
use offload_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `calendar_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub raw_input: String,
    pub created_at: Timestamp,
}

/// DTO for partially updating a calendar event. Omitted fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateCalendarEvent {
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub event_date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`.
    pub event_time: Option<String>,
}

/// Typed change set produced from [`UpdateCalendarEvent`].
#[derive(Debug, Clone)]
pub struct CalendarEventChanges {
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
}

impl UpdateCalendarEvent {
    /// Convert the wire DTO into a typed change set, parsing date and time strings.
    pub fn changes(&self) -> Result<CalendarEventChanges, CoreError> {
        Ok(CalendarEventChanges {
            description: self.description.clone(),
            event_date: self.event_date.as_deref().map(parse_date).transpose()?,
            event_time: self.event_time.as_deref().map(parse_time).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateCalendarEvent;

    #[test]
    fn changes_accept_both_time_formats() {
        let short: UpdateCalendarEvent =
            serde_json::from_value(serde_json::json!({"event_time": "08:15"})).unwrap();
        assert_eq!(
            short.changes().unwrap().event_time,
            Some(chrono::NaiveTime::from_hms_opt(8, 15, 0).unwrap())
        );

        let long: UpdateCalendarEvent =
            serde_json::from_value(serde_json::json!({"event_time": "08:15:30"})).unwrap();
        assert_eq!(
            long.changes().unwrap().event_time,
            Some(chrono::NaiveTime::from_hms_opt(8, 15, 30).unwrap())
        );
    }
}
