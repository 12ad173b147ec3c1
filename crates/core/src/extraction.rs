//! Output schema of the external brain-dump extraction service.
//!
//! The service classifies free-form text into tasks (optionally
//! decomposed into ordered subtasks), shopping items, and calendar
//! events. This module only defines the shape of that output; the HTTP
//! client lives in the `offload-extractor` crate and persistence in
//! `offload-db`.

use serde::{Deserialize, Serialize};

/// A subtask proposed by the extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSubTask {
    pub description: String,
    /// Estimated time to complete, in minutes.
    #[serde(default)]
    pub estimated_time_minutes: Option<i32>,
    /// Due date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Position in the parent task's checklist.
    pub order: i32,
}

/// A task extracted from a brain dump, with an optional decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedTask {
    pub description: String,
    /// Due date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Estimated time to complete, in minutes.
    pub estimated_time_minutes: i32,
    /// Whether the service decided to break the task into subtasks.
    pub should_decompose: bool,
    /// The service's reasoning for the decomposition decision.
    /// Informational only; never persisted.
    #[serde(default)]
    pub reasoning: Option<String>,
    /// Ordered subtasks; empty when `should_decompose` is false.
    #[serde(default)]
    pub subtasks: Vec<ExtractedSubTask>,
}

/// A shopping item extracted from a brain dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedShoppingItem {
    pub description: String,
}

/// A calendar event extracted from a brain dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedCalendarEvent {
    pub description: String,
    /// Event date in `YYYY-MM-DD` format.
    pub event_date: String,
    /// Event time as `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub event_time: Option<String>,
}

/// Full result of classifying one brain dump.
///
/// Any of the category lists may be empty; a dump that mentions nothing
/// actionable produces the default value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedBrainDump {
    #[serde(default)]
    pub tasks: Vec<ExtractedTask>,
    #[serde(default)]
    pub shopping_items: Vec<ExtractedShoppingItem>,
    #[serde(default)]
    pub calendar_events: Vec<ExtractedCalendarEvent>,
}

#[cfg(test)]
mod tests {
    use super::ExtractedBrainDump;

    #[test]
    fn missing_categories_default_to_empty() {
        let dump: ExtractedBrainDump = serde_json::from_str("{}").unwrap();
        assert!(dump.tasks.is_empty());
        assert!(dump.shopping_items.is_empty());
        assert!(dump.calendar_events.is_empty());
    }

    #[test]
    fn deserializes_full_result() {
        let dump: ExtractedBrainDump = serde_json::from_value(serde_json::json!({
            "tasks": [{
                "description": "Plan the birthday party",
                "due_date": "2026-09-12",
                "estimated_time_minutes": 120,
                "should_decompose": true,
                "reasoning": "Multi-step event planning",
                "subtasks": [
                    {"description": "Book venue", "order": 1},
                    {"description": "Send invites", "order": 2, "due_date": "2026-09-01"}
                ]
            }],
            "shopping_items": [{"description": "Milk"}],
            "calendar_events": [{
                "description": "Dentist",
                "event_date": "2026-09-03",
                "event_time": "14:30"
            }]
        }))
        .unwrap();

        assert_eq!(dump.tasks.len(), 1);
        assert_eq!(dump.tasks[0].subtasks.len(), 2);
        assert_eq!(dump.tasks[0].subtasks[1].order, 2);
        assert_eq!(dump.shopping_items.len(), 1);
        assert_eq!(dump.calendar_events[0].event_time.as_deref(), Some("14:30"));
    }
}
