//! Composite result of persisting a brain dump.

use serde::Serialize;

use crate::models::calendar_event::CalendarEvent;
use crate::models::shopping_item::ShoppingItem;
use crate::models::task::TaskWithSubtasks;

/// Every record created from one brain dump, grouped by category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrainDumpRecords {
    pub tasks: Vec<TaskWithSubtasks>,
    pub shopping_items: Vec<ShoppingItem>,
    pub calendar_events: Vec<CalendarEvent>,
}
