//! Row models and request DTOs, one module per entity.

pub mod brain_dump;
pub mod calendar_event;
pub mod shopping_item;
pub mod task;
pub mod user;
