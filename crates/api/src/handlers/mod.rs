//! HTTP handlers, one module per resource.

pub mod auth;
pub mod brain_dumps;
pub mod calendar_events;
pub mod health;
pub mod shopping_items;
pub mod tasks;
