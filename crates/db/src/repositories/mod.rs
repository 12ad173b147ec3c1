//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod brain_dump_repo;
pub mod calendar_event_repo;
pub mod shopping_item_repo;
pub mod task_repo;
pub mod user_repo;

pub use brain_dump_repo::{BrainDumpRepo, PersistError};
pub use calendar_event_repo::CalendarEventRepo;
pub use shopping_item_repo::ShoppingItemRepo;
pub use task_repo::{TaskRepo, TaskSort};
pub use user_repo::UserRepo;
