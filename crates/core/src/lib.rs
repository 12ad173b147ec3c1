//! Shared domain types for the Offload backend.

pub mod datetime;
pub mod error;
pub mod extraction;
pub mod types;
