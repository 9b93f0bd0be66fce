//! Core types for the clubhub ecosystem.
//!
//! This crate provides the types and domain logic shared by clubhub clients:
//! - `Event`, `Member` and related wire models for the hub backend
//! - `tag` and `position` classifiers for schedule filtering and roster grouping
//! - `summary` for turning an event's answer map into attendance rosters
//! - `directory` for the warm-once member lookup cache
//! - `protocol` for the REST request/response bodies

pub mod directory;
pub mod error;
pub mod event;
pub mod member;
pub mod position;
pub mod protocol;
pub mod summary;
pub mod tag;

// Re-export the wire models at crate root for convenience
pub use error::{HubError, HubResult};
pub use event::*;
pub use member::*;
