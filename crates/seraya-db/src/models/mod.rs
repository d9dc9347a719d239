//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod link;

pub use event::EventModel;
pub use link::{ClaimTimingModel, LinkModel, LinkWithEventModel};
