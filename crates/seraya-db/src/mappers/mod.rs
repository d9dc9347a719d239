//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database inserts

mod event;
mod link;

pub use link::LinkInsert;
