//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in seraya-core.

mod error;
mod event;
mod link;

pub use event::PgEventRepository;
pub use link::PgLinkRepository;
