//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication and validated bodies.

mod auth;
mod validated;

pub use auth::AdminUser;
pub use validated::ValidatedJson;
