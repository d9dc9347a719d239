//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request.

pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod redemption;
pub mod stats;
pub mod winner;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use redemption::RedemptionService;
pub use stats::StatsService;
pub use winner::{WinnerService, PUBLIC_WINNER_LIMIT};
