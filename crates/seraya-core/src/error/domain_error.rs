//! Domain errors - error types for the domain layer
//!
//! The four redemption outcomes (not found, not started, expired, already
//! claimed) are not errors; they live in [`crate::policy::RedemptionOutcome`].

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid event date: {0}")]
    InvalidEventDate(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("No upcoming event, create an event first")]
    NoUpcomingEvent,

    #[error("Reward catalog must contain at least one role")]
    EmptyRewardCatalog,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::LinkNotFound(_) => "UNKNOWN_LINK",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEventDate(_) => "INVALID_EVENT_DATE",
            Self::NoUpcomingEvent => "NO_UPCOMING_EVENT",
            Self::EmptyRewardCatalog => "EMPTY_REWARD_CATALOG",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::NotificationError(_) => "NOTIFICATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LinkNotFound(_) | Self::EventNotFound(_))
    }

    /// Check if this is caused by bad input or an unmet precondition
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEventDate(_) | Self::NoUpcomingEvent
        )
    }

    /// Check if the datastore failed
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
