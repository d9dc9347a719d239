//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names accept both the camelCase keys the web client sends and
//! snake_case.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject values that are empty once surrounding whitespace is removed
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, max = 256, message = "Password is required"))]
    pub password: String,
}

/// Schedule a new event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddEventRequest {
    /// RFC 3339 instant, e.g. `2026-10-20T08:00:00Z`
    #[serde(rename = "eventDate", alias = "event_date")]
    #[validate(length(min = 1, message = "eventDate is required"))]
    pub event_date: String,
}

// ============================================================================
// Redemption Requests
// ============================================================================

/// Identity submitted against a claim link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(
        length(min = 1, max = 100, message = "Username must be 1-100 characters"),
        custom(function = "not_blank", message = "Username is required")
    )]
    pub username: String,

    #[serde(rename = "discordId", alias = "discord_id")]
    #[validate(
        length(min = 1, max = 100, message = "Discord ID must be 1-100 characters"),
        custom(function = "not_blank", message = "Discord ID is required")
    )]
    pub discord_id: String,
}
