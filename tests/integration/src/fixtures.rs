//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "integration-admin-password";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Admin login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminTokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Add event request, as the admin panel sends it
#[derive(Debug, Serialize)]
pub struct AddEventRequest {
    #[serde(rename = "eventDate")]
    pub event_date: String,
}

impl AddEventRequest {
    /// Event starting `offset` from now
    pub fn starting_in(offset: Duration) -> Self {
        Self::at(Utc::now() + offset)
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            event_date: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub message: String,
    pub link_id: String,
    pub event_id: i64,
    pub event_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLinkResponse {
    pub link_id: String,
    pub event_id: i64,
}

/// Submission body, as the claim page sends it
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub username: String,
    #[serde(rename = "discordId")]
    pub discord_id: String,
}

impl SubmitRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("player{suffix}"),
            discord_id: format!("{}", 900_000 + suffix),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub attempt_count: i32,
    #[serde(rename = "roleReward")]
    pub role_reward: Option<String>,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<String>,
    pub event_date_formatted: Option<String>,
    pub expired_at_formatted: Option<String>,
    pub winner_username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkStatusResponse {
    pub is_used: bool,
}

#[derive(Debug, Deserialize)]
pub struct WinnerResponse {
    pub id: String,
    pub winner_username: String,
    pub discord_id: Option<String>,
    pub role_reward: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub total_events: i64,
    pub total_roles: i64,
    pub average_speed: i64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
