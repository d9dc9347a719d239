//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Instants are
//! sent as RFC 3339 UTC, usually next to a `*_formatted` string in the
//! display zone. Keys follow what the web client already reads, which is
//! why a few are camelCase.

use chrono::{DateTime, Utc};
use serde::Serialize;

use seraya_core::LinkId;

// ============================================================================
// Service Responses
// ============================================================================

/// Banner served at `/`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl ServiceInfoResponse {
    pub fn running(name: &str) -> Self {
        Self {
            status: "ok".to_string(),
            message: format!("{name} backend API is running"),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// ============================================================================
// Event Responses
// ============================================================================

/// Result of `POST /api/admin/add-event`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub message: String,
    pub link_id: LinkId,
    pub event_id: i64,
    pub event_date: DateTime<Utc>,
    pub event_date_formatted: String,
    pub expires_at: DateTime<Utc>,
    pub expires_at_formatted: String,
}

/// Result of `POST /api/generate-link`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLinkResponse {
    pub link_id: LinkId,
    pub event_id: i64,
    /// Formatted event start
    pub event_date: String,
    /// Formatted link expiry
    pub expires_at: String,
}

/// Result of `GET /api/public/next-event`
///
/// Event fields are omitted when nothing is scheduled.
#[derive(Debug, Clone, Serialize)]
pub struct NextEventResponse {
    pub message: String,
    pub current_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at_formatted: Option<String>,
}

// ============================================================================
// Link Responses
// ============================================================================

/// Result of `GET /api/check-link/:link_id`
#[derive(Debug, Clone, Serialize)]
pub struct LinkStatusResponse {
    pub is_used: bool,
}

/// Body of every `POST /api/submit/:link_id` answer
///
/// Which optional fields are present depends on the outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub attempt_count: i32,
    #[serde(rename = "roleReward", skip_serializing_if = "Option::is_none")]
    pub role_reward: Option<String>,
    /// Formatted expiry of a won link
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_username: Option<String>,
}

// ============================================================================
// Winner Responses
// ============================================================================

/// Winner as seen by the admin
#[derive(Debug, Clone, Serialize)]
pub struct WinnerResponse {
    pub id: LinkId,
    pub winner_username: String,
    pub discord_id: String,
    pub role_reward: String,
    pub created_at: DateTime<Utc>,
    pub claimed_at: Option<DateTime<Utc>>,
    /// Claim instant, or link creation for rows without one
    pub created_at_formatted: String,
}

/// Winner as shown publicly, without the external id
#[derive(Debug, Clone, Serialize)]
pub struct PublicWinnerResponse {
    pub id: LinkId,
    pub winner_username: String,
    pub role_reward: String,
    pub created_at: DateTime<Utc>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at_formatted: String,
}

// ============================================================================
// Stats Responses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub total_events: i64,
    pub total_roles: i64,
    /// Mean seconds between event start and claim
    pub average_speed: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
