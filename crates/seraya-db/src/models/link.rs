//! Link database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub id: Uuid,
    pub event_id: i64,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub attempt_count: i32,
    pub winner_username: Option<String>,
    pub discord_id: Option<String>,
    pub role_reward: Option<String>,
    pub created_at: DateTime<Utc>,
    pub claimed_at: Option<DateTime<Utc>>,
}

/// Link row joined with its event's start
#[derive(Debug, Clone, FromRow)]
pub struct LinkWithEventModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub event_date: DateTime<Utc>,
}

/// Claim instant and event start of a redeemed link
#[derive(Debug, Clone, FromRow)]
pub struct ClaimTimingModel {
    pub claimed_at: DateTime<Utc>,
    pub event_date: DateTime<Utc>,
}
