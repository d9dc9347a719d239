//! Results of a redemption attempt

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Every way a redemption attempt can end, short of a storage failure
///
/// Only `Won` means this caller claimed the link. The other variants are
/// ordinary answers, not errors, and each carries the attempt count the
/// caller should see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RedemptionOutcome {
    Won {
        reward: String,
        expires_at: DateTime<Utc>,
        attempt_count: i32,
    },
    NotFound,
    NotStarted {
        event_date: DateTime<Utc>,
        attempt_count: i32,
    },
    Expired {
        expires_at: DateTime<Utc>,
        attempt_count: i32,
    },
    AlreadyClaimed {
        winner_username: Option<String>,
        attempt_count: i32,
    },
}

impl RedemptionOutcome {
    /// Attempt count reported to the caller (0 for unknown links)
    pub fn attempt_count(&self) -> i32 {
        match self {
            Self::NotFound => 0,
            Self::Won { attempt_count, .. }
            | Self::NotStarted { attempt_count, .. }
            | Self::Expired { attempt_count, .. }
            | Self::AlreadyClaimed { attempt_count, .. } => *attempt_count,
        }
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }

    /// Stable label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Won { .. } => "won",
            Self::NotFound => "not_found",
            Self::NotStarted { .. } => "not_started",
            Self::Expired { .. } => "expired",
            Self::AlreadyClaimed { .. } => "already_claimed",
        }
    }
}
