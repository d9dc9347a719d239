//! Link entity - a single-use claim token tied to one event

use chrono::{DateTime, Utc};

use crate::value_objects::LinkId;

/// Identity recorded by the winning redemption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub username: String,
    pub discord_id: String,
    pub role_reward: String,
}

/// Link entity
///
/// A link is unused while `winner` is `None`. The winner is written exactly
/// once, by the conditional update that flips the link to used, and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub event_id: i64,
    pub expires_at: DateTime<Utc>,
    pub attempt_count: i32,
    pub winner: Option<Winner>,
    pub created_at: DateTime<Utc>,
    pub claimed_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Create a fresh, unused link for an event
    pub fn new(event_id: i64, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: LinkId::generate(),
            event_id,
            expires_at,
            attempt_count: 0,
            winner: None,
            created_at: Utc::now(),
            claimed_at: None,
        }
    }

    /// Whether the link has already been redeemed
    #[inline]
    pub fn is_used(&self) -> bool {
        self.winner.is_some()
    }

    /// Winner's username, if the link has been redeemed
    pub fn winner_username(&self) -> Option<&str> {
        self.winner.as_ref().map(|w| w.username.as_str())
    }
}

/// A link joined with its owning event's start instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWithEvent {
    pub link: Link,
    pub event_date: DateTime<Utc>,
}

/// Claim instant of a redeemed link next to its event's start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimTiming {
    pub claimed_at: DateTime<Utc>,
    pub event_date: DateTime<Utc>,
}
