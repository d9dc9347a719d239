//! Event entity - one scheduled giveaway

use chrono::{DateTime, Duration, Utc};

/// How long a link stays redeemable after its event starts, unless the
/// caller picks another window.
pub const DEFAULT_CLAIM_WINDOW_SECS: i64 = 3600;

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    /// Instant (UTC) at which links for this event become claimable
    pub event_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event starts strictly after `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.event_date > now
    }

    /// Expiry for a link minted with the default claim window
    pub fn default_link_expiry(&self) -> DateTime<Utc> {
        self.event_date + Duration::seconds(DEFAULT_CLAIM_WINDOW_SECS)
    }
}
