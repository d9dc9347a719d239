//! Time-window policy for claim links

use chrono::{DateTime, Utc};

/// Position of an instant relative to a link's claim window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowStatus {
    /// Before the event starts
    NotStarted,
    /// Inside `[event_date, expires_at]`
    Active,
    /// After the link expired
    Expired,
}

/// Classify `now` against a claim window.
///
/// Both bounds are inclusive: a submission at exactly `event_date` or
/// exactly `expires_at` is `Active`. There is no grace period.
pub fn classify(
    now: DateTime<Utc>,
    event_date: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> WindowStatus {
    if now < event_date {
        WindowStatus::NotStarted
    } else if now > expires_at {
        WindowStatus::Expired
    } else {
        WindowStatus::Active
    }
}
