//! Entity to DTO mappers
//!
//! Most responses render instants, so the mappers take the display zone
//! alongside the entity instead of implementing `From`.

use seraya_common::DisplayZone;
use seraya_core::entities::{Event, Link};
use seraya_core::RedemptionOutcome;

use super::responses::{
    NextEventResponse, PublicWinnerResponse, SubmissionResponse, WinnerResponse,
};

// ============================================================================
// Submission Mappers
// ============================================================================

impl SubmissionResponse {
    fn with_message(message: impl Into<String>, attempt_count: i32) -> Self {
        Self {
            message: message.into(),
            attempt_count,
            role_reward: None,
            expires_at: None,
            event_date_formatted: None,
            expired_at_formatted: None,
            winner_username: None,
        }
    }

    pub fn from_outcome(outcome: &RedemptionOutcome, zone: &DisplayZone) -> Self {
        match outcome {
            RedemptionOutcome::Won {
                reward,
                expires_at,
                attempt_count,
            } => Self {
                role_reward: Some(reward.clone()),
                expires_at: Some(zone.format(*expires_at)),
                ..Self::with_message(
                    "Congratulations! You are the winner. Your Discord role will be granted shortly.",
                    *attempt_count,
                )
            },
            RedemptionOutcome::NotFound => Self::with_message("Invalid link!", 0),
            RedemptionOutcome::NotStarted {
                event_date,
                attempt_count,
            } => Self {
                event_date_formatted: Some(zone.format(*event_date)),
                ..Self::with_message("The event has not started yet!", *attempt_count)
            },
            RedemptionOutcome::Expired {
                expires_at,
                attempt_count,
            } => Self {
                expired_at_formatted: Some(zone.format(*expires_at)),
                ..Self::with_message("This link has expired!", *attempt_count)
            },
            RedemptionOutcome::AlreadyClaimed {
                winner_username,
                attempt_count,
            } => {
                let claimed_by = winner_username.as_deref().unwrap_or("someone else");
                Self {
                    winner_username: winner_username.clone(),
                    ..Self::with_message(
                        format!(
                            "This link was already claimed by {claimed_by}! ({attempt_count} people tried)"
                        ),
                        *attempt_count,
                    )
                }
            }
        }
    }
}

// ============================================================================
// Winner Mappers
// ============================================================================

impl WinnerResponse {
    /// `None` for links nobody has claimed
    pub fn from_link(link: &Link, zone: &DisplayZone) -> Option<Self> {
        let winner = link.winner.as_ref()?;
        Some(Self {
            id: link.id,
            winner_username: winner.username.clone(),
            discord_id: winner.discord_id.clone(),
            role_reward: winner.role_reward.clone(),
            created_at: link.created_at,
            claimed_at: link.claimed_at,
            created_at_formatted: zone.format(link.claimed_at.unwrap_or(link.created_at)),
        })
    }
}

impl From<WinnerResponse> for PublicWinnerResponse {
    fn from(winner: WinnerResponse) -> Self {
        Self {
            id: winner.id,
            winner_username: winner.winner_username,
            role_reward: winner.role_reward,
            created_at: winner.created_at,
            claimed_at: winner.claimed_at,
            created_at_formatted: winner.created_at_formatted,
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl NextEventResponse {
    pub fn none(now: chrono::DateTime<chrono::Utc>, zone: &DisplayZone) -> Self {
        Self {
            message: "No upcoming event".to_string(),
            current_time: zone.format(now),
            event_date: None,
            event_date_formatted: None,
            link_id: None,
            expires_at: None,
            expires_at_formatted: None,
        }
    }

    pub fn found(
        now: chrono::DateTime<chrono::Utc>,
        event: &Event,
        link: Option<&Link>,
        zone: &DisplayZone,
    ) -> Self {
        Self {
            message: "Event found".to_string(),
            current_time: zone.format(now),
            event_date: Some(event.event_date),
            event_date_formatted: Some(zone.format(event.event_date)),
            link_id: link.map(|l| l.id),
            expires_at: link.map(|l| l.expires_at),
            expires_at_formatted: link.map(|l| zone.format(l.expires_at)),
        }
    }
}
