//! Link entity <-> model mapper

use chrono::{DateTime, Utc};
use uuid::Uuid;

use seraya_core::entities::{ClaimTiming, Link, LinkWithEvent, Winner};
use seraya_core::value_objects::LinkId;

use crate::models::{ClaimTimingModel, LinkModel, LinkWithEventModel};

/// Convert LinkModel to Link entity
///
/// The winner is read only for used rows; the table's CHECK constraint
/// guarantees its columns are populated there.
impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        let winner = model.is_used.then(|| Winner {
            username: model.winner_username.unwrap_or_default(),
            discord_id: model.discord_id.unwrap_or_default(),
            role_reward: model.role_reward.unwrap_or_default(),
        });

        Link {
            id: LinkId::new(model.id),
            event_id: model.event_id,
            expires_at: model.expires_at,
            attempt_count: model.attempt_count,
            winner,
            created_at: model.created_at,
            claimed_at: model.claimed_at,
        }
    }
}

impl From<LinkWithEventModel> for LinkWithEvent {
    fn from(model: LinkWithEventModel) -> Self {
        LinkWithEvent {
            link: Link::from(model.link),
            event_date: model.event_date,
        }
    }
}

impl From<ClaimTimingModel> for ClaimTiming {
    fn from(model: ClaimTimingModel) -> Self {
        ClaimTiming {
            claimed_at: model.claimed_at,
            event_date: model.event_date,
        }
    }
}

/// Values for inserting a fresh link
pub struct LinkInsert {
    pub id: Uuid,
    pub event_id: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl LinkInsert {
    pub fn new(link: &Link) -> Self {
        Self {
            id: link.id.into_inner(),
            event_id: link.event_id,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}
