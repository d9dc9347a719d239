//! Winner announcement emitted after a successful redemption

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Winner;
use crate::value_objects::LinkId;

/// Sent to the notification channel once per claimed link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerAnnounced {
    pub username: String,
    pub discord_id: String,
    pub role_reward: String,
    pub link_id: LinkId,
    pub announced_at: DateTime<Utc>,
}

impl WinnerAnnounced {
    pub fn new(link_id: LinkId, winner: Winner, announced_at: DateTime<Utc>) -> Self {
        Self {
            username: winner.username,
            discord_id: winner.discord_id,
            role_reward: winner.role_reward,
            link_id,
            announced_at,
        }
    }
}
