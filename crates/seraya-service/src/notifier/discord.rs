//! Discord webhook delivery

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use seraya_core::error::DomainError;
use seraya_core::events::WinnerAnnounced;
use seraya_core::traits::WinnerNotifier;

/// Gold
const EMBED_COLOR: u32 = 0x00ff_d700;

/// Posts winner announcements to a Discord webhook
#[derive(Debug, Clone)]
pub struct DiscordWebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl DiscordWebhookNotifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Webhook body for one announcement
    pub fn payload(notice: &WinnerAnnounced) -> Value {
        json!({
            "embeds": [{
                "title": "🏆 New giveaway winner!",
                "description": "🔥 **Fastest fingers!** 🚀\n\n🎉 **Congratulations:**",
                "color": EMBED_COLOR,
                "fields": [
                    { "name": "👤 Username", "value": format!("`{}`", notice.username), "inline": true },
                    { "name": "🆔 Discord ID", "value": format!("`{}`", notice.discord_id), "inline": true },
                    { "name": "🏅 Role won", "value": format!("`{}`", notice.role_reward), "inline": false },
                    { "name": "🔗 Link ID", "value": format!("`{}`", notice.link_id), "inline": false },
                    { "name": "⏳ Won at", "value": format!("<t:{}:F>", notice.announced_at.timestamp()), "inline": false },
                ],
                "timestamp": notice.announced_at.to_rfc3339(),
            }]
        })
    }
}

#[async_trait]
impl WinnerNotifier for DiscordWebhookNotifier {
    #[instrument(skip(self, notice), fields(link_id = %notice.link_id))]
    async fn notify(&self, notice: &WinnerAnnounced) -> Result<(), DomainError> {
        self.client
            .post(&self.url)
            .json(&Self::payload(notice))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DomainError::NotificationError(e.to_string()))?;

        debug!("Winner announced on webhook");
        Ok(())
    }
}

/// Notifier used when no webhook is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl WinnerNotifier for DisabledNotifier {
    async fn notify(&self, notice: &WinnerAnnounced) -> Result<(), DomainError> {
        debug!(link_id = %notice.link_id, "Webhook not configured, skipping announcement");
        Ok(())
    }
}
