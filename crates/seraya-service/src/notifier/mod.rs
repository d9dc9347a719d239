//! Winner notifiers
//!
//! - [`DiscordWebhookNotifier`]: posts an embed to a Discord webhook
//! - [`DisabledNotifier`]: drops announcements when no webhook is configured

mod discord;

pub use discord::{DisabledNotifier, DiscordWebhookNotifier};

use std::sync::Arc;

use seraya_common::WebhookConfig;
use seraya_core::traits::WinnerNotifier;

/// Pick the notifier the configuration asks for
pub fn from_config(config: &WebhookConfig) -> Result<Arc<dyn WinnerNotifier>, reqwest::Error> {
    match config.discord_url.as_deref() {
        Some(url) => Ok(Arc::new(DiscordWebhookNotifier::new(url, config.timeout_secs)?)),
        None => Ok(Arc::new(DisabledNotifier)),
    }
}
