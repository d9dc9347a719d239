//! Notification channel for winners

use async_trait::async_trait;

use crate::error::DomainError;
use crate::events::WinnerAnnounced;

/// Publishes winner announcements to an external channel
///
/// Delivery is best effort. Callers log failures and never surface them to
/// the person who won.
#[async_trait]
pub trait WinnerNotifier: Send + Sync {
    async fn notify(&self, notice: &WinnerAnnounced) -> Result<(), DomainError>;
}
