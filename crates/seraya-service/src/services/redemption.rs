//! Redemption service
//!
//! Resolves a submission against a claim link. The only mutual exclusion is
//! the conditional claim in the link repository; everything before it is an
//! optimistic read.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use seraya_core::entities::{LinkWithEvent, Winner};
use seraya_core::error::DomainError;
use seraya_core::events::WinnerAnnounced;
use seraya_core::policy::{classify, RedemptionOutcome, WindowStatus};
use seraya_core::LinkId;

use crate::dto::{LinkStatusResponse, SubmitRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Redemption service
pub struct RedemptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RedemptionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attempt to claim `link_id` for the submitted identity
    ///
    /// Every outcome except `NotFound` counts exactly one attempt against
    /// the link. Only `Won` announces the winner.
    #[instrument(skip(self, request), fields(link_id = %link_id))]
    pub async fn submit(
        &self,
        link_id: &str,
        request: SubmitRequest,
    ) -> ServiceResult<RedemptionOutcome> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let Ok(id) = LinkId::parse(link_id) else {
            debug!("Malformed link id");
            return Ok(RedemptionOutcome::NotFound);
        };

        let Some(LinkWithEvent { link, event_date }) =
            self.ctx.link_repo().find_with_event(id).await?
        else {
            debug!("Unknown link");
            return Ok(RedemptionOutcome::NotFound);
        };

        let now = self.ctx.now();
        let outcome = match classify(now, event_date, link.expires_at) {
            WindowStatus::NotStarted => match self.ctx.link_repo().record_attempt(id).await? {
                Some(counted) => RedemptionOutcome::NotStarted {
                    event_date,
                    attempt_count: counted.attempt_count,
                },
                None => RedemptionOutcome::NotFound,
            },
            WindowStatus::Expired => match self.ctx.link_repo().record_attempt(id).await? {
                Some(counted) => RedemptionOutcome::Expired {
                    expires_at: counted.expires_at,
                    attempt_count: counted.attempt_count,
                },
                None => RedemptionOutcome::NotFound,
            },
            WindowStatus::Active if link.is_used() => self.already_claimed(id).await?,
            WindowStatus::Active => {
                let winner = Winner {
                    username: request.username.trim().to_string(),
                    discord_id: request.discord_id.trim().to_string(),
                    role_reward: self.ctx.reward_catalog().pick().to_string(),
                };

                match self.ctx.link_repo().claim(id, &winner).await? {
                    Some(attempt_count) => {
                        let reward = winner.role_reward.clone();
                        self.announce(id, winner, now);
                        RedemptionOutcome::Won {
                            reward,
                            expires_at: link.expires_at,
                            attempt_count,
                        }
                    }
                    None => {
                        debug!("Lost the claim race");
                        self.already_claimed(id).await?
                    }
                }
            }
        };

        info!(
            outcome = outcome.label(),
            attempt_count = outcome.attempt_count(),
            "Submission resolved"
        );

        Ok(outcome)
    }

    /// Whether a link has been claimed
    #[instrument(skip(self), fields(link_id = %link_id))]
    pub async fn check_link(&self, link_id: &str) -> ServiceResult<LinkStatusResponse> {
        let unknown = || ServiceError::Domain(DomainError::LinkNotFound(link_id.to_string()));

        let id = LinkId::parse(link_id).map_err(|_| unknown())?;
        let link = self
            .ctx
            .link_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(unknown)?;

        Ok(LinkStatusResponse {
            is_used: link.is_used(),
        })
    }

    /// Count the attempt, then report whoever holds the link
    async fn already_claimed(&self, id: LinkId) -> ServiceResult<RedemptionOutcome> {
        Ok(match self.ctx.link_repo().record_attempt(id).await? {
            Some(link) => RedemptionOutcome::AlreadyClaimed {
                winner_username: link.winner_username().map(str::to_string),
                attempt_count: link.attempt_count,
            },
            None => RedemptionOutcome::NotFound,
        })
    }

    /// Fire-and-forget winner announcement
    fn announce(&self, id: LinkId, winner: Winner, now: DateTime<Utc>) {
        let notifier = self.ctx.notifier();
        let notice = WinnerAnnounced::new(id, winner, now);

        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&notice).await {
                warn!(link_id = %notice.link_id, error = %e, "Failed to announce winner");
            }
        });
    }
}
