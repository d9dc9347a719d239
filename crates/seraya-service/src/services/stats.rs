//! Public statistics

use tracing::instrument;

use seraya_core::policy::average_claim_speed;

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let total_events = self.ctx.event_repo().count().await?;
        let total_roles = self.ctx.link_repo().count_claimed().await?;
        let timings = self.ctx.link_repo().claim_timings().await?;

        Ok(StatsResponse {
            total_events,
            total_roles,
            average_speed: average_claim_speed(&timings),
        })
    }
}
