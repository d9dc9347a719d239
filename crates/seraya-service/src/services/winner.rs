//! Winner listings

use tracing::instrument;

use crate::dto::{PublicWinnerResponse, WinnerResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many winners the public board shows
pub const PUBLIC_WINNER_LIMIT: i64 = 10;

/// Winner service
pub struct WinnerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WinnerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every winner, newest claim first (admin view)
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<WinnerResponse>> {
        self.list(None).await
    }

    /// Latest winners without their Discord IDs
    #[instrument(skip(self))]
    pub async fn list_public(&self) -> ServiceResult<Vec<PublicWinnerResponse>> {
        Ok(self
            .list(Some(PUBLIC_WINNER_LIMIT))
            .await?
            .into_iter()
            .map(PublicWinnerResponse::from)
            .collect())
    }

    async fn list(&self, limit: Option<i64>) -> ServiceResult<Vec<WinnerResponse>> {
        let zone = self.ctx.display_zone();
        let links = self.ctx.link_repo().find_winners(limit).await?;

        Ok(links
            .iter()
            .filter_map(|link| WinnerResponse::from_link(link, zone))
            .collect())
    }
}
