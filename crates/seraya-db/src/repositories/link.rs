//! PostgreSQL implementation of LinkRepository
//!
//! `claim` is the only place a link becomes used. It is a single
//! conditional UPDATE, so among concurrent claimers exactly one sees a row
//! come back; the rest get `None`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use seraya_core::entities::{ClaimTiming, Link, LinkWithEvent, Winner};
use seraya_core::error::DomainError;
use seraya_core::traits::{LinkRepository, RepoResult};
use seraya_core::value_objects::LinkId;

use crate::mappers::LinkInsert;
use crate::models::{ClaimTimingModel, LinkModel, LinkWithEventModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self, id), fields(link_id = %id))]
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r#"
            SELECT id, event_id, expires_at, is_used, attempt_count,
                   winner_username, discord_id, role_reward, created_at, claimed_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self, id), fields(link_id = %id))]
    async fn find_with_event(&self, id: LinkId) -> RepoResult<Option<LinkWithEvent>> {
        let result = sqlx::query_as::<_, LinkWithEventModel>(
            r#"
            SELECT l.id, l.event_id, l.expires_at, l.is_used, l.attempt_count,
                   l.winner_username, l.discord_id, l.role_reward, l.created_at, l.claimed_at,
                   e.event_date
            FROM links l
            INNER JOIN events e ON e.id = l.event_id
            WHERE l.id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LinkWithEvent::from))
    }

    #[instrument(skip(self, link), fields(link_id = %link.id, event_id = link.event_id))]
    async fn create(&self, link: &Link) -> RepoResult<()> {
        let insert = LinkInsert::new(link);

        sqlx::query(
            r#"
            INSERT INTO links (id, event_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(insert.id)
        .bind(insert.event_id)
        .bind(insert.expires_at)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::EventNotFound(insert.event_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_first_for_event(&self, event_id: i64) -> RepoResult<Option<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r#"
            SELECT id, event_id, expires_at, is_used, attempt_count,
                   winner_username, discord_id, role_reward, created_at, claimed_at
            FROM links
            WHERE event_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self, id), fields(link_id = %id))]
    async fn record_attempt(&self, id: LinkId) -> RepoResult<Option<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r#"
            UPDATE links
            SET attempt_count = attempt_count + 1
            WHERE id = $1
            RETURNING id, event_id, expires_at, is_used, attempt_count,
                      winner_username, discord_id, role_reward, created_at, claimed_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self, id, winner), fields(link_id = %id, role_reward = %winner.role_reward))]
    async fn claim(&self, id: LinkId, winner: &Winner) -> RepoResult<Option<i32>> {
        let attempt_count: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE links
            SET is_used = TRUE,
                winner_username = $2,
                discord_id = $3,
                role_reward = $4,
                claimed_at = NOW(),
                attempt_count = attempt_count + 1
            WHERE id = $1 AND is_used = FALSE
            RETURNING attempt_count
            "#,
        )
        .bind(id.into_inner())
        .bind(&winner.username)
        .bind(&winner.discord_id)
        .bind(&winner.role_reward)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if attempt_count.is_none() {
            debug!("Conditional claim matched no unused row");
        }

        Ok(attempt_count.map(|(count,)| count))
    }

    #[instrument(skip(self))]
    async fn find_winners(&self, limit: Option<i64>) -> RepoResult<Vec<Link>> {
        // LIMIT NULL means no limit
        let results = sqlx::query_as::<_, LinkModel>(
            r#"
            SELECT id, event_id, expires_at, is_used, attempt_count,
                   winner_username, discord_id, role_reward, created_at, claimed_at
            FROM links
            WHERE is_used = TRUE
            ORDER BY claimed_at DESC NULLS LAST, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Link::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_claimed(&self) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM links WHERE is_used = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn claim_timings(&self) -> RepoResult<Vec<ClaimTiming>> {
        let results = sqlx::query_as::<_, ClaimTimingModel>(
            r#"
            SELECT l.claimed_at, e.event_date
            FROM links l
            INNER JOIN events e ON e.id = l.event_id
            WHERE l.is_used = TRUE AND l.claimed_at IS NOT NULL
            ORDER BY l.claimed_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClaimTiming::from).collect())
    }
}
