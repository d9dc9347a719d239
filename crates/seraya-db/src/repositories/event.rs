//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use seraya_core::entities::{Event, Link};
use seraya_core::traits::{EventRepository, RepoResult};

use crate::mappers::LinkInsert;
use crate::models::{EventModel, LinkModel};

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, event_date, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_next_upcoming(&self, now: DateTime<Utc>) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, event_date, created_at
            FROM events
            WHERE event_date > $1
            ORDER BY event_date ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn create_with_link(
        &self,
        event_date: DateTime<Utc>,
        link_expires_at: DateTime<Utc>,
    ) -> RepoResult<(Event, Link)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let event = sqlx::query_as::<_, EventModel>(
            r#"
            INSERT INTO events (event_date)
            VALUES ($1)
            RETURNING id, event_date, created_at
            "#,
        )
        .bind(event_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let fresh = Link::new(event.id, link_expires_at);
        let insert = LinkInsert::new(&fresh);

        let link = sqlx::query_as::<_, LinkModel>(
            r#"
            INSERT INTO links (id, event_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, expires_at, is_used, attempt_count,
                      winner_username, discord_id, role_reward, created_at, claimed_at
            "#,
        )
        .bind(insert.id)
        .bind(insert.event_id)
        .bind(insert.expires_at)
        .bind(insert.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((Event::from(event), Link::from(link)))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }
}
