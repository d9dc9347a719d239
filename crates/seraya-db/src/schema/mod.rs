//! Schema bootstrap
//!
//! Every statement is idempotent, so this runs on each start.

use sqlx::PgPool;
use tracing::info;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS events (
        id BIGSERIAL PRIMARY KEY,
        event_date TIMESTAMPTZ NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS links (
        id UUID PRIMARY KEY,
        event_id BIGINT NOT NULL REFERENCES events(id),
        expires_at TIMESTAMPTZ NOT NULL,
        is_used BOOLEAN NOT NULL DEFAULT FALSE,
        attempt_count INTEGER NOT NULL DEFAULT 0 CHECK (attempt_count >= 0),
        winner_username TEXT,
        discord_id TEXT,
        role_reward TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        claimed_at TIMESTAMPTZ,
        CONSTRAINT links_winner_complete CHECK (
            NOT is_used OR (
                winner_username IS NOT NULL
                AND discord_id IS NOT NULL
                AND role_reward IS NOT NULL
                AND claimed_at IS NOT NULL
            )
        )
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_events_event_date ON events(event_date)",
    "CREATE INDEX IF NOT EXISTS idx_links_event_id ON links(event_id)",
    "CREATE INDEX IF NOT EXISTS idx_links_used_claimed_at ON links(claimed_at DESC) WHERE is_used",
];

/// Advisory lock key serialising concurrent bootstraps
const SCHEMA_LOCK_KEY: i64 = 0x5e7a_7a00;

/// Create the `events` and `links` tables and their indexes if missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Concurrent CREATE ... IF NOT EXISTS can still collide on the catalog
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!("Database schema ready");
    Ok(())
}
