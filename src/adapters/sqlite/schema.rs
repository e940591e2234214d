//! Explicit schema for the session store.
//!
//! | column     | type      | constraints                          |
//! |------------|-----------|--------------------------------------|
//! | id         | INTEGER   | primary key, auto-assigned, no reuse |
//! | name       | TEXT      | not null                             |
//! | config     | TEXT      | not null, serialized JSON            |
//! | created_at | TIMESTAMP | defaults to creation time (UTC)      |
//!
//! `created_at` holds fixed-width RFC 3339 text with microseconds and a `Z`
//! suffix, whether the service writes it or the column default does, so text
//! order is time order.

use sqlx::SqlitePool;

/// Statements applied in order at startup. All of them are idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT NOT NULL,
        config     TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_sessions_created_at ON sessions (created_at)",
];

/// Creates the `sessions` table and its index if they do not exist.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Session schema applied");
    Ok(())
}
