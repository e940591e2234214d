//! Connection pool construction.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Opens the process-wide pool described by `config`.
///
/// File databases are created when missing and run in WAL mode. In-memory
/// databases get exactly one connection that is never recycled, otherwise
/// every new connection would start from an empty database.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout());

    let pool_options = if config.is_in_memory() {
        pool_options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        pool_options
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.url,
        in_memory = config.is_in_memory(),
        "Connected to session store"
    );

    Ok(pool)
}
