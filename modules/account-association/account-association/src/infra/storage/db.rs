//! Connection pool construction.

use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};

use crate::config::DatabaseConfig;

/// Open the association database described by `cfg`.
///
/// An in-memory SQLite database is dropped together with its last
/// connection, so it gets a single connection that the pool never reaps.
///
/// # Errors
/// Returns an error if the database cannot be reached.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    #[cfg(feature = "db-sqlite")]
    if cfg.is_memory_sqlite() {
        use sea_orm::sqlx::ConnectOptions as _;

        if cfg.idle_timeout.is_some() || cfg.max_lifetime.is_some() {
            tracing::warn!("idle_timeout and max_lifetime are ignored for in-memory SQLite");
        }
        let mut conn_opts: sea_orm::sqlx::sqlite::SqliteConnectOptions =
            cfg.url.parse().context("invalid SQLite database url")?;
        if !cfg.sqlx_logging {
            conn_opts = conn_opts.disable_statement_logging();
        }
        let pool = memory_pool_options(cfg)
            .connect_with(conn_opts)
            .await
            .context("failed to open in-memory SQLite database")?;
        return Ok(sea_orm::SqlxSqliteConnector::from_sqlx_sqlite_pool(pool));
    }

    Database::connect(cfg.connect_options())
        .await
        .context("failed to connect to the association database")
}

/// Pool pinned to one connection that lives as long as the pool.
#[cfg(feature = "db-sqlite")]
#[must_use]
pub fn memory_pool_options(cfg: &DatabaseConfig) -> sea_orm::sqlx::sqlite::SqlitePoolOptions {
    let mut opts = sea_orm::sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None);
    if let Some(t) = cfg.acquire_timeout {
        opts = opts.acquire_timeout(t);
    }
    opts
}
