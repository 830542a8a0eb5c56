//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool.
///
/// Opens one connection eagerly, so an unreachable database is
/// reported here rather than on the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        config.connect_options(),
        config.max_connections,
        config.acquire_timeout,
    )
    .await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `options` - PostgreSQL connect options
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long to wait for a connection before failing
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}
