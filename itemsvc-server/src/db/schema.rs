//! Startup schema bootstrap for the items table

use sqlx::PgPool;

/// Table holding all items.
pub const ITEMS_TABLE: &str = "test_items";

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS test_items (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Outcome of the table check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Table exists or was created.
    Ready,
    /// Table creation failed; requests against it will return 500.
    Degraded,
}

/// Bootstrap failure that must stop the process.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Ensure the items table exists.
///
/// Holds a single pooled connection for the duration of the check; the
/// connection goes back to the pool when the guard drops, on success and
/// on failure alike. Only a failed acquire is an error. A failed
/// `CREATE TABLE` is logged and reported as [`SchemaStatus::Degraded`].
pub async fn bootstrap(pool: &PgPool) -> Result<SchemaStatus, BootstrapError> {
    let mut conn = pool.acquire().await.map_err(BootstrapError::Connect)?;
    tracing::info!("Connected to database");

    let status = match sqlx::query(CREATE_ITEMS_TABLE).execute(&mut *conn).await {
        Ok(_) => {
            tracing::info!(table = ITEMS_TABLE, "Table checked/created");
            SchemaStatus::Ready
        }
        Err(e) => {
            tracing::error!(table = ITEMS_TABLE, error = %e, "Error creating table");
            SchemaStatus::Degraded
        }
    };

    drop(conn);
    Ok(status)
}
