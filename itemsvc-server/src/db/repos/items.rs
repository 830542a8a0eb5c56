//! Item repository
//!
//! - now: `SELECT NOW()`
//! - list: full scan ordered newest first
//! - create: INSERT ... RETURNING

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::store::{DbError, ItemStore};
use crate::models::{Item, ItemName};

/// Postgres-backed item store
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn now(&self) -> Result<DateTime<Utc>, DbError> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }

    /// Ties on `created_at` (same transaction timestamp) fall back to
    /// id so the order is stable for a fixed dataset.
    ///
    /// `created_at` is cast because tables created by earlier deployments
    /// use plain `TIMESTAMP`.
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, created_at::timestamptz AS created_at
            FROM test_items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO test_items (name) VALUES ($1)
            RETURNING id, name, created_at::timestamptz AS created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }
}
