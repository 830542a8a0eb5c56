//! Storage seam between HTTP handlers and the database

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Item, ItemName};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("database unavailable")]
    Unavailable,
}

/// Item persistence used by the route handlers.
///
/// Every method is a single statement; nothing is cached between calls.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Current time according to the database.
    async fn now(&self) -> Result<DateTime<Utc>, DbError>;

    /// All items, newest first.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Insert an item and return the stored row.
    async fn create(&self, name: ItemName) -> Result<Item, DbError>;
}
