//! In-memory item store
//!
//! Stands in for Postgres in router tests. Ids and timestamps are
//! assigned here the way the database would assign them, and the store
//! can be switched "offline" to exercise the 500 paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::store::{DbError, ItemStore};
use crate::models::{Item, ItemName};

#[derive(Default)]
struct Rows {
    items: Vec<Item>,
    last_id: i32,
}

/// Item store backed by a `Vec`
#[derive(Default)]
pub struct MemoryItemStore {
    rows: Mutex<Rows>,
    offline: AtomicBool,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the database connection.
    pub fn set_available(&self, available: bool) {
        self.offline.store(!available, Ordering::SeqCst);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<(), DbError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn now(&self) -> Result<DateTime<Utc>, DbError> {
        self.check()?;
        Ok(Utc::now())
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        self.check()?;

        let mut items = self.rows().items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        self.check()?;

        let mut rows = self.rows();
        rows.last_id += 1;
        let item = Item {
            id: rows.last_id,
            name: name.into_string(),
            created_at: Utc::now(),
        };
        rows.items.push(item.clone());
        Ok(item)
    }
}
