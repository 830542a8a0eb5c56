//! Database layer - connection pool, schema bootstrap and item storage
//!
//! Handlers only see the [`ItemStore`] trait; the Postgres pool lives
//! inside [`PgItemStore`] and is never a process-wide global.

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryItemStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::PgItemStore;
pub use schema::{bootstrap, BootstrapError, SchemaStatus, ITEMS_TABLE};
pub use store::{DbError, ItemStore};
