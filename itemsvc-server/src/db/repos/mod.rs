//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One parameterized statement per call
//! - Inserts return the stored row via RETURNING (no read-after-write)

pub mod items;

pub use items::PgItemStore;
