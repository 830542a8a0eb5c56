//! itemsvc-server: HTTP item service over Postgres
//!
//! Three routes backed by one table:
//! - `GET /` reports the database clock
//! - `GET /items` lists items newest first
//! - `POST /items` creates an item from `{"name": "..."}`

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::DbConfig;
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
