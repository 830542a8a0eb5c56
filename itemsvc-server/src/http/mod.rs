//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, DbAction};
pub use server::{build_router, run_server, ServerConfig, ServerError};
