//! Server time endpoint

use axum::{extract::State, routing::get, Router};

use crate::http::error::{ApiError, DbAction};
use crate::state::AppState;

/// GET / - greeting with the current database time
async fn server_time(State(state): State<AppState>) -> Result<String, ApiError> {
    let now = state
        .store()
        .now()
        .await
        .map_err(ApiError::db(DbAction::FetchTime))?;

    Ok(format!("Hello from itemsvc! Current DB time: {}", now))
}

/// Time routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(server_time))
}
