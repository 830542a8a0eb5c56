//! Item endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::{ApiError, DbAction};
use crate::http::extractors::ValidItemName;
use crate::models::Item;
use crate::state::AppState;

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// GET /items - list all items, newest first
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .store()
        .list()
        .await
        .map_err(ApiError::db(DbAction::ListItems))?;

    Ok(Json(items))
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<AppState>,
    ValidItemName(name): ValidItemName,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state
        .store()
        .create(name)
        .await
        .map_err(ApiError::db(DbAction::CreateItem))?;

    tracing::info!(id = item.id, "item added");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(list_items).post(create_item))
}
