//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;

use super::error::ApiError;
use super::routes::items::CreateItemRequest;
use crate::models::ItemName;

/// Extract and validate the item name from a create-item body.
///
/// A body that cannot be read as `{"name": "<string>"}` counts as a
/// missing name, so every bad body gets the same 400.
pub struct ValidItemName(pub ItemName);

impl<S> FromRequest<S> for ValidItemName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let name = match Json::<CreateItemRequest>::from_request(req, state).await {
            Ok(Json(body)) => body.name,
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable create-item body");
                None
            }
        };

        let name = ItemName::from_optional(name.as_deref())?;
        Ok(Self(name))
    }
}
