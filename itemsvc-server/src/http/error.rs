//! API error types with IntoResponse
//!
//! Errors become plain-text responses. Database detail is logged and
//! never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;

/// What the handler was doing when the database failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbAction {
    FetchTime,
    ListItems,
    CreateItem,
}

impl DbAction {
    /// Body returned to the client.
    pub fn public_message(self) -> &'static str {
        match self {
            Self::FetchTime => "Error connecting to database",
            Self::ListItems => "Error fetching items from database",
            Self::CreateItem => "Error adding item to database",
        }
    }

    fn log_message(self) -> &'static str {
        match self {
            Self::FetchTime => "Error fetching time",
            Self::ListItems => "Error fetching items",
            Self::CreateItem => "Error adding item",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Database error (500, logged)
    Database { action: DbAction, source: DbError },
}

impl ApiError {
    /// Adapter for `map_err` at a query site.
    pub fn db(action: DbAction) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Database { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(e) => (status, e.to_string()).into_response(),
            Self::Database { action, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", action.log_message());
                (status, action.public_message()).into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_plain_text() {
        let err = ApiError::Validation(ValidationError::Missing { field: "name" });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(
            body_text(response).await,
            "Item name is required in the request body."
        );
    }

    #[tokio::test]
    async fn database_error_is_500_without_detail() {
        let err = ApiError::db(DbAction::ListItems)(DbError::Sqlx(sqlx::Error::Protocol(
            "relation \"test_items\" does not exist".into(),
        )));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert_eq!(body, "Error fetching items from database");
        assert!(!body.contains("test_items"));
    }

    #[test]
    fn each_action_has_its_own_message() {
        assert_eq!(
            DbAction::FetchTime.public_message(),
            "Error connecting to database"
        );
        assert_eq!(
            DbAction::CreateItem.public_message(),
            "Error adding item to database"
        );
    }
}
