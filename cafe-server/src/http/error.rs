//! API error types with IntoResponse
//!
//! Every failure renders as [`ErrorBody`], `{"error": "<message>"}`.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::RepoError;
use crate::models::ValidationError;

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "item is required")]
    pub error: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request shape rejected (400)
    Validation(ValidationError),

    /// No route for this path (404)
    NotFound { path: String },

    /// Route exists, method does not (405)
    MethodNotAllowed { method: Method, path: String },

    /// Connection or query failure (500, logged)
    Repository(RepoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { path } => (StatusCode::NOT_FOUND, format!("no route for {}", path)),
            Self::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                format!("{} is not allowed on {}", method, path),
            ),
            Self::Repository(e) => {
                tracing::error!("Repository error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.client_message())
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        Self::Repository(e)
    }
}

/// Router fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_owned(),
    }
}

/// Router fallback for a known path hit with the wrong method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_owned(),
    }
}
