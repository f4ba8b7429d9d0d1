use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use quire_storage::error::PersistenceError;

/// Failure of an assessment route, rendered as `{message, error}`.
#[derive(Debug)]
pub enum ApiError {
    /// Creating an assessment failed, including payloads the schema can't hold.
    Create(PersistenceError),
    /// Listing assessments failed.
    Retrieve(PersistenceError),
    /// The request body is not JSON at all.
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            ApiError::Create(e) => {
                tracing::error!(error = %e, "failed to create assessment");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error creating assessment",
                    e.to_string(),
                )
            }
            ApiError::Retrieve(e) => {
                tracing::error!(error = %e, "failed to list assessments");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving assessments",
                    e.to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Invalid request body", msg),
        };

        (status, Json(ErrorBody { message, error })).into_response()
    }
}

/// Malformed JSON is the caller's fault. Well-formed JSON whose values don't fit
/// the schema is a failed create, the same outcome as a store-side cast failure.
impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Data => {
                ApiError::Create(PersistenceError::new(e.to_string()))
            }
            _ => ApiError::BadRequest(e.to_string()),
        }
    }
}
