use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use quire_core::models::assessment::{Assessment, NewAssessment};
use quire_storage::assessments;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_assessment))
        .route("/list", get(list_assessments))
}

#[derive(Serialize)]
struct Created {
    message: &'static str,
    assessment: Assessment,
}

/// Store whatever subset of the assessment fields the caller sent.
///
/// Only JSON bodies are read. A body of any other content type, or an empty
/// one, yields an empty assessment.
async fn create_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let new: NewAssessment = if !is_json(&headers) || body.iter().all(u8::is_ascii_whitespace) {
        NewAssessment::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let assessment = assessments::insert(state.store.as_ref(), new)
        .await
        .map_err(ApiError::Create)?;

    tracing::info!(id = %assessment.id, "assessment created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Assessment created successfully",
            assessment,
        }),
    ))
}

async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    let assessments = assessments::list_all(state.store.as_ref())
        .await
        .map_err(ApiError::Retrieve)?;

    Ok(Json(assessments))
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
