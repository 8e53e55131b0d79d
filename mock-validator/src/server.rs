//! HTTP routes for the mock validator

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct ValidatorSettings {
    /// Simulated latency added to every validation
    pub delay: Duration,
}

#[derive(Deserialize)]
struct ValidateRequest {
    #[serde(default)]
    value: String,
}

#[derive(Serialize)]
struct ValidateResponse {
    field: String,
    valid: bool,
}

pub fn router(settings: ValidatorSettings) -> Router {
    Router::new()
        .route("/validate/:field", post(validate))
        .route("/health", get(health))
        .with_state(settings)
}

/// POST /validate/:field
async fn validate(
    State(settings): State<ValidatorSettings>,
    Path(field): Path<String>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Response {
    tokio::time::sleep(settings.delay).await;

    let Ok(Json(request)) = payload else {
        tracing::debug!(field = %field, "Rejected unparseable validation request");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid request" })),
        )
            .into_response();
    };

    let valid = !request.value.is_empty();
    tracing::debug!(field = %field, valid, "Validated field");

    Json(ValidateResponse { field, valid }).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
