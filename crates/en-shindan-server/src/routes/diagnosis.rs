//! Diagnosis Routes
//!
//! HTTP handlers that delegate to DiagnosisService.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::models::{DiagnoseRequest, DiagnoseResponse};
use crate::AppState;

/// Run a diagnosis
#[utoipa::path(
    post,
    path = "/diagnosis",
    request_body = DiagnoseRequest,
    responses(
        (status = 200, description = "Diagnosis computed", body = DiagnoseResponse),
        (status = 400, description = "Missing field, invalid name or invalid birth date", body = DiagnoseResponse),
        (status = 405, description = "Method not allowed", body = DiagnoseResponse)
    ),
    tag = "Diagnosis"
)]
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> (StatusCode, Json<DiagnoseResponse>) {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Invalid diagnosis body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(DiagnoseResponse::error(rejection.body_text())),
            );
        }
    };

    match state.diagnosis_service.run(&request.into()) {
        Ok(profile) => (StatusCode::OK, Json(DiagnoseResponse::ok(profile))),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(DiagnoseResponse::error(e.to_string())),
        ),
    }
}

async fn options_ok() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> (StatusCode, Json<DiagnoseResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(DiagnoseResponse::error("Method Not Allowed")),
    )
}

/// `/getDiagnosis` is the path used by the earlier cloud function
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/diagnosis",
            post(diagnose).options(options_ok).fallback(method_not_allowed),
        )
        .route(
            "/getDiagnosis",
            post(diagnose).options(options_ok).fallback(method_not_allowed),
        )
}
