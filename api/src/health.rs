use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

pub const SERVICE_NAME: &str = "lease-api";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub api_key_configured: bool,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        api_key_configured: state.analysis_service.has_api_key(),
    })
}
