pub mod analyze_lease;
pub mod api_error;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use lease_analyzer::{AnalysisService, CredentialSource, GeminiService, ServiceConfig};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServiceConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        let gemini_service = GeminiService::from_config(config);
        Self {
            analysis_service: Arc::new(AnalysisService::new(gemini_service, credentials)),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/analyze-lease", post(analyze_lease::analyze_lease))
        .route("/health", get(health::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}
