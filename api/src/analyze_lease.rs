use crate::api_error::ApiError;
use crate::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use lease_analyzer::{AnalysisError, UploadedDocument};
use serde_json::Value;
use uuid::Uuid;

/// Name of the form field carrying the lease.
pub const FILE_FIELD: &str = "file";

/// `POST /analyze-lease`
pub async fn analyze_lease(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let request_id = Uuid::new_v4();

    let result = run_analysis(&state, multipart, request_id).await;
    if let Err(err) = &result {
        err.log(request_id);
    }

    result.map(Json)
}

async fn run_analysis(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
    request_id: Uuid,
) -> Result<Value, ApiError> {
    // A body that is not a multipart form carries no file.
    let multipart = multipart.map_err(|_| ApiError::NoFile)?;
    let document = read_lease_upload(multipart, state).await?;

    log::info!(
        "[{}] Analyzing lease {:?} ({} bytes)",
        request_id,
        document.filename,
        document.len()
    );

    let analysis = state.analysis_service.analyze(&document).await?;

    log::info!("[{}] Lease analysis complete", request_id);
    Ok(analysis)
}

/// Finds the `file` field, checks it is a PDF attachment and reads it.
/// The body is only read once a key is known to be configured.
async fn read_lease_upload(
    mut multipart: Multipart,
    state: &AppState,
) -> Result<UploadedDocument, ApiError> {
    let max_upload_bytes = state.max_upload_bytes;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, max_upload_bytes, ApiError::NoFile))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // Plain text fields have no file name.
        let filename = field.file_name().ok_or(ApiError::NoFile)?.to_string();
        let mime_type = field.content_type().unwrap_or_default().to_string();

        if !UploadedDocument::is_pdf_mime_type(&mime_type) {
            return Err(ApiError::UnsupportedFileType(mime_type));
        }

        if !state.analysis_service.has_api_key() {
            return Err(AnalysisError::MissingApiKey.into());
        }

        let content = field.bytes().await.map_err(|e| {
            let message = format!("failed to read uploaded file: {}", e);
            read_error(e, max_upload_bytes, ApiError::Internal(anyhow::anyhow!(message)))
        })?;

        if content.len() > max_upload_bytes {
            return Err(ApiError::FileTooLarge {
                limit: max_upload_bytes,
            });
        }

        return Ok(UploadedDocument::new(filename, mime_type, content.to_vec()));
    }

    Err(ApiError::NoFile)
}

fn read_error(err: MultipartError, limit: usize, otherwise: ApiError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::FileTooLarge { limit }
    } else {
        otherwise
    }
}
