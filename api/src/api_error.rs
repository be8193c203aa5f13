use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lease_analyzer::response_parser::truncate_chars;
use lease_analyzer::AnalysisError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Raw model text is cut to this many characters in parse-failure responses.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "parseError", skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no file field in upload")]
    NoFile,

    #[error("unsupported media type {0:?}")]
    UnsupportedFileType(String),

    #[error("upload exceeds {limit} bytes")]
    FileTooLarge { limit: usize },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFile | ApiError::UnsupportedFileType(_) | ApiError::FileTooLarge { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Analysis(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Analysis failures are already logged with their payloads by the
    /// analyzer; here they only get tied to the request id.
    pub fn log(&self, request_id: Uuid) {
        match self {
            ApiError::NoFile | ApiError::UnsupportedFileType(_) | ApiError::FileTooLarge { .. } => {
                log::warn!("[{}] Lease upload rejected: {}", request_id, self)
            }
            ApiError::Analysis(AnalysisError::Transport(err)) => {
                log::error!("[{}] Unexpected lease analysis error: {}", request_id, err)
            }
            ApiError::Internal(err) => {
                log::error!("[{}] Unexpected lease analysis error: {:#}", request_id, err)
            }
            ApiError::Analysis(err) => {
                log::warn!("[{}] Lease analysis failed: {}", request_id, err)
            }
        }
    }

    fn body(self) -> ErrorBody {
        let simple = |error: &str| ErrorBody {
            error: error.to_string(),
            details: None,
            parse_error: None,
        };

        match self {
            ApiError::NoFile => simple("No file provided. Please upload a lease PDF."),
            ApiError::UnsupportedFileType(_) => {
                simple("Unsupported file type. Please upload a PDF file.")
            }
            ApiError::FileTooLarge { limit } => ErrorBody {
                error: "Uploaded file is too large.".to_string(),
                details: Some(format!("Maximum upload size is {} bytes.", limit)),
                parse_error: None,
            },
            ApiError::Analysis(AnalysisError::MissingApiKey) => simple(
                "Missing API key. Please set GOOGLE_GEMINI_API_KEY in your environment \
                 (.env for local development) or hosting environment.",
            ),
            ApiError::Analysis(AnalysisError::Upstream { status, reason, body }) => ErrorBody {
                error: format!("Gemini API error: {} {}", status, reason)
                    .trim_end()
                    .to_string(),
                details: Some(body),
                parse_error: None,
            },
            ApiError::Analysis(AnalysisError::EmptyResponse) => {
                simple("Empty response from Gemini while analyzing lease.")
            }
            ApiError::Analysis(AnalysisError::Parse(failure)) => ErrorBody {
                error: "Failed to parse Gemini lease response as JSON.".to_string(),
                details: Some(truncate_chars(&failure.raw, RAW_TEXT_PREVIEW_CHARS)),
                parse_error: Some(failure.message),
            },
            ApiError::Analysis(AnalysisError::Transport(err)) => ErrorBody {
                error: "Internal server error while analyzing lease.".to_string(),
                details: Some(err.to_string()),
                parse_error: None,
            },
            ApiError::Internal(err) => ErrorBody {
                error: "Internal server error while analyzing lease.".to_string(),
                details: Some(err.to_string()),
                parse_error: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lease_analyzer::ParseFailure;

    #[test]
    fn client_errors_are_bad_requests() {
        assert_eq!(ApiError::NoFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnsupportedFileType("text/plain".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::FileTooLarge { limit: 10 }.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn server_errors_are_internal() {
        assert_eq!(
            ApiError::from(AnalysisError::MissingApiKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_error_names_status_and_reason() {
        let body = ApiError::from(AnalysisError::Upstream {
            status: 503,
            reason: "Service Unavailable".into(),
            body: "overloaded".into(),
        })
        .body();
        assert_eq!(body.error, "Gemini API error: 503 Service Unavailable");
        assert_eq!(body.details.as_deref(), Some("overloaded"));
        assert!(body.parse_error.is_none());
    }

    #[test]
    fn parse_failure_truncates_raw_text() {
        let body = ApiError::from(AnalysisError::Parse(ParseFailure {
            message: "expected value at line 1 column 1".into(),
            raw: "z".repeat(1500),
        }))
        .body();
        assert_eq!(body.details.unwrap().chars().count(), RAW_TEXT_PREVIEW_CHARS);
        assert_eq!(body.parse_error.as_deref(), Some("expected value at line 1 column 1"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(ApiError::NoFile.body()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "error": "No file provided. Please upload a lease PDF." })
        );
    }
}
