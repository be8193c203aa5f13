use crate::config::CredentialSource;
use crate::error::AnalysisError;
use crate::gemini_service::GeminiService;
use crate::models::UploadedDocument;
use crate::prompt::{EXPECTED_FIELDS, LEASE_ANALYSIS_PROMPT};
use crate::response_parser::{extract_text, parse_analysis};
use serde_json::Value;
use std::sync::Arc;

/// Runs one lease through the model: resolve key, call, extract, parse.
pub struct AnalysisService {
    gemini_service: GeminiService,
    credentials: Arc<dyn CredentialSource>,
}

impl AnalysisService {
    pub fn new(gemini_service: GeminiService, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            gemini_service,
            credentials,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.credentials.api_key().is_some()
    }

    /// Returns whatever JSON the model produced. Missing or extra fields are
    /// passed through untouched.
    pub async fn analyze(&self, document: &UploadedDocument) -> Result<Value, AnalysisError> {
        let api_key = self.credentials.api_key().ok_or_else(|| {
            log::error!("Lease analysis requested but no Gemini API key is configured");
            AnalysisError::MissingApiKey
        })?;

        let response = self
            .gemini_service
            .generate_content(&api_key, LEASE_ANALYSIS_PROMPT, document)
            .await?;

        let text = extract_text(&response).ok_or_else(|| {
            log::error!(
                "Empty lease analysis response: {}",
                serde_json::to_string(&response).unwrap_or_default()
            );
            AnalysisError::EmptyResponse
        })?;

        let analysis = parse_analysis(&text).map_err(|failure| {
            log::error!("Failed to parse lease JSON: {} {}", failure.message, failure.raw);
            failure
        })?;

        let missing: Vec<&str> = EXPECTED_FIELDS
            .iter()
            .copied()
            .filter(|field| analysis.get(*field).is_none())
            .collect();
        if !missing.is_empty() {
            log::debug!("Lease analysis is missing fields: {}", missing.join(", "));
        }

        Ok(analysis)
    }
}
