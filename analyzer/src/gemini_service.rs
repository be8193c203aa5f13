use crate::config::ServiceConfig;
use crate::error::AnalysisError;
use crate::models::*;
use crate::response_parser::truncate_chars;
use reqwest::Client;

/// Upstream error bodies are cut to this many characters.
pub const UPSTREAM_ERROR_PREVIEW_CHARS: usize = 500;

pub struct GeminiService {
    client: Client,
    api_base: String,
    model: String,
}

impl GeminiService {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.gemini_api_base, &config.gemini_model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(&self, prompt: &str, document: &UploadedDocument) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::text(prompt),
                    GeminiPart::inline_data(document.upstream_mime_type(), document.to_base64()),
                ],
            }],
        }
    }

    /// Sends the prompt and the document as inline data in one
    /// `generateContent` call. The key travels as the `key` query parameter.
    pub async fn generate_content(
        &self,
        api_key: &str,
        prompt: &str,
        document: &UploadedDocument,
    ) -> Result<GeminiResponse, AnalysisError> {
        let request = self.build_request(prompt, document);

        log::debug!(
            "Sending {} byte document to Gemini model {}",
            document.len(),
            self.model
        );

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.map_err(|e| {
                let err = redact_url(e);
                log::error!(
                    "Gemini lease API error: {} (body unreadable: {})",
                    status.as_u16(),
                    err
                );
                err
            })?;
            let preview = truncate_chars(&error_text, UPSTREAM_ERROR_PREVIEW_CHARS);
            log::error!("Gemini lease API error: {} {}", status.as_u16(), preview);
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body: preview,
            });
        }

        response.json().await.map_err(redact_url)
    }
}

/// The request URL carries the key, so it is dropped from transport errors.
fn redact_url(err: reqwest::Error) -> AnalysisError {
    AnalysisError::Transport(err.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_model() {
        let service = GeminiService::new("https://example.test/v1/", "gemini-2.5-flash");
        assert_eq!(
            service.generate_url(),
            "https://example.test/v1/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_carries_prompt_then_document() {
        let service = GeminiService::new("https://example.test/v1", "m");
        let doc = UploadedDocument::new("lease.pdf", "application/pdf", b"ab".to_vec());
        let request = service.build_request("prompt", &doc);

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("prompt"));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "application/pdf");
        assert_eq!(inline.data, "YWI=");
    }
}
