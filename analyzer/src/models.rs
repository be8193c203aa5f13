use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Media type sent upstream when the upload did not declare one.
pub const DEFAULT_PDF_MIME_TYPE: &str = "application/pdf";

/// A file received from the client, held in memory for one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    pub fn is_pdf(&self) -> bool {
        Self::is_pdf_mime_type(&self.mime_type)
    }

    /// Plain substring match on the declared type, so `application/x-pdf`
    /// passes and `application/PDF` does not.
    pub fn is_pdf_mime_type(mime_type: &str) -> bool {
        mime_type.contains("pdf")
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.content)
    }

    pub fn upstream_mime_type(&self) -> &str {
        if self.mime_type.trim().is_empty() {
            DEFAULT_PDF_MIME_TYPE
        } else {
            &self.mime_type
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// One part of a content block. Requests carry either text or inline data;
/// responses are decoded leniently so parts without text are kept.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, alias = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<GeminiInlineData>,
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(GeminiInlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiInlineData {
    #[serde(alias = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}
