use thiserror::Error;

/// The model reply could not be turned into JSON.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseFailure {
    /// Message reported by the JSON parser.
    pub message: String,
    /// Text as extracted from the reply, before fence stripping.
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no Gemini API key is configured")]
    MissingApiKey,

    #[error("Gemini API error: {status} {reason}")]
    Upstream {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Gemini returned no text")]
    EmptyResponse,

    #[error("failed to parse Gemini reply: {0}")]
    Parse(#[from] ParseFailure),

    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),
}
