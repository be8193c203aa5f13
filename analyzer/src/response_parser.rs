//! Turns the model's reply into JSON.
//!
//! The reply is free text that is usually, but not always, a bare JSON
//! object. Models like to wrap it in a markdown fence anyway, so the text is
//! unwrapped before parsing and parse failures come back as a typed value.

use crate::error::ParseFailure;
use crate::models::GeminiResponse;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```[A-Za-z]*[ \t]*\r?\n?").expect("opening fence pattern"))
}

fn closing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r?\n?```$").expect("closing fence pattern"))
}

/// Text of the first candidate.
///
/// Takes the first part's text when it has one, otherwise joins every part's
/// text with newlines. Returns `None` when the result is empty; whitespace
/// is left for the parser to reject.
pub fn extract_text(response: &GeminiResponse) -> Option<String> {
    let parts = &response.candidates.first()?.content.as_ref()?.parts;

    let text = match parts.first().and_then(|p| p.text.as_ref()) {
        Some(text) => text.clone(),
        None => parts
            .iter()
            .map(|p| p.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Removes a leading ```` ``` ```` fence (with an optional language tag such
/// as `json`) and a trailing one. Either may be missing.
pub fn strip_code_fence(text: &str) -> &str {
    let mut clean = text.trim();
    if let Some(m) = opening_fence().find(clean) {
        clean = &clean[m.end()..];
    }
    if let Some(m) = closing_fence().find(clean) {
        clean = &clean[..m.start()];
    }
    clean.trim()
}

pub fn parse_analysis(text: &str) -> Result<Value, ParseFailure> {
    serde_json::from_str(strip_code_fence(text)).map_err(|e| ParseFailure {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
