use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Matches the provider's ceiling for inline request data.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Checked in order; the first non-blank value wins.
pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_GEMINI_API_KEY", "GEMINI_API_KEY"];

/// Resolves the provider credential at call time.
pub trait CredentialSource: Send + Sync {
    /// A non-empty key, or `None` when nothing is configured.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from a prioritized list of environment variables.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    vars: Vec<String>,
}

impl EnvCredentials {
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_VARS)
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        self.vars
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find_map(non_blank)
    }
}

/// A fixed key, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone().and_then(non_blank)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).and_then(non_blank);

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got {:?}", raw))?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            gemini_api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_base),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            max_upload_bytes,
        })
    }
}
