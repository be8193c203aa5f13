pub mod analysis_service;
pub mod config;
pub mod error;
pub mod gemini_service;
pub mod models;
pub mod prompt;
pub mod response_parser;

pub use analysis_service::AnalysisService;
pub use config::{CredentialSource, EnvCredentials, ServiceConfig, StaticCredentials};
pub use error::{AnalysisError, ParseFailure};
pub use gemini_service::GeminiService;
pub use models::*;
