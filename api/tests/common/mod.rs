#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use lease_analyzer::{ServiceConfig, StaticCredentials};
use lease_api::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "lease-test-boundary";
pub const TEST_MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";
pub const TEST_KEY: &str = "test-api-key";

pub fn app(api_base: &str, credentials: StaticCredentials) -> Router {
    app_with_limit(api_base, credentials, ServiceConfig::default().max_upload_bytes)
}

pub fn app_with_limit(api_base: &str, credentials: StaticCredentials, max_upload_bytes: usize) -> Router {
    let config = ServiceConfig {
        gemini_api_base: api_base.to_string(),
        gemini_model: TEST_MODEL.to_string(),
        max_upload_bytes,
        ..ServiceConfig::default()
    };
    build_router(AppState::new(&config, Arc::new(credentials)))
}

/// One part of a hand-built multipart body.
pub struct FormPart<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FormPart<'a> {
    pub fn file(filename: &'a str, content_type: &'a str, data: &'a [u8]) -> Self {
        Self {
            name: "file",
            filename: Some(filename),
            content_type: Some(content_type),
            data,
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{}\"", filename));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(parts: &[FormPart<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze-lease")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn pdf_upload() -> Request<Body> {
    upload_request(&[FormPart::file("lease.pdf", "application/pdf", b"%PDF-1.4 lease")])
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn reply_with_text(text: &str) -> Value {
    serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}
