use reqwest::{multipart, Client};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pdf_path = env::args()
        .nth(1)
        .ok_or("usage: cargo run --example client -- <lease.pdf> [base_url]")?;
    let base_url = env::args()
        .nth(2)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());

    let client = Client::new();

    println!("📋 Health Check:");
    let health_response = client.get(format!("{}/health", base_url)).send().await?;
    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\n📄 Lease Analysis:");
    let bytes = tokio::fs::read(&pdf_path).await?;
    let file_name = std::path::Path::new(&pdf_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("lease.pdf")
        .to_string();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?,
    );

    let analysis_response = client
        .post(format!("{}/analyze-lease", base_url))
        .multipart(form)
        .send()
        .await?;

    println!("Status: {}", analysis_response.status());
    let analysis_json: serde_json::Value = analysis_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&analysis_json)?);

    Ok(())
}
