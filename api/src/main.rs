use lease_analyzer::{EnvCredentials, ServiceConfig};
use lease_api::{build_router, AppState};
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() {
    // Loads .env as well, so RUST_LOG from it reaches the logger below
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = AppState::new(&config, Arc::new(EnvCredentials::default()));
    if !state.analysis_service.has_api_key() {
        log::warn!("No Gemini API key configured; /analyze-lease will fail until one is set");
    }
    log::info!(
        "Using Gemini model {} (uploads up to {} bytes)",
        config.gemini_model,
        config.max_upload_bytes
    );

    let app = build_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on {}", addr);
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutting down");
}
