//! medscribe-api binary: configuration, tracing, and the HTTP listener.

use std::sync::Arc;

use tracing::{info, warn};

use medscribe_api::config::{LogConfig, ServerConfig};
use medscribe_api::{logging, router, AppState};
use medscribe_core::ProviderCredentials;
use medscribe_inference::{MedicineDescriber, OpenAIVisionBackend, VisionConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let log_config = LogConfig::from_env();
    let _file_guard = logging::init_tracing(&log_config);

    info!(
        log_format = ?log_config.format,
        log_file = log_config.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let credentials = ProviderCredentials::from_env();
    if !credentials.has_openrouter_key() {
        warn!("OPENROUTER_API_KEY is not set; inference requests will be sent without credentials");
    }
    info!(
        openrouter_key = credentials.has_openrouter_key(),
        deepseek_key = credentials.has_deepseek_key(),
        "Provider credentials loaded"
    );

    let vision_config = VisionConfig::from_env(&credentials);
    let backend = OpenAIVisionBackend::new(vision_config)?;
    let describer = MedicineDescriber::new(Arc::new(backend));

    let server_config = ServerConfig::from_env();
    let app = router(AppState::new(describer), server_config.max_upload_bytes);

    let addr = server_config.socket_addr()?;
    info!(
        %addr,
        max_upload_bytes = server_config.max_upload_bytes,
        "Starting server"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining in-flight requests");
}
