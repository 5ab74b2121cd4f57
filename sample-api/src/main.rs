use sample_api::config::ApiConfig;
use sample_api::docs::DOCS_PATH;
use sample_api::services::environment::CURRENT_ENV;
use sample_api::services::EnvAccessor;
use sample_api::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;
use tokio::signal;

const DEFAULT_ENV: &str = "development";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = ApiConfig::load()?;

    init_tracing(&config.service_name, &config.log_level, config.log_format);

    let service_name = config.service_name.clone();
    let app = Application::build(config).await?;
    let port = app.port();

    tracing::info!(
        service = %service_name,
        address = %format!("http://0.0.0.0:{}", port),
        docs = %format!("http://0.0.0.0:{}{}", port, DOCS_PATH),
        environment = %EnvAccessor::process().get_value_or(CURRENT_ENV, DEFAULT_ENV),
        port,
        "Server started"
    );

    app.run_with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
