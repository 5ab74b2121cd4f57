use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, panic::catch_panic_layer,
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use service_core::observability::HttpMetrics;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ApiConfig;
use crate::docs::{ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH};
use crate::handlers::{diagnostics, health, load_test, metrics, posts, settings};
use crate::services::{EnvAccessor, PostStore};

/// Prefix of the exported HTTP metric names.
pub const METRICS_NAMESPACE: &str = "api";

/// How often the runtime lag gauge is sampled while serving.
pub const LAG_SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Everything a handler may touch. Cloned per request; all shared state sits
/// behind `Arc`s so each `AppState` built with [`AppState::new`] is isolated.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub posts: Arc<PostStore>,
    pub env: EnvAccessor,
    pub metrics: HttpMetrics,
}

impl AppState {
    pub fn new(config: ApiConfig, env: EnvAccessor, posts: PostStore) -> Result<Self, AppError> {
        let metrics = HttpMetrics::new(METRICS_NAMESPACE).map_err(|e| {
            tracing::error!("Failed to build metrics recorder: {}", e);
            AppError::Internal(anyhow::Error::new(e))
        })?;

        Ok(Self {
            config: Arc::new(config),
            posts: Arc::new(posts),
            env,
            metrics,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let metrics_state = state.metrics.clone();

    Router::new()
        .route("/", get(health::root))
        .route("/healthz", get(health::healthz))
        .route("/status", get(health::status))
        .route("/delay", get(health::delay))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/env", get(settings::env))
        .route("/config", get(settings::config))
        .route("/secret", get(settings::secret))
        .route("/env-check", get(settings::env_check))
        .route("/load-test", get(load_test::cpu_load))
        .route("/load-test/memory", get(load_test::memory_load))
        .route("/error-test", get(diagnostics::error_test))
        .route("/metrics", get(metrics::metrics))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .with_state(state)
        // Error boundary sits innermost so panics are still counted as 500s
        .layer(catch_panic_layer())
        .layer(from_fn_with_state(metrics_state, metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    metrics: HttpMetrics,
}

impl Application {
    /// Builds the service against the real process environment with the
    /// seeded post store.
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        let state = AppState::new(config, EnvAccessor::process(), PostStore::seeded())?;
        Self::build_with_state(state).await
    }

    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = state.config.common.listen_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            metrics: state.metrics.clone(),
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let monitor = self.metrics.spawn_lag_monitor(LAG_SAMPLE_INTERVAL);
        let result = axum::serve(self.listener, self.router).await;
        monitor.abort();
        result
    }

    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let monitor = self.metrics.spawn_lag_monitor(LAG_SAMPLE_INTERVAL);
        let result = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await;
        monitor.abort();
        result
    }
}
