//! OpenAPI descriptor served with Swagger UI.
//!
//! The envelope schemas below exist only to describe response shapes; the
//! handlers build the same JSON through `service_core::response`.
#![allow(dead_code)]

use utoipa::{OpenApi, ToSchema};

use crate::handlers;
use crate::handlers::health::HealthStatus;
use crate::handlers::load_test::{CpuLoadReport, MemoryLoadReport};
use crate::handlers::posts::CreatePostRequest;
use crate::handlers::settings::{ConfigInfo, EnvInfo, SecretInfo};
use crate::services::{EnvironmentSnapshot, Post};

pub const DOCS_PATH: &str = service_core::middleware::security_headers::DOCS_PREFIX;
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "k8s-sample-api",
        description = "Kubernetes環境で動作するサンプルAPIサーバー"
    ),
    paths(
        handlers::health::root,
        handlers::health::healthz,
        handlers::health::status,
        handlers::health::delay,
        handlers::posts::list_posts,
        handlers::posts::create_post,
        handlers::settings::env,
        handlers::settings::config,
        handlers::settings::secret,
        handlers::settings::env_check,
        handlers::load_test::cpu_load,
        handlers::load_test::memory_load,
        handlers::diagnostics::error_test,
        handlers::metrics::metrics,
    ),
    components(
        schemas(
            HealthStatus,
            Post,
            CreatePostRequest,
            EnvInfo,
            ConfigInfo,
            SecretInfo,
            EnvironmentSnapshot,
            CpuLoadReport,
            MemoryLoadReport,
            PostListResponse,
            PostResponse,
            EnvResponse,
            ConfigResponse,
            SecretResponse,
            EnvCheckResponse,
            DelayResponse,
            CpuLoadResponse,
            MemoryLoadResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "ヘルスチェック", description = "システムの状態確認"),
        (name = "投稿", description = "投稿の管理"),
        (name = "設定", description = "環境設定の確認"),
        (name = "テスト", description = "テスト用エンドポイント"),
        (name = "メトリクス", description = "Prometheus メトリクス"),
    )
)]
pub struct ApiDoc;

#[derive(ToSchema)]
pub struct PostListResponse {
    #[schema(example = "success")]
    status: String,
    data: Vec<Post>,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct PostResponse {
    #[schema(example = "success")]
    status: String,
    data: Post,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct EnvResponse {
    #[schema(example = "success")]
    status: String,
    data: EnvInfo,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct ConfigResponse {
    #[schema(example = "success")]
    status: String,
    data: ConfigInfo,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct SecretResponse {
    #[schema(example = "success")]
    status: String,
    data: SecretInfo,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct EnvCheckResponse {
    #[schema(example = "success")]
    status: String,
    data: EnvironmentSnapshot,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct DelayResponse {
    #[schema(example = "success")]
    status: String,
    #[schema(example = "遅延レスポンス完了")]
    message: String,
    #[schema(format = DateTime)]
    timestamp: String,
}

#[derive(ToSchema)]
pub struct CpuLoadResponse {
    #[schema(example = "success")]
    status: String,
    data: CpuLoadReport,
    #[schema(format = DateTime)]
    timestamp: String,
    #[schema(example = "CPU負荷を発生させました")]
    message: String,
}

#[derive(ToSchema)]
pub struct MemoryLoadResponse {
    #[schema(example = "success")]
    status: String,
    data: MemoryLoadReport,
    #[schema(format = DateTime)]
    timestamp: String,
    #[schema(example = "メモリ負荷を発生させました")]
    message: String,
}

#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    status: String,
    error: String,
    #[schema(format = DateTime)]
    timestamp: String,
    detail: Option<String>,
}
