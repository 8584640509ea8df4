use axum::{Json, Router, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// 对外公布的业务端点
pub const PUBLIC_ENDPOINTS: [&str; 3] = ["/upload", "/generate", "/styles"];

/// 根路径状态响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RootStatusResponse {
    #[schema(example = "AI Interior Designer API")]
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
    /// 可用端点
    pub endpoints: Vec<String>,
}

/// 健康检查响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    #[schema(example = "healthy")]
    pub status: String,
    /// 服务名称
    #[schema(example = "room-designer")]
    pub service: String,
    /// 当前版本（Cargo package version）
    #[schema(example = "0.1.0")]
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    summary = "服务状态",
    description = "返回服务标识、运行状态与可用端点列表。",
    responses((status = 200, description = "运行中", body = RootStatusResponse)),
    tag = "Health"
)]
pub async fn root_status() -> Json<RootStatusResponse> {
    Json(RootStatusResponse {
        message: "AI Interior Designer API".to_string(),
        status: "running".to_string(),
        endpoints: PUBLIC_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    summary = "健康检查",
    description = "用于探活的健康检查端点，返回服务状态与版本信息。",
    responses((status = 200, description = "服务健康", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
}
