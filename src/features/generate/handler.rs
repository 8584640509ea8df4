use axum::{Json, Router, body::Bytes, extract::State, routing::post};

use crate::error::AppError;
use crate::features::styles::{DEFAULT_STYLE_ID, find_style};
use crate::state::AppState;

use super::models::{GenerateRequest, GenerateResponse, GenerationJob};

#[utoipa::path(
    post,
    path = "/generate",
    summary = "提交风格生成请求",
    description = "要求本进程内已有成功上传的图片。`style` 缺省为 `minimalist`，未知风格同样受理。当前为占位实现，仅返回受理回执。",
    request_body(content = GenerateRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "已受理", body = GenerateResponse),
        (status = 400, description = "尚未上传图片 / 请求体不是合法 JSON", body = crate::error::ErrorResponse)
    ),
    tag = "Generate"
)]
pub async fn generate_design(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    // 先检查前置条件，再解析请求体
    let image_path = state
        .image_store
        .current()
        .ok_or(AppError::NoImageUploaded)?;

    let req = GenerateRequest::from_body(&body)?;
    let style = req.style.unwrap_or_else(|| DEFAULT_STYLE_ID.to_string());
    if find_style(&style).is_none() {
        tracing::warn!(style = %style, "请求的风格不在风格目录中，仍按原样受理");
    }

    let ack = state.generator.submit(&GenerationJob { style, image_path })?;
    Ok(Json(ack))
}

pub fn create_generate_router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_design))
}
