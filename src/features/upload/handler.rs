//! 房间照片上传（features/upload）
use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        State,
        multipart::{Multipart, MultipartError, MultipartRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use std::time::Instant;

use crate::error::AppError;
use crate::state::AppState;

use super::models::UploadResponse;
use super::processor;

/// multipart 中承载图片的字段名
const IMAGE_FIELD: &str = "image";

fn map_multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Multipart(e.body_text())
    }
}

/// 取出第一个名为 `image` 的文件字段。
///
/// 没有 filename 参数的同名字段是普通表单字段，不算文件，直接跳过。
async fn read_image_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name() else {
            continue;
        };
        if file_name.is_empty() {
            return Err(AppError::EmptyFilename);
        }
        tracing::debug!(file_name, content_type = ?field.content_type(), "收到上传文件");
        return field.bytes().await.map_err(map_multipart_error);
    }
    Err(AppError::MissingImage)
}

#[utoipa::path(
    post,
    path = "/upload",
    summary = "上传房间照片",
    description = "接收 multipart 字段 `image`，解码后直接拉伸到固定尺寸（默认 512×512，不保持宽高比），以 JPEG 覆盖写入固定路径，并记为当前图片。",
    request_body(content = crate::features::upload::models::UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "上传成功", body = UploadResponse),
        (status = 400, description = "未提供图片 / 未选择文件", body = crate::error::ErrorResponse),
        (status = 413, description = "请求体过大", body = crate::error::ErrorResponse),
        (status = 500, description = "图片无法解码或写入失败", body = crate::error::ErrorResponse)
    ),
    tag = "Upload"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // 非 multipart 请求等同于没有文件字段
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!("非 multipart 请求: {}", rejection.body_text());
        AppError::MissingImage
    })?;

    let bytes = read_image_field(&mut multipart).await?;
    let received = bytes.len();

    let permit = state
        .process_semaphore
        .clone()
        .acquire_owned()
        .await
        .map_err(|e| AppError::Internal(format!("获取处理信号量失败: {e}")))?;

    let opts = state.normalize_options;
    let store = state.image_store.clone();
    let t_start = Instant::now();

    // 解码/缩放/编码/落盘都是阻塞操作，移出 tokio worker。
    let (path, source_dims) = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        let normalized = processor::normalize_image(&bytes, opts)?;
        let path = store.replace(&normalized.jpeg)?;
        Ok::<_, AppError>((path, normalized.source_dims))
    })
    .await
    .map_err(|e| AppError::Internal(format!("图片处理任务异常: {e}")))??;

    tracing::info!(
        received_bytes = received,
        source = %format!("{}x{}", source_dims.0, source_dims.1),
        target = %format!("{}x{}", opts.width, opts.height),
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        "图片已保存: {}",
        path.display()
    );

    Ok(Json(UploadResponse {
        message: "Image uploaded successfully".to_string(),
        filepath: path.display().to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/image/current",
    summary = "获取当前图片",
    description = "返回最近一次上传并规范化后的 JPEG。",
    responses(
        (status = 200, description = "当前图片", content_type = "image/jpeg", body = Vec<u8>),
        (status = 400, description = "尚未上传图片", body = crate::error::ErrorResponse),
        (status = 404, description = "图片文件已被移除", body = crate::error::ErrorResponse)
    ),
    tag = "Upload"
)]
pub async fn get_current_image(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let path = state
        .image_store
        .current()
        .ok_or(AppError::NoImageUploaded)?;

    let bytes = match tokio::fs::read(&path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("{}", path.display())));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    ))
}

pub fn create_upload_router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_image))
        .route("/image/current", get(get_current_image))
}
