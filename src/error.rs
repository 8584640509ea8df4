use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 应用统一错误类型
///
/// 客户端错误的 Display 文本即对外 `error` 字段，属于接口契约，修改需同步前端。
#[derive(Error, Debug, utoipa::ToSchema)]
pub enum AppError {
    /// 请求中没有名为 `image` 的文件字段
    #[error("No image provided")]
    MissingImage,

    /// `image` 字段存在但文件名为空（通常是前端未选择文件）
    #[error("No file selected")]
    EmptyFilename,

    /// 调用生成接口前尚未上传过图片
    #[error("No image uploaded")]
    NoImageUploaded,

    /// multipart 流读取失败
    #[error("multipart 解析错误: {0}")]
    Multipart(String),

    /// JSON 解析错误
    #[error("JSON 解析错误: {0}")]
    Json(String),

    /// 请求体超出上限
    #[error("请求体过大: {0}")]
    PayloadTooLarge(String),

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 图片解码失败（无法识别的格式或损坏的数据）
    #[error("图像解码错误: {0}")]
    ImageDecode(String),

    /// 图片编码失败
    #[error("图像编码错误: {0}")]
    ImageEncode(String),

    /// 文件读写失败
    #[error("I/O 错误: {0}")]
    Io(String),

    /// 内部服务器错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误响应体
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 人类可读的错误信息
    #[schema(example = "No image provided")]
    pub error: String,

    /// 稳定的错误码，用于程序化处理。
    #[schema(example = "NO_IMAGE_PROVIDED")]
    pub code: String,

    /// 请求追踪 ID（由 request-id 中间件注入）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingImage
            | AppError::EmptyFilename
            | AppError::NoImageUploaded
            | AppError::Multipart(_)
            | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // 解码失败不单独归类为客户端错误，按通用服务端失败返回
            AppError::ImageDecode(_)
            | AppError::ImageEncode(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn stable_code(&self) -> &'static str {
        match self {
            AppError::MissingImage => "NO_IMAGE_PROVIDED",
            AppError::EmptyFilename => "NO_FILE_SELECTED",
            AppError::NoImageUploaded => "NO_IMAGE_UPLOADED",
            AppError::Multipart(_) => "BAD_MULTIPART",
            AppError::Json(_) => "BAD_REQUEST",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ImageDecode(_) => "IMAGE_DECODE_FAILED",
            AppError::ImageEncode(_) => "IMAGE_ENCODE_FAILED",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.stable_code(), "请求处理失败: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.stable_code().to_string(),
            request_id: crate::request_id::current_request_id(),
        };

        (status, Json(body)).into_response()
    }
}

// =============== Error conversions for common external errors ===============

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        use image::ImageError;
        match err {
            ImageError::Encoding(_) => AppError::ImageEncode(err.to_string()),
            ImageError::IoError(e) => AppError::Io(e.to_string()),
            ImageError::Limits(_) => AppError::PayloadTooLarge(err.to_string()),
            _ => AppError::ImageDecode(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::http::StatusCode;

    #[test]
    fn client_errors_keep_contract_messages() {
        assert_eq!(AppError::MissingImage.to_string(), "No image provided");
        assert_eq!(AppError::EmptyFilename.to_string(), "No file selected");
        assert_eq!(AppError::NoImageUploaded.to_string(), "No image uploaded");
        for e in [
            AppError::MissingImage,
            AppError::EmptyFilename,
            AppError::NoImageUploaded,
        ] {
            assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn undecodable_bytes_map_to_server_error() {
        let err = image::load_from_memory(b"definitely not an image").expect_err("decode");
        let app: AppError = err.into();
        assert!(matches!(app, AppError::ImageDecode(_)), "got {app:?}");
        assert_eq!(app.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
