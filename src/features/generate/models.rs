use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;

/// `/generate` 请求体
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct GenerateRequest {
    /// 风格 ID；缺省或为 null 时使用 `minimalist`。不校验是否存在于风格目录。
    #[serde(default)]
    #[schema(example = "cyberpunk")]
    pub style: Option<String>,
}

impl GenerateRequest {
    /// 空请求体视为 `{}`；其余内容必须是合法 JSON 对象。
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| AppError::Json(e.to_string()))
    }
}

/// 提交给生成器的任务
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub style: String,
    /// 当前图片路径
    pub image_path: PathBuf,
}

/// 生成任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Processing,
}

/// 生成请求的受理回执
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    #[schema(example = "Generating cyberpunk style...")]
    pub message: String,
    pub status: GenerationStatus,
    #[schema(example = "Colab connection coming in next step")]
    pub note: String,
}
