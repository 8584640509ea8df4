use std::path::PathBuf;

use crate::error::AppError;

use super::models::{GenerateResponse, GenerationJob, GenerationStatus};

/// 图片生成后端的接入点。
///
/// 实现方负责把任务交给实际的生成服务（例如远端推理服务），并返回受理回执。
pub trait DesignGenerator: Send + Sync {
    fn submit(&self, job: &GenerationJob) -> Result<GenerateResponse, AppError>;
}

/// 占位实现：不做任何图像变换，只返回受理回执。
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    note: String,
    /// 生成结果目录（预留，当前不写入）
    output_dir: PathBuf,
}

impl PlaceholderGenerator {
    pub fn new(note: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            note: note.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl DesignGenerator for PlaceholderGenerator {
    fn submit(&self, job: &GenerationJob) -> Result<GenerateResponse, AppError> {
        tracing::info!(
            style = %job.style,
            image = %job.image_path.display(),
            output_dir = %self.output_dir.display(),
            "生成请求已受理（占位实现，不产出结果）"
        );
        Ok(GenerateResponse {
            message: format!("Generating {} style...", job.style),
            status: GenerationStatus::Processing,
            note: self.note.clone(),
        })
    }
}
