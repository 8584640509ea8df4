use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::AppConfig;
use crate::features::generate::{DesignGenerator, PlaceholderGenerator};
use crate::features::upload::{ImageStore, NormalizeOptions};

/// 聚合的应用共享状态（按请求注入，handler 之间不共享隐式全局量）
#[derive(Clone)]
pub struct AppState {
    /// 上传图片存储（含当前图片指针）
    pub image_store: Arc<ImageStore>,
    /// 生成后端
    pub generator: Arc<dyn DesignGenerator>,
    /// 控制并发图片处理的信号量（限制 CPU 密集型任务数量）
    pub process_semaphore: Arc<Semaphore>,
    /// 上传图片规范化参数
    pub normalize_options: NormalizeOptions,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            image_store: Arc::new(ImageStore::new(config.upload_file_path())),
            generator: Arc::new(PlaceholderGenerator::new(
                config.generation.note.clone(),
                config.output_path(),
            )),
            process_semaphore: Arc::new(Semaphore::new(config.image.effective_parallelism())),
            normalize_options: NormalizeOptions::from(&config.image),
        }
    }

    /// 替换生成后端
    pub fn with_generator(mut self, generator: Arc<dyn DesignGenerator>) -> Self {
        self.generator = generator;
        self
    }
}
