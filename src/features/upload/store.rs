use std::path::{Path, PathBuf};
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::AppError;

/// 单槽位的当前图片指针：只记录最近一次成功上传的落盘路径。
///
/// 仅存在于进程生命周期内，不持久化；并发上传不做串行化，最后写入者生效。
#[derive(Debug, Default)]
pub struct CurrentImageSlot {
    path: RwLock<Option<PathBuf>>,
}

impl CurrentImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: PathBuf) {
        match self.path.write() {
            Ok(mut guard) => *guard = Some(path),
            Err(poisoned) => *poisoned.into_inner() = Some(path),
        }
    }

    pub fn get(&self) -> Option<PathBuf> {
        match self.path.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// 上传图片的存储：固定目标路径 + 当前图片指针。
#[derive(Debug)]
pub struct ImageStore {
    target: PathBuf,
    current: CurrentImageSlot,
}

impl ImageStore {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            current: CurrentImageSlot::new(),
        }
    }

    /// 最近一次成功上传的路径
    pub fn current(&self) -> Option<PathBuf> {
        self.current.get()
    }

    /// 覆盖写入编码后的图片并更新指针，返回落盘路径。
    ///
    /// 先写同目录临时文件再 rename，读取方不会看到写了一半的文件。
    /// 阻塞 IO，调用方需在 `spawn_blocking` 中执行。
    pub fn replace(&self, encoded: &[u8]) -> Result<PathBuf, AppError> {
        let dir = self
            .target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp = dir.join(format!(".upload-{}.tmp", Uuid::new_v4().simple()));

        if let Err(e) = std::fs::write(&tmp, encoded) {
            let _ = std::fs::remove_file(&tmp);
            return Err(AppError::Io(format!("写入临时文件失败 {}: {e}", tmp.display())));
        }
        if let Err(e) = std::fs::rename(&tmp, &self.target) {
            let _ = std::fs::remove_file(&tmp);
            return Err(AppError::Io(format!(
                "替换上传文件失败 {}: {e}",
                self.target.display()
            )));
        }

        self.current.set(self.target.clone());
        Ok(self.target.clone())
    }
}
