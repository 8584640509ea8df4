use crate::config::AppConfig;
use crate::error::AppError;
use std::fs;
use std::path::Path;

/// 执行启动检查
///
/// 1. 检查并创建上传目录
/// 2. 检查并创建生成结果目录（预留）
pub fn run_startup_checks(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("🔍 开始执行启动检查...");

    ensure_dir("上传", &config.upload_path())?;
    ensure_dir("输出", &config.output_path())?;

    tracing::info!("✅ 启动检查完成");
    Ok(())
}

fn ensure_dir(label: &str, path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        tracing::info!("📁 {}目录已存在: {:?}", label, path);
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        AppError::Internal(format!("创建{label}目录失败 {}: {e}", path.display()))
    })?;
    tracing::info!("📁 已创建{}目录: {:?}", label, path);
    Ok(())
}
