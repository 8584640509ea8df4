/// 服务状态与探活
pub mod health;

/// 风格生成请求（占位实现）
pub mod generate;

/// 风格目录
pub mod styles;

/// 房间照片上传
pub mod upload;
