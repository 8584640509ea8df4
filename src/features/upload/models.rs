use serde::Serialize;

/// 上传成功响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    /// 提示信息
    #[schema(example = "Image uploaded successfully")]
    pub message: String,
    /// 落盘路径（固定，每次上传覆盖）
    #[schema(example = "uploads/room.jpg")]
    pub filepath: String,
}

/// multipart 表单（仅用于 OpenAPI 文档）
#[allow(dead_code)]
#[derive(utoipa::ToSchema)]
pub struct UploadForm {
    /// 房间照片（任意受支持的图片格式）
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
