use std::io::Cursor;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::config::ImageConfig;
use crate::error::AppError;

/// 图片规范化参数
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub width: u32,
    pub height: u32,
    pub jpeg_quality: u8,
    pub filter: FilterType,
}

impl From<&ImageConfig> for NormalizeOptions {
    fn from(cfg: &ImageConfig) -> Self {
        Self {
            width: cfg.target_width,
            height: cfg.target_height,
            jpeg_quality: cfg.jpeg_quality,
            filter: if cfg.optimize_speed {
                FilterType::Triangle
            } else {
                FilterType::CatmullRom
            },
        }
    }
}

/// 规范化结果
#[derive(Debug)]
pub struct NormalizedImage {
    /// JPEG 编码后的字节
    pub jpeg: Vec<u8>,
    /// 原始尺寸
    pub source_dims: (u32, u32),
}

/// 解码任意受支持格式的图片，直接拉伸到目标尺寸（不裁剪、不保持宽高比），编码为 JPEG。
///
/// CPU 密集，调用方需放到 `spawn_blocking` 中执行。
pub fn normalize_image(bytes: &[u8], opts: NormalizeOptions) -> Result<NormalizedImage, AppError> {
    let img = image::load_from_memory(bytes)?;
    let source_dims = (img.width(), img.height());

    // JPEG 不支持 alpha，统一转为 RGB8
    let rgb = img
        .resize_exact(opts.width, opts.height, opts.filter)
        .to_rgb8();

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), opts.jpeg_quality);
    DynamicImage::ImageRgb8(rgb).write_with_encoder(encoder)?;

    Ok(NormalizedImage { jpeg, source_dims })
}
