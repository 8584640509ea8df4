use serde::Serialize;

/// 风格预设（只读元数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct StyleDescriptor {
    /// 稳定 ID（作为 `/generate` 的 `style` 参数）
    #[schema(example = "minimalist")]
    pub id: &'static str,
    /// 展示名称
    #[schema(example = "Minimalist")]
    pub name: &'static str,
    /// 简短描述
    #[schema(example = "Clean, simple, white")]
    pub description: &'static str,
}

const fn style(
    id: &'static str,
    name: &'static str,
    description: &'static str,
) -> StyleDescriptor {
    StyleDescriptor {
        id,
        name,
        description,
    }
}

/// 固定顺序的风格目录，前端按此顺序展示。
pub const STYLE_CATALOG: [StyleDescriptor; 8] = [
    style("minimalist", "Minimalist", "Clean, simple, white"),
    style("industrial", "Industrial", "Brick, metal, urban"),
    style("cyberpunk", "Cyberpunk", "Neon, futuristic, RGB"),
    style("modern_luxury", "Modern Luxury", "Gold, marble, elegant"),
    style("scandinavian", "Scandinavian", "Light wood, cozy, hygge"),
    style("midcentury_modern", "Mid-Century Modern", "Retro 1960s, teak"),
    style("japanese_zen", "Japanese Zen", "Natural, peaceful, minimal"),
    style("bohemian", "Bohemian", "Colorful, eclectic, cozy"),
];

/// 未指定风格时使用的默认值
pub const DEFAULT_STYLE_ID: &str = "minimalist";

pub fn all_styles() -> &'static [StyleDescriptor] {
    &STYLE_CATALOG
}

pub fn find_style(id: &str) -> Option<&'static StyleDescriptor> {
    STYLE_CATALOG.iter().find(|s| s.id == id)
}
