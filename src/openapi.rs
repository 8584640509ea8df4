use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::health::handler::root_status,
        crate::features::health::handler::health_check,
        crate::features::upload::handler::upload_image,
        crate::features::upload::handler::get_current_image,
        crate::features::styles::handler::list_styles,
        crate::features::generate::handler::generate_design,
    ),
    components(
        schemas(
            crate::error::ErrorResponse,
            crate::features::health::handler::RootStatusResponse,
            crate::features::health::handler::HealthResponse,
            crate::features::upload::models::UploadForm,
            crate::features::upload::models::UploadResponse,
            crate::features::styles::catalog::StyleDescriptor,
            crate::features::generate::models::GenerateRequest,
            crate::features::generate::models::GenerateResponse,
            crate::features::generate::models::GenerationStatus,
        )
    ),
    tags(
        (name = "Health", description = "服务状态与探活。"),
        (name = "Upload", description = "房间照片上传：统一缩放为固定尺寸并覆盖保存。"),
        (name = "Styles", description = "室内设计风格预设目录。"),
        (name = "Generate", description = "风格生成请求（当前为占位实现）。"),
    ),
    info(
        title = "AI Interior Designer API",
        version = env!("CARGO_PKG_VERSION"),
        description = "房间照片上传与风格预设服务（Axum + utoipa）。"
    )
)]
pub struct ApiDoc;
