use axum::{Json, Router, routing::get};

use crate::state::AppState;

use super::catalog::{self, StyleDescriptor};

#[utoipa::path(
    get,
    path = "/styles",
    summary = "风格列表",
    description = "返回固定顺序的 8 个室内设计风格预设。",
    responses((status = 200, description = "风格列表", body = [StyleDescriptor])),
    tag = "Styles"
)]
pub async fn list_styles() -> Json<&'static [StyleDescriptor]> {
    Json(catalog::all_styles())
}

pub fn create_styles_router() -> Router<AppState> {
    Router::new().route("/styles", get(list_styles))
}
