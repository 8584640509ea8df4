pub mod catalog;
pub mod handler;

pub use catalog::{DEFAULT_STYLE_ID, STYLE_CATALOG, StyleDescriptor, find_style};
pub use handler::{create_styles_router, list_styles};
