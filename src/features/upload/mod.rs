pub mod handler;
pub mod models;
pub mod processor;
pub mod store;

pub use handler::{create_upload_router, get_current_image, upload_image};
pub use models::UploadResponse;
pub use processor::{NormalizeOptions, normalize_image};
pub use store::{CurrentImageSlot, ImageStore};
