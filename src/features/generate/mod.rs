pub mod generator;
pub mod handler;
pub mod models;

pub use generator::{DesignGenerator, PlaceholderGenerator};
pub use handler::{create_generate_router, generate_design};
pub use models::{GenerateRequest, GenerateResponse, GenerationJob, GenerationStatus};
