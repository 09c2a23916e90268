//! Rendering pipeline components

pub mod field_pipeline;
pub mod types;

pub use field_pipeline::FieldPipeline;
pub use types::{DiscInstance, LineVertex, ViewportUniforms};
