//! Constellation rendering
//!
//! This crate draws [`folio_field::FrameSnapshot`]s with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::FieldPipeline`] - Line list and instanced disc pipelines
//! - [`geometry::FrameGeometry`] - Converts snapshots to GPU buffers

pub mod context;
pub mod geometry;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use geometry::{srgb_to_linear, FrameGeometry, Palette};
pub use pipeline::{DiscInstance, FieldPipeline, LineVertex, ViewportUniforms};

/// Opacity of the whole background layer
pub const DEFAULT_LAYER_OPACITY: f32 = 0.4;
