//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Field pipelines and per-frame geometry
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use folio_field::{FrameSnapshot, Viewport};
use folio_render::{
    ContextError, FieldPipeline, FrameGeometry, Palette, RenderContext, ViewportUniforms,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: FieldPipeline,
    geometry: FrameGeometry,
    palette: Palette,
    layer_opacity: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = FieldPipeline::new(&context.device, context.format());
        let palette = surface_palette(render_config.palette(), context.format());

        log::info!(
            "Render system ready: {}x{} {:?}",
            context.size.width,
            context.size.height,
            context.format()
        );

        Ok(Self {
            context,
            pipeline,
            geometry: FrameGeometry::new(),
            palette,
            layer_opacity: render_config.layer_opacity,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Recover from a lost surface
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Rebuild the frame geometry from a new snapshot
    pub fn prepare(&mut self, snapshot: &FrameSnapshot) {
        self.geometry.rebuild(snapshot, &self.palette);
    }

    /// Drop the current geometry so the next frame shows only the background
    pub fn clear(&mut self) {
        self.geometry.clear();
    }

    /// Render the prepared geometry over a full clear
    ///
    /// `viewport` is the logical size the field was simulated in.
    pub fn render_frame(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        self.pipeline.update_uniforms(
            &self.context.queue,
            &ViewportUniforms::new(viewport.width, viewport.height, self.layer_opacity),
        );
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &self.geometry.lines,
            &self.geometry.discs,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, clear_color(&self.palette));

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Connections and particles in the last prepared frame
    pub fn counts(&self) -> (usize, usize) {
        (self.geometry.line_count(), self.geometry.disc_count())
    }
}

/// Palette in the space the surface expects
fn surface_palette(palette: Palette, format: wgpu::TextureFormat) -> Palette {
    if format.is_srgb() {
        palette.to_linear()
    } else {
        palette
    }
}

fn clear_color(palette: &Palette) -> wgpu::Color {
    let bg = palette.background;
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}
