//! GPU-compatible data types for the field pipeline
//!
//! These types match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// One end of a connection segment, in logical pixels
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    /// RGBA, alpha already scaled by the connection opacity
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Per-instance data for one particle disc
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DiscInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// Padding to align color to 16 bytes
    pub _padding: f32,
    pub color: [f32; 4],
}

impl DiscInstance {
    pub fn new(center: [f32; 2], radius: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            radius,
            _padding: 0.0,
            color,
        }
    }
}

/// Shared uniforms for both passes
/// Layout: 16 bytes (must match `Viewport` in the shaders)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Logical viewport size the field simulates in
    pub size: [f32; 2],
    /// Multiplies every alpha; the background layer sits at 0.4
    pub layer_opacity: f32,
    pub _padding: f32,
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32, layer_opacity: f32) -> Self {
        Self {
            // avoid a division by zero in the vertex shader
            size: [width.max(1.0), height.max(1.0)],
            layer_opacity: layer_opacity.clamp(0.0, 1.0),
            _padding: 0.0,
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_line_vertex_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<LineVertex>(), 24);
    }

    #[test]
    fn test_disc_instance_size() {
        // center + radius + padding + color = 8 floats
        assert_eq!(size_of::<DiscInstance>(), 32);
    }

    #[test]
    fn test_viewport_uniforms_size() {
        assert_eq!(size_of::<ViewportUniforms>(), 16);
    }

    #[test]
    fn test_viewport_uniforms_clamp() {
        let u = ViewportUniforms::new(0.0, 600.0, 1.5);
        assert_eq!(u.size, [1.0, 600.0]);
        assert_eq!(u.layer_opacity, 1.0);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
        assert_eq!(std::mem::align_of::<DiscInstance>(), 4);
        assert_eq!(std::mem::align_of::<ViewportUniforms>(), 4);
    }
}
