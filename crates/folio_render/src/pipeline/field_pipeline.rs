//! Render pipelines for the constellation layer
//!
//! Two pipelines share one viewport uniform: a line list for connections and
//! instanced quads with a circular mask for particles. Both alpha-blend over
//! a full clear, so nothing survives from the previous frame.

use wgpu::util::DeviceExt;

use super::types::{DiscInstance, LineVertex, ViewportUniforms};

/// Initial buffer capacity in elements; buffers grow on demand
const INITIAL_LINE_VERTICES: usize = 2 * 1024;
const INITIAL_DISC_INSTANCES: usize = 256;

/// Line and disc pipelines with their buffers
pub struct FieldPipeline {
    line_pipeline: wgpu::RenderPipeline,
    disc_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    line_buffer: wgpu::Buffer,
    line_capacity: usize,
    line_count: u32,
    disc_buffer: wgpu::Buffer,
    disc_capacity: usize,
    disc_count: u32,
}

impl FieldPipeline {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Field Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Field Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/line.wgsl").into()),
        });
        let disc_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Disc Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/disc.wgsl").into()),
        });

        let line_pipeline = create_pipeline(
            device,
            "Line Pipeline",
            &pipeline_layout,
            &line_shader,
            Self::line_buffer_layout(),
            wgpu::PrimitiveTopology::LineList,
            surface_format,
        );
        let disc_pipeline = create_pipeline(
            device,
            "Disc Pipeline",
            &pipeline_layout,
            &disc_shader,
            Self::disc_buffer_layout(),
            wgpu::PrimitiveTopology::TriangleList,
            surface_format,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Field Uniform Buffer"),
            contents: bytemuck::bytes_of(&ViewportUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Field Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let line_buffer = create_vertex_buffer::<LineVertex>(device, "Line Buffer", INITIAL_LINE_VERTICES);
        let disc_buffer =
            create_vertex_buffer::<DiscInstance>(device, "Disc Instance Buffer", INITIAL_DISC_INSTANCES);

        Self {
            line_pipeline,
            disc_pipeline,
            uniform_buffer,
            bind_group,
            line_buffer,
            line_capacity: INITIAL_LINE_VERTICES,
            line_count: 0,
            disc_buffer,
            disc_capacity: INITIAL_DISC_INSTANCES,
            disc_count: 0,
        }
    }

    fn line_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    fn disc_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<DiscInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 8,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 2,
                },
            ],
        }
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &ViewportUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload this frame's lines and discs, growing buffers if needed
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        lines: &[LineVertex],
        discs: &[DiscInstance],
    ) {
        if lines.len() > self.line_capacity {
            self.line_capacity = lines.len().next_power_of_two();
            self.line_buffer = create_vertex_buffer::<LineVertex>(device, "Line Buffer", self.line_capacity);
            log::debug!("Grew line buffer to {} vertices", self.line_capacity);
        }
        if discs.len() > self.disc_capacity {
            self.disc_capacity = discs.len().next_power_of_two();
            self.disc_buffer =
                create_vertex_buffer::<DiscInstance>(device, "Disc Instance Buffer", self.disc_capacity);
            log::debug!("Grew disc buffer to {} instances", self.disc_capacity);
        }

        if !lines.is_empty() {
            queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(lines));
        }
        if !discs.is_empty() {
            queue.write_buffer(&self.disc_buffer, 0, bytemuck::cast_slice(discs));
        }
        self.line_count = lines.len() as u32;
        self.disc_count = discs.len() as u32;
    }

    /// Clear the target and draw connections, then discs
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Field Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        if self.line_count > 0 {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
            render_pass.draw(0..self.line_count, 0..1);
        }

        if self.disc_count > 0 {
            render_pass.set_pipeline(&self.disc_pipeline);
            render_pass.set_vertex_buffer(0, self.disc_buffer.slice(..));
            // six corners per quad, generated in the vertex shader
            render_pass.draw(0..6, 0..self.disc_count);
        }
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.line_count
    }

    pub fn disc_count(&self) -> u32 {
        self.disc_count
    }
}

fn create_vertex_buffer<T>(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<T>() * capacity.max(1)) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    buffer_layout: wgpu::VertexBufferLayout<'static>,
    topology: wgpu::PrimitiveTopology,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[buffer_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_buffer_layout_stride() {
        let layout = FieldPipeline::line_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<LineVertex>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn test_disc_buffer_layout_is_instanced() {
        let layout = FieldPipeline::disc_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<DiscInstance>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        // color attribute must start after center, radius and padding
        assert_eq!(layout.attributes[2].offset, 16);
    }
}
