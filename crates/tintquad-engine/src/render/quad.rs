use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Rect;
use crate::paint::Color;
use crate::render::shader::{self, LinkedProgram, ShaderError};
use crate::render::{RenderCtx, RenderTarget};

/// Clip-space corners of the quad, in triangle-strip order.
pub const QUAD_POSITIONS: [[f32; 2]; 4] = [
    [-0.5, 0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, -0.5],
];

/// GPU layout of the fill color uniform (`vec4<f32>`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorUniform {
    pub color: [f32; 4],
}

impl From<Color> for ColorUniform {
    #[inline]
    fn from(c: Color) -> Self {
        Self { color: c.to_array() }
    }
}

/// Draws the flat quad with a single uniform fill color.
///
/// Setup happens once in [`QuadRenderer::new`]: pipeline from a linked
/// program, static vertex buffer, color uniform buffer. Each [`draw`] only
/// writes the uniform and records one 4-vertex triangle-strip draw.
///
/// [`draw`]: QuadRenderer::draw
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    color_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl QuadRenderer {
    /// Vertex input the program must expose.
    pub const POSITION_ATTRIBUTE: &'static str = "position";
    /// Uniform the program must expose.
    pub const COLOR_UNIFORM: &'static str = "u_color";

    /// Compiles and links the bundled quad shaders.
    pub fn default_program() -> Result<LinkedProgram, ShaderError> {
        shader::build_program(
            "quad",
            include_str!("shaders/quad_vertex.wgsl"),
            include_str!("shaders/quad_fragment.wgsl"),
        )
    }

    /// Builds the pipeline for `program` and uploads the static geometry.
    pub fn new(ctx: &RenderCtx<'_>, program: &LinkedProgram) -> Result<Self, ShaderError> {
        let link_err = |log: String| ShaderError::Link {
            label: program.label().to_string(),
            log,
        };

        let position_location = program
            .attribute_location(Self::POSITION_ATTRIBUTE)
            .ok_or_else(|| link_err(format!("vertex attribute `{}` not found", Self::POSITION_ATTRIBUTE)))?;

        let color = program
            .uniform_location(Self::COLOR_UNIFORM)
            .ok_or_else(|| link_err(format!("uniform `{}` not found", Self::COLOR_UNIFORM)))?;

        if color.group != 0 {
            return Err(link_err(format!(
                "uniform `{}` must live in bind group 0, found group {}",
                Self::COLOR_UNIFORM,
                color.group
            )));
        }
        if color.size as usize != std::mem::size_of::<ColorUniform>() {
            return Err(link_err(format!(
                "uniform `{}` must be a vec4<f32>, found {} bytes",
                Self::COLOR_UNIFORM,
                color.size
            )));
        }

        let (vs_module, fs_module) = program.create_modules(ctx.device);

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tintquad quad bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: color.binding,
                    visibility: color.visibility,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(color.size as u64),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tintquad quad pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let attributes = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: position_location,
        }];

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tintquad quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(program.vertex().entry_point()),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &attributes,
                }],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(program.fragment().entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tintquad quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tintquad quad color ubo"),
            contents: bytemuck::bytes_of(&ColorUniform::from(Color::BLACK)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tintquad quad bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: color.binding,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        log::debug!(
            "quad pipeline ready (position @location({position_location}), {} @binding({}))",
            Self::COLOR_UNIFORM,
            color.binding
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            color_ubo,
            bind_group,
        })
    }

    /// Records the quad draw with `color` as the fill.
    ///
    /// `area` is the canvas rectangle in logical pixels; `None` draws over the
    /// whole target.
    pub fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        area: Option<Rect>,
        color: Color,
    ) {
        let size = ctx.surface_size;
        let viewport = match area {
            None => None,
            // Canvas entirely off-surface: nothing to draw.
            Some(rect) => match rect.to_physical(ctx.scale_factor, size.width, size.height) {
                Some(phys) => Some(phys),
                None => return,
            },
        };

        ctx.queue
            .write_buffer(&self.color_ubo, 0, bytemuck::bytes_of(&ColorUniform::from(color)));

        let mut rpass = target.load_pass("tintquad quad pass");
        if let Some((x, y, w, h)) = viewport {
            rpass.set_viewport(x, y, w, h, 0.0, 1.0);
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..QUAD_POSITIONS.len() as u32, 0..1);
    }
}
