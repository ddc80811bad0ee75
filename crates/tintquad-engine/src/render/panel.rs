use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Rect;
use crate::paint::Color;
use crate::render::shader::{self, ShaderError};
use crate::render::{RenderCtx, RenderTarget};

/// Solid rectangle in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub color: Color,
}

impl Panel {
    #[inline]
    pub const fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Instanced renderer for solid rectangles (toolbar, buttons).
///
/// Geometry is provided in logical pixels and converted to NDC in the vertex
/// shader using the viewport uniform. Panels are drawn in slice order.
pub struct PanelRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,

    corner_vbo: wgpu::Buffer,
    corner_ibo: wgpu::Buffer,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl PanelRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self, ShaderError> {
        let src = include_str!("shaders/panel.wgsl");
        let program = shader::build_program("panel", src, src)?;
        let (vs_module, fs_module) = program.create_modules(ctx.device);

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tintquad panel bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<ViewportUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tintquad panel pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tintquad panel pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(program.vertex().entry_point()),
                compilation_options: Default::default(),
                buffers: &[Corner::layout(), PanelInstance::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(program.fragment().entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tintquad panel viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tintquad panel bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let corner_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tintquad panel corner vbo"),
            contents: bytemuck::cast_slice(&CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let corner_ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tintquad panel corner ibo"),
            contents: bytemuck::cast_slice(&CORNER_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            pipeline,
            bind_group,
            viewport_ubo,
            corner_vbo,
            corner_ibo,
            instance_vbo: None,
            instance_capacity: 0,
        })
    }

    /// Records all `panels` into `target` in one instanced draw.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, panels: &[Panel]) {
        let instances: Vec<PanelInstance> = panels
            .iter()
            .filter(|p| !p.rect.is_empty())
            .map(PanelInstance::from)
            .collect();

        if instances.is_empty() {
            return;
        }

        let u = ViewportUniform {
            size: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&u));

        self.ensure_instance_capacity(ctx, instances.len());
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let mut rpass = target.load_pass("tintquad panel pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.corner_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(self.corner_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..CORNER_INDICES.len() as u32, 0, 0..instances.len() as u32);
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(16);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tintquad panel instance vbo"),
            size: (new_cap * std::mem::size_of::<PanelInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Corner {
    pos: [f32; 2], // 0..1
}

impl Corner {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Corner>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const CORNERS: [Corner; 4] = [
    Corner { pos: [0.0, 0.0] },
    Corner { pos: [1.0, 0.0] },
    Corner { pos: [1.0, 1.0] },
    Corner { pos: [0.0, 1.0] },
];

const CORNER_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PanelInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl From<&Panel> for PanelInstance {
    fn from(p: &Panel) -> Self {
        Self {
            origin: [p.rect.origin.x, p.rect.origin.y],
            size: [p.rect.size.x, p.rect.size.y],
            color: p.color.to_array(),
        }
    }
}

impl PanelInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PanelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
