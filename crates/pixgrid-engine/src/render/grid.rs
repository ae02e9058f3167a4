use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Mat4;
use crate::grid::GridGeometry;
use crate::paint::Rgb;

use super::RenderTarget;

/// Renders the whole cell grid with a single indexed draw.
///
/// Positions and indices are uploaded once at construction. Colors live in a
/// separate vertex buffer that is rewritten in full whenever the cell buffer
/// is dirty.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    camera_ubo: wgpu::Buffer,

    position_vbo: wgpu::Buffer,
    color_vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl GridRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        geometry: &GridGeometry,
        colors: &[Rgb],
        projection: Mat4,
    ) -> Self {
        debug_assert_eq!(geometry.positions().len(), colors.len());

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pixgrid grid shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/grid.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("pixgrid grid bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CameraUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pixgrid grid pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pixgrid grid pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let camera_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixgrid camera ubo"),
            contents: bytemuck::bytes_of(&CameraUniform { proj_view: projection }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pixgrid grid bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        let position_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixgrid position vbo"),
            contents: bytemuck::cast_slice(geometry.positions()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixgrid color vbo"),
            contents: bytemuck::cast_slice(colors),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixgrid ibo"),
            contents: bytemuck::cast_slice(geometry.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "grid renderer ready: {}x{} cells, {} indices",
            geometry.cols(),
            geometry.rows(),
            geometry.index_count()
        );

        Self {
            pipeline,
            bind_group,
            camera_ubo,
            position_vbo,
            color_vbo,
            ibo,
            index_count: geometry.index_count(),
        }
    }

    /// Replaces the GPU copy of every vertex color.
    pub fn upload_colors(&self, queue: &wgpu::Queue, colors: &[Rgb]) {
        queue.write_buffer(&self.color_vbo, 0, bytemuck::cast_slice(colors));
    }

    pub fn write_projection(&self, queue: &wgpu::Queue, projection: Mat4) {
        let u = CameraUniform { proj_view: projection };
        queue.write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&u));
    }

    /// Clears `target` to `clear` and draws all cells.
    pub fn draw(&self, target: &mut RenderTarget<'_>, clear: Rgb) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pixgrid grid pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.color_vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    proj_view: Mat4,
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Rgb>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}
