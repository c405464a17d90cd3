use anyhow::Result;

use crate::paint::Color;
use crate::shader::{ShaderLibrary, ShaderStage};

use super::vertex::{TRIANGLE_VERTICES, Vertex, ViewportUniform};
use super::{DrawPacket, VERTEX_BUFFER_SLOT, VIEWPORT_BINDING, VIEWPORT_GROUP};

/// Names the pipeline and the entry points it is built from.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub vertex_entry: String,
    pub fragment_entry: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Simple Pipeline".to_string(),
            vertex_entry: "vertex_main".to_string(),
            fragment_entry: "fragment_main".to_string(),
        }
    }
}

/// The compiled render pipeline plus the two small buffers it draws from.
///
/// Everything is created in [`TrianglePipeline::new`]; there is no lazily built
/// state, so a value of this type is always ready to encode.
pub struct TrianglePipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    viewport_ubo: wgpu::Buffer,
}

impl TrianglePipeline {
    /// Resolves the configured entry points and compiles the pipeline for `format`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        library: &ShaderLibrary,
        config: &PipelineConfig,
    ) -> Result<Self> {
        let vertex_fn = library.function(&config.vertex_entry, ShaderStage::Vertex)?;
        let fragment_fn = library.function(&config.fragment_entry, ShaderStage::Fragment)?;

        anyhow::ensure!(
            library.has_uniform(VIEWPORT_GROUP, VIEWPORT_BINDING),
            "shader library `{}` declares no viewport uniform at @group({VIEWPORT_GROUP}) @binding({VIEWPORT_BINDING})",
            library.label()
        );

        let shader = library.create_module(device);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("triangle viewport bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: VIEWPORT_BINDING,
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

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(config.label.as_str()),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(vertex_fn.name),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fragment_fn.name),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
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

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("triangle vertices"),
            size: std::mem::size_of_val(&TRIANGLE_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("triangle viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("triangle viewport bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: VIEWPORT_BINDING,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        log::info!(
            "created pipeline \"{}\" ({format:?}) from library `{}`",
            config.label,
            library.label()
        );

        Ok(Self {
            format,
            pipeline,
            bind_group,
            vertex_buffer,
            viewport_ubo,
        })
    }

    /// Color format the pipeline was compiled for.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Records one frame: uploads the packet's per-draw data, clears `view` and
    /// issues the single draw call.
    pub fn encode(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        packet: &DrawPacket,
        clear: Color,
    ) {
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&packet.vertices));
        queue.write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&packet.viewport));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
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
        rpass.set_vertex_buffer(VERTEX_BUFFER_SLOT, self.vertex_buffer.slice(..));
        rpass.set_bind_group(VIEWPORT_GROUP, &self.bind_group, &[]);
        rpass.draw(packet.vertex_range.clone(), 0..1);
    }
}
