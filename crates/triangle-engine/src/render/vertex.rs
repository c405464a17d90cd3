use bytemuck::{Pod, Zeroable};

use crate::coords::ViewportSize;

/// One triangle corner: pixel-space position plus straight RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The geometry drawn every frame.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new([250.0, -200.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([-250.0, -200.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([0.0, 200.0], [0.0, 0.0, 1.0, 1.0]),
];

/// GPU layout of the viewport size.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct ViewportUniform {
    pub size: [u32; 2],
    pub _pad: [u32; 2], // 16-byte alignment
}

impl ViewportUniform {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width, height],
            _pad: [0; 2],
        }
    }

    /// Snapshot of a shared viewport.
    #[inline]
    pub fn snapshot(viewport: &ViewportSize) -> Self {
        let (w, h) = viewport.load();
        Self::new(w, h)
    }
}
