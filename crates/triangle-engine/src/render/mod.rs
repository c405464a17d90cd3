//! Triangle rendering.
//!
//! One pipeline, one fixed vertex array, one draw call per frame.
//!
//! Convention:
//! - vertex positions are in pixels, origin at the drawable's center, +Y up
//! - the vertex shader converts to NDC using the viewport uniform
//!
//! Host/shader binding contract:
//! - vertex buffer slot [`VERTEX_BUFFER_SLOT`] holds the three vertices
//! - `@group(VIEWPORT_GROUP) @binding(VIEWPORT_BINDING)` holds the viewport size

mod frame;
mod pipeline;
mod vertex;

pub use frame::{DrawPacket, FrameOutcome, FrameRenderer, FrameSink, FrameStats, SurfaceSink};
pub use pipeline::{PipelineConfig, TrianglePipeline};
pub use vertex::{TRIANGLE_VERTICES, Vertex, ViewportUniform};

/// Vertex buffer slot carrying [`TRIANGLE_VERTICES`].
pub const VERTEX_BUFFER_SLOT: u32 = 0;

/// Bind group index of the viewport uniform.
pub const VIEWPORT_GROUP: u32 = 0;

/// Binding index of the viewport uniform within [`VIEWPORT_GROUP`].
pub const VIEWPORT_BINDING: u32 = 1;
