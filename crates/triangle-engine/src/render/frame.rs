use std::ops::Range;
use std::sync::Arc;

use winit::window::Window;

use crate::coords::ViewportSize;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::paint::Color;

use super::pipeline::TrianglePipeline;
use super::vertex::{TRIANGLE_VERTICES, Vertex, ViewportUniform};

/// Everything one frame hands to the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPacket {
    pub vertices: [Vertex; 3],
    pub viewport: ViewportUniform,
    pub vertex_range: Range<u32>,
}

/// Destination for encoded frames.
///
/// `acquire` returns `None` when no render target is available; the frame is then
/// skipped without error.
pub trait FrameSink {
    type Target;

    fn acquire(&mut self) -> Option<Self::Target>;

    /// Encodes `packet` into `target`, presents and submits.
    fn submit(&mut self, target: Self::Target, packet: &DrawPacket);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Submitted,
    Skipped,
}

/// Frame counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub submitted: u64,
    pub skipped: u64,
}

/// Builds and submits the per-frame draw.
///
/// Holds the only mutable per-frame state: the viewport size, shared with whoever
/// handles resize notifications.
#[derive(Debug)]
pub struct FrameRenderer {
    viewport: Arc<ViewportSize>,
    stats: FrameStats,
}

impl FrameRenderer {
    pub fn new(viewport: Arc<ViewportSize>) -> Self {
        Self {
            viewport,
            stats: FrameStats::default(),
        }
    }

    /// Shared handle to the viewport size.
    pub fn viewport(&self) -> &Arc<ViewportSize> {
        &self.viewport
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Records a new drawable size. Nothing else changes.
    pub fn resize(&self, width: u32, height: u32) {
        self.viewport.store(width, height);
    }

    /// The packet the next frame would submit.
    pub fn packet(&self) -> DrawPacket {
        DrawPacket {
            vertices: TRIANGLE_VERTICES,
            viewport: ViewportUniform::snapshot(&self.viewport),
            vertex_range: 0..TRIANGLE_VERTICES.len() as u32,
        }
    }

    /// Renders one frame into `sink`.
    pub fn draw<S: FrameSink>(&mut self, sink: &mut S) -> FrameOutcome {
        let Some(target) = sink.acquire() else {
            self.stats.skipped += 1;
            return FrameOutcome::Skipped;
        };

        let packet = self.packet();
        sink.submit(target, &packet);

        self.stats.submitted += 1;
        FrameOutcome::Submitted
    }
}

/// [`FrameSink`] over the window surface.
pub struct SurfaceSink<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    pipeline: &'a TrianglePipeline,
    window: &'a Window,
    clear: Color,
}

impl<'a, 'w> SurfaceSink<'a, 'w> {
    pub fn new(
        gpu: &'a mut Gpu<'w>,
        pipeline: &'a TrianglePipeline,
        window: &'a Window,
        clear: Color,
    ) -> Self {
        Self {
            gpu,
            pipeline,
            window,
            clear,
        }
    }
}

impl FrameSink for SurfaceSink<'_, '_> {
    type Target = GpuFrame;

    fn acquire(&mut self) -> Option<GpuFrame> {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return None;
        }

        match self.gpu.begin_frame() {
            Ok(frame) => Some(frame),
            Err(err) => {
                let reason = err.to_string();
                match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => {
                        log::debug!("surface reconfigured, skipping frame: {reason}")
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::warn!("no drawable, skipping frame: {reason}")
                    }
                }
                None
            }
        }
    }

    fn submit(&mut self, mut target: GpuFrame, packet: &DrawPacket) {
        self.pipeline.encode(
            self.gpu.queue(),
            &mut target.encoder,
            &target.view,
            packet,
            self.clear,
        );

        self.window.pre_present_notify();
        self.gpu.submit(target);
    }
}
