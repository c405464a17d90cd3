use std::sync::Arc;

use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use triangle_engine::coords::ViewportSize;
use triangle_engine::core::{App, AppControl, FrameCtx};
use triangle_engine::device::Gpu;
use triangle_engine::paint::Color;
use triangle_engine::render::{
    FrameOutcome, FrameRenderer, FrameStats, PipelineConfig, SurfaceSink, TrianglePipeline,
};
use triangle_engine::shader::ShaderLibrary;

/// Application context: the one pipeline and the one frame renderer.
///
/// The pipeline is absent only between construction and `on_gpu_ready`; if building
/// it fails, the runtime stops before any frame is requested.
pub struct TriangleApp {
    pipeline_config: PipelineConfig,
    clear: Color,

    pipeline: Option<TrianglePipeline>,
    renderer: FrameRenderer,
}

impl TriangleApp {
    pub fn new() -> Self {
        Self {
            pipeline_config: PipelineConfig::default(),
            clear: Color::BACKDROP,
            pipeline: None,
            renderer: FrameRenderer::new(Arc::new(ViewportSize::default())),
        }
    }
}

impl Default for TriangleApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for TriangleApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let library = ShaderLibrary::bundled()?;
        let pipeline = TrianglePipeline::new(
            gpu.device(),
            gpu.surface_format(),
            &library,
            &self.pipeline_config,
        )?;
        self.pipeline = Some(pipeline);

        let size = gpu.size();
        self.renderer.resize(size.width, size.height);

        Ok(())
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.renderer.resize(size.width, size.height);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return AppControl::Continue;
        };

        let mut sink = SurfaceSink::new(ctx.gpu, pipeline, ctx.window, self.clear);

        let outcome = self.renderer.draw(&mut sink);
        if is_first_submission(outcome, self.renderer.stats()) {
            let (w, h) = self.renderer.viewport().load();
            log::info!("first frame submitted at {w}x{h}");
        }

        AppControl::Continue
    }
}

/// `true` for the frame that made the first submission; skipped frames never count.
fn is_first_submission(outcome: FrameOutcome, stats: FrameStats) -> bool {
    outcome == FrameOutcome::Submitted && stats.submitted == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use triangle_engine::render::{DrawPacket, FrameSink};

    struct ScriptedSink(Vec<bool>);

    impl FrameSink for ScriptedSink {
        type Target = ();

        fn acquire(&mut self) -> Option<()> {
            self.0.pop().filter(|available| *available).map(|_| ())
        }

        fn submit(&mut self, _target: (), _packet: &DrawPacket) {}
    }

    #[test]
    fn skipped_opening_frames_are_not_the_first_submission() {
        let mut renderer = FrameRenderer::new(Arc::new(ViewportSize::new(800, 600)));
        // Popped from the back: skip, skip, submit, submit.
        let mut sink = ScriptedSink(vec![true, true, false, false]);

        let firsts: Vec<bool> = (0..4)
            .map(|_| {
                let outcome = renderer.draw(&mut sink);
                is_first_submission(outcome, renderer.stats())
            })
            .collect();

        assert_eq!(firsts, [false, false, true, false]);
    }
}
