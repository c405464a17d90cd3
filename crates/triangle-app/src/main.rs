mod app;

use anyhow::Result;

use triangle_engine::device::GpuInit;
use triangle_engine::logging::{LoggingConfig, init_logging};
use triangle_engine::window::{Runtime, RuntimeConfig};

use crate::app::TriangleApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = TriangleApp::new();

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}
