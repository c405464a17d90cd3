//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and the
//! application: one-time GPU setup, window events, and a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
