//! Coordinate types shared between the runtime and the renderer.
//!
//! Triangle geometry lives in pixel space centered on the drawable:
//! - origin at the center
//! - +X right, +Y up
//!
//! The vertex shader converts to NDC by dividing by half the viewport size.

mod viewport;

pub use viewport::ViewportSize;
