//! Hello-triangle engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the app binary: the window loop,
//! the GPU device and surface, the shader library and the triangle renderer.

pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;
