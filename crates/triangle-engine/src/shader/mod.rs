//! Shader library loading.
//!
//! The renderer's shaders live in one WGSL library. The default library is
//! compiled into the binary; a library can also be read from disk. Either way it
//! is parsed and validated with naga before the GPU sees it, and entry points are
//! looked up by name.

mod library;

pub use library::{BUNDLED_LIBRARY, ShaderFunction, ShaderLibrary, ShaderStage};
