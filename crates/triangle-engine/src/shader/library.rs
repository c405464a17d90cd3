use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Label of the library compiled into the binary.
pub const BUNDLED_LIBRARY: &str = "default";

const BUNDLED_SOURCE: &str = include_str!("default.wgsl");

/// Pipeline stage an entry point runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn matches(self, stage: naga::ShaderStage) -> bool {
        matches!(
            (self, stage),
            (ShaderStage::Vertex, naga::ShaderStage::Vertex)
                | (ShaderStage::Fragment, naga::ShaderStage::Fragment)
        )
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A named entry point resolved from a [`ShaderLibrary`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderFunction<'a> {
    pub name: &'a str,
    pub stage: ShaderStage,
}

/// A WGSL library that has been parsed and validated on the CPU.
///
/// Validation happens once at load time so a broken or incomplete library is
/// reported as an error with naga's diagnostic, before any GPU object exists.
pub struct ShaderLibrary {
    label: String,
    source: Cow<'static, str>,
    module: naga::Module,
}

impl fmt::Debug for ShaderLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderLibrary")
            .field("label", &self.label)
            .field("entry_points", &self.module.entry_points.len())
            .finish()
    }
}

impl ShaderLibrary {
    /// Loads the library shipped inside the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_source(BUNDLED_LIBRARY, Cow::Borrowed(BUNDLED_SOURCE))
    }

    /// Reads and validates a WGSL library from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader library {}", path.display()))?;

        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::from_source(label, Cow::Owned(source))
    }

    /// Parses and validates WGSL source.
    pub fn from_source(
        label: impl Into<String>,
        source: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let label = label.into();
        let source = source.into();

        let module = naga::front::wgsl::parse_str(&source).map_err(|e| {
            anyhow::anyhow!(
                "shader library `{label}` failed to parse:\n{}",
                e.emit_to_string(&source)
            )
        })?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator
            .validate(&module)
            .map_err(|e| anyhow::anyhow!("shader library `{label}` failed validation: {e}"))?;

        log::debug!(
            "loaded shader library `{label}` ({} entry points)",
            module.entry_points.len()
        );

        Ok(Self {
            label,
            source,
            module,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolves the entry point `name`, which must run in `stage`.
    pub fn function(&self, name: &str, stage: ShaderStage) -> Result<ShaderFunction<'_>> {
        let ep = self
            .module
            .entry_points
            .iter()
            .find(|ep| ep.name == name)
            .with_context(|| {
                format!("shader library `{}` has no function `{name}`", self.label)
            })?;

        anyhow::ensure!(
            stage.matches(ep.stage),
            "function `{name}` in shader library `{}` is a {:?} entry point, expected {stage}",
            self.label,
            ep.stage
        );

        Ok(ShaderFunction {
            name: ep.name.as_str(),
            stage,
        })
    }

    /// Names of all entry points, in declaration order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.module.entry_points.iter().map(|ep| ep.name.as_str())
    }

    /// Returns `true` if a uniform buffer is declared at `@group(group) @binding(binding)`.
    pub fn has_uniform(&self, group: u32, binding: u32) -> bool {
        self.module.global_variables.iter().any(|(_, var)| {
            var.space == naga::AddressSpace::Uniform
                && var
                    .binding
                    .as_ref()
                    .is_some_and(|b| b.group == group && b.binding == binding)
        })
    }

    /// Creates the GPU shader module from the validated source.
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(self.source.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
@vertex
fn vs() -> @builtin(position) vec4<f32> {
    return vec4<f32>(0.0, 0.0, 0.0, 1.0);
}
"#;

    #[test]
    fn bundled_library_loads() {
        let lib = ShaderLibrary::bundled().unwrap();
        assert_eq!(lib.label(), BUNDLED_LIBRARY);
    }

    #[test]
    fn bundled_library_exposes_both_stages() {
        let lib = ShaderLibrary::bundled().unwrap();

        let vs = lib.function("vertex_main", ShaderStage::Vertex).unwrap();
        assert_eq!(vs.name, "vertex_main");
        assert_eq!(vs.stage, ShaderStage::Vertex);

        let fs = lib.function("fragment_main", ShaderStage::Fragment).unwrap();
        assert_eq!(fs.name, "fragment_main");

        let names: Vec<&str> = lib.function_names().collect();
        assert_eq!(names, ["vertex_main", "fragment_main"]);
    }

    #[test]
    fn bundled_library_declares_viewport_uniform_at_binding_1() {
        let lib = ShaderLibrary::bundled().unwrap();
        assert!(lib.has_uniform(0, 1));
        assert!(!lib.has_uniform(0, 0));
    }

    #[test]
    fn missing_function_is_an_error() {
        let lib = ShaderLibrary::bundled().unwrap();
        let err = lib.function("vertexShader", ShaderStage::Vertex).unwrap_err();
        assert!(err.to_string().contains("vertexShader"), "{err}");
    }

    #[test]
    fn wrong_stage_is_an_error() {
        let lib = ShaderLibrary::bundled().unwrap();
        assert!(lib.function("vertex_main", ShaderStage::Fragment).is_err());
        assert!(lib.function("fragment_main", ShaderStage::Vertex).is_err());
    }

    #[test]
    fn parse_error_is_reported_with_label() {
        let err = ShaderLibrary::from_source("broken", "fn {").unwrap_err();
        assert!(err.to_string().contains("`broken` failed to parse"), "{err}");
    }

    #[test]
    fn validation_error_is_reported() {
        // Returns a vec3 where vec4 is declared.
        let src = r#"
@vertex
fn vs() -> @builtin(position) vec4<f32> {
    return vec3<f32>(0.0, 0.0, 0.0);
}
"#;
        assert!(ShaderLibrary::from_source("bad-return", src).is_err());
    }

    #[test]
    fn custom_source_without_uniform() {
        let lib = ShaderLibrary::from_source("minimal", MINIMAL).unwrap();
        assert!(lib.function("vs", ShaderStage::Vertex).is_ok());
        assert!(!lib.has_uniform(0, 1));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = ShaderLibrary::load("/nonexistent/dir/default.wgsl").unwrap_err();
        assert!(err.to_string().contains("failed to read shader library"), "{err}");
    }

    #[test]
    fn load_from_file_uses_stem_as_label() {
        let path = std::env::temp_dir().join(format!("triangle-lib-{}.wgsl", std::process::id()));
        std::fs::write(&path, MINIMAL).unwrap();

        let lib = ShaderLibrary::load(&path);
        std::fs::remove_file(&path).unwrap();

        let lib = lib.unwrap();
        assert!(lib.label().starts_with("triangle-lib-"));
        assert!(lib.function("vs", ShaderStage::Vertex).is_ok());
    }
}
