#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use shaderwatch::config::Config;
use shaderwatch::types::{CompilerChoice, ShaderStage};

/// Builder for `Config` to simplify test setup.
///
/// Defaults: watch `/shaders`, output `/spirv`, glslangValidator, `.spv`
/// output, no stage extensions, `compile_on_startup = false`.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config {
                watch_path: PathBuf::from("/shaders"),
                output_path: PathBuf::from("/spirv"),
                compiler: CompilerChoice::GlslangValidator,
                glslang_validator_path: "glslangValidator".to_string(),
                glslc_path: "glslc".to_string(),
                stage_extensions: BTreeMap::new(),
                output_extension: ".spv".to_string(),
                compile_on_startup: false,
                compile_timeout: None,
            },
        }
    }

    pub fn watch_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.watch_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn stage(mut self, stage: ShaderStage, ext: &str) -> Self {
        self.config.stage_extensions.insert(stage, ext.to_string());
        self
    }

    /// `.vert` / `.frag` / `.geom` / `.comp`.
    pub fn default_stages(self) -> Self {
        self.stage(ShaderStage::Vertex, ".vert")
            .stage(ShaderStage::Fragment, ".frag")
            .stage(ShaderStage::Geometry, ".geom")
            .stage(ShaderStage::Compute, ".comp")
    }

    pub fn compiler(mut self, compiler: CompilerChoice) -> Self {
        self.config.compiler = compiler;
        self
    }

    pub fn glslang_validator_path(mut self, path: &str) -> Self {
        self.config.glslang_validator_path = path.to_string();
        self
    }

    pub fn glslc_path(mut self, path: &str) -> Self {
        self.config.glslc_path = path.to_string();
        self
    }

    pub fn output_extension(mut self, ext: &str) -> Self {
        self.config.output_extension = ext.to_string();
        self
    }

    pub fn compile_on_startup(mut self, val: bool) -> Self {
        self.config.compile_on_startup = val;
        self
    }

    pub fn compile_timeout(mut self, limit: Duration) -> Self {
        self.config.compile_timeout = Some(limit);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
