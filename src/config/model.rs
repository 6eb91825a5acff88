// src/config/model.rs

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::{CompilerChoice, ShaderStage};

/// Configuration exactly as read from the key/value file.
///
/// ```ini
/// # compile everything once when the watcher starts
/// compile_on_startup=true
/// use_google_spirv=false
/// glsl_lang_validator_path=glslangValidator
/// glsl_c_path=glslc
/// shader_source_path=shaders
/// spirv_output_path=spirv
/// spirv_ext=.spv
/// vs_ext=.vert
/// fs_ext=.frag
/// gs_ext=.geom
/// cs_ext=.comp
/// ```
///
/// Every value is kept as the raw string; missing keys are empty. Turning
/// these into typed values happens in `TryFrom<RawConfig> for Config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub compile_on_startup: String,
    pub use_google_spirv: String,
    pub glsl_lang_validator_path: String,
    pub glsl_c_path: String,
    pub shader_source_path: String,
    pub spirv_output_path: String,
    pub spirv_ext: String,
    pub vs_ext: String,
    pub fs_ext: String,
    pub gs_ext: String,
    pub cs_ext: String,
    /// Upper bound for a single compiler run, in seconds. Empty = unbounded.
    pub compile_timeout_secs: String,
}

impl RawConfig {
    /// Raw extension configured for a stage.
    pub fn stage_extension(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vs_ext,
            ShaderStage::Fragment => &self.fs_ext,
            ShaderStage::Geometry => &self.gs_ext,
            ShaderStage::Compute => &self.cs_ext,
        }
    }
}

/// Validated, immutable configuration handed to the watcher.
///
/// Construct via `Config::try_from(raw)` (resolves paths against the current
/// working directory) or [`Config::from_raw`] with an explicit base dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned (non-recursively) for shader sources.
    pub watch_path: PathBuf,
    /// Directory receiving compiled SPIR-V.
    pub output_path: PathBuf,
    pub compiler: CompilerChoice,
    pub glslang_validator_path: String,
    pub glslc_path: String,
    /// Extension per stage, including the leading dot (e.g. `.vert`).
    /// Stages with an empty extension are absent.
    pub stage_extensions: BTreeMap<ShaderStage, String>,
    /// Suffix appended to the source file name for the artifact (e.g. `.spv`).
    pub output_extension: String,
    pub compile_on_startup: bool,
    pub compile_timeout: Option<Duration>,
}

impl Config {
    /// Executable for the selected compiler.
    pub fn compiler_path(&self) -> &str {
        match self.compiler {
            CompilerChoice::GlslangValidator => &self.glslang_validator_path,
            CompilerChoice::Glslc => &self.glslc_path,
        }
    }

    /// Every extension that qualifies a file for compilation.
    ///
    /// Stages sharing an extension collapse into one entry, so a file can
    /// only ever match once.
    pub fn recognized_extensions(&self) -> BTreeSet<String> {
        self.stage_extensions.values().cloned().collect()
    }
}
