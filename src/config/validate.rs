// src/config/validate.rs

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::config::model::{Config, RawConfig};
use crate::config::paths::{resolve_dir, resolve_program};
use crate::errors::{Result, ShaderwatchError};
use crate::types::{CompilerChoice, ShaderStage};

impl TryFrom<RawConfig> for Config {
    type Error = crate::errors::ShaderwatchError;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        let cwd = std::env::current_dir()?;
        Config::from_raw(raw, &cwd)
    }
}

impl Config {
    /// Build a `Config` from raw values, resolving relative directories
    /// and compiler paths against `base`.
    ///
    /// Missing values are never fatal: flags default to `false`, paths to
    /// `base`, and stages without an extension are simply not watched. The
    /// only hard error is an unparseable `compile_timeout_secs`.
    pub fn from_raw(raw: RawConfig, base: &Path) -> Result<Config> {
        let stage_extensions: BTreeMap<ShaderStage, String> = ShaderStage::ALL
            .into_iter()
            .filter_map(|stage| {
                let ext = raw.stage_extension(stage);
                (!ext.is_empty()).then(|| (stage, ext.to_string()))
            })
            .collect();

        Ok(Config {
            watch_path: resolve_dir(base, &raw.shader_source_path),
            output_path: resolve_dir(base, &raw.spirv_output_path),
            compiler: CompilerChoice::from_use_google_spirv(is_true(&raw.use_google_spirv)),
            glslang_validator_path: resolve_program(base, &raw.glsl_lang_validator_path),
            glslc_path: resolve_program(base, &raw.glsl_c_path),
            stage_extensions,
            output_extension: raw.spirv_ext,
            compile_on_startup: is_true(&raw.compile_on_startup),
            compile_timeout: parse_timeout(&raw.compile_timeout_secs)?,
        })
    }
}

/// Non-fatal problems worth telling the user about at startup.
pub fn config_warnings(cfg: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if cfg.stage_extensions.is_empty() {
        warnings.push(
            "no shader extensions configured (vs_ext, fs_ext, gs_ext, cs_ext); nothing will be compiled"
                .to_string(),
        );
    }

    for stage in ShaderStage::ALL {
        if let Some(ext) = cfg.stage_extensions.get(&stage) {
            if !ext.starts_with('.') {
                warnings.push(format!(
                    "{} = {:?} has no leading '.'; it will never match a file extension",
                    stage.config_key(),
                    ext
                ));
            }
        }
    }

    if cfg.compiler_path().is_empty() {
        let key = match cfg.compiler {
            CompilerChoice::GlslangValidator => "glsl_lang_validator_path",
            CompilerChoice::Glslc => "glsl_c_path",
        };
        warnings.push(format!(
            "{key} is empty but {} is the selected compiler; compiles will fail",
            cfg.compiler
        ));
    }

    if cfg.output_extension.is_empty() {
        warnings.push(
            "spirv_ext is empty; compiled files will share the source file name".to_string(),
        );
    }

    warnings
}

fn is_true(value: &str) -> bool {
    value == "true"
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        Err(_) => Err(ShaderwatchError::ConfigError(format!(
            "compile_timeout_secs must be a whole number of seconds (got {raw:?})"
        ))),
    }
}
