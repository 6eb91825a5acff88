// src/config/loader.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::value::{Error as ValueError, MapDeserializer};
use tracing::debug;

use crate::config::model::{Config, RawConfig};
use crate::errors::{Result, ShaderwatchError};

/// Split config text into key/value pairs.
///
/// - Lines starting with `#` are comments; blank lines are skipped.
/// - Everything before the first `=` is the key, everything after is the
///   value, verbatim (no escaping or trimming).
/// - A line without `=` becomes a key with an empty value.
/// - Later occurrences of a key override earlier ones.
pub fn parse_key_values(contents: &str) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();

    for line in contents.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key, value),
            None => (line, ""),
        };
        pairs.insert(key.to_string(), value.to_string());
    }

    pairs
}

/// Parse config text into a [`RawConfig`]. Unknown keys are ignored.
pub fn parse_raw_config(contents: &str) -> Result<RawConfig> {
    let pairs = parse_key_values(contents);

    for key in pairs.keys() {
        if !is_known_key(key) {
            debug!(key = %key, "ignoring unknown config key");
        }
    }

    let de: MapDeserializer<'_, _, ValueError> = MapDeserializer::new(pairs.into_iter());
    RawConfig::deserialize(de).map_err(|e| ShaderwatchError::ConfigError(e.to_string()))
}

/// Load a configuration file from a given path and return the raw `RawConfig`.
///
/// This only splits the file into keys; it does **not** resolve paths or
/// interpret flags. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ShaderwatchError::ConfigOpen {
        path: path.to_path_buf(),
        source,
    })?;

    parse_raw_config(&contents)
}

/// Load a configuration file from path and turn it into a [`Config`].
///
/// Relative paths inside the file resolve against the current working
/// directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config> {
    let raw_config = load_from_path(&path)?;
    let config = Config::try_from(raw_config)?;
    Ok(config)
}

fn is_known_key(key: &str) -> bool {
    matches!(
        key,
        "compile_on_startup"
            | "use_google_spirv"
            | "glsl_lang_validator_path"
            | "glsl_c_path"
            | "shader_source_path"
            | "spirv_output_path"
            | "spirv_ext"
            | "vs_ext"
            | "fs_ext"
            | "gs_ext"
            | "cs_ext"
            | "compile_timeout_secs"
    )
}
