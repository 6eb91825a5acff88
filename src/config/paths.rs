// src/config/paths.rs

//! Resolution of user-supplied directory strings.

use std::path::{Path, PathBuf};

/// Whether a configured path string should be used as-is.
///
/// Paths starting with `/` or `\`, or with a drive letter (`C:`), count as
/// absolute on every platform so one config file works everywhere.
pub fn is_absolute_like(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    match bytes.first() {
        Some(b'/') | Some(b'\\') => true,
        Some(_) => bytes.get(1) == Some(&b':'),
        None => false,
    }
}

/// Resolve a configured directory against `base` unless it is absolute.
///
/// An empty string resolves to `base` itself.
pub fn resolve_dir(base: &Path, raw: &str) -> PathBuf {
    if raw.is_empty() {
        base.to_path_buf()
    } else if is_absolute_like(raw) {
        PathBuf::from(raw)
    } else {
        base.join(raw)
    }
}

/// Resolve a configured compiler path against `base`.
///
/// Bare program names (`glslc`) are left for `PATH` lookup. Relative paths
/// with a separator are anchored to `base`, since the compiler itself runs
/// inside the shader directory.
pub fn resolve_program(base: &Path, raw: &str) -> String {
    if raw.is_empty() || is_absolute_like(raw) || !raw.contains(['/', '\\']) {
        raw.to_string()
    } else {
        base.join(raw).to_string_lossy().into_owned()
    }
}
