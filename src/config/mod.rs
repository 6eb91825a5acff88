// src/config/mod.rs

//! Configuration loading and validation for shaderwatch.
//!
//! Responsibilities:
//! - Define the raw and validated data model (`model.rs`).
//! - Load a key/value config file from disk (`loader.rs`).
//! - Resolve configured directories (`paths.rs`).
//! - Turn raw values into a typed `Config` and collect warnings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod paths;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_key_values, parse_raw_config};
pub use model::{Config, RawConfig};
pub use validate::config_warnings;
