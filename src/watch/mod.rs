// src/watch/mod.rs

//! Polling change detection.
//!
//! This module is responsible for:
//! - Listing the shader directory and filtering by configured extensions.
//! - Remembering the last seen modification time of each shader.
//! - Deciding, once per cycle, which shaders need (re)compiling.
//!
//! It does **not** run compilers or sleep; the engine drives it.

pub mod scan;
pub mod state;

pub use scan::{
    observe_directory, CompileReason, CompileRequest, ObservedFile, ScanReport, WatchCore,
};
pub use state::{whole_seconds, WatchEntry, WatchState, CHANGE_THRESHOLD_SECS};
