// src/watch/scan.rs

//! One pass over the shader directory.
//!
//! The pass is split in two:
//! - [`observe_directory`] does the IO: list `watch_path` through a
//!   [`FileSystem`] and read modification times of recognized files.
//! - [`WatchCore::step`] is pure: it compares the observation against the
//!   [`WatchState`] and decides what to compile.
//!
//! The core never touches the filesystem or spawns processes, so the
//! first-cycle, debounce and force-recompile rules can be tested directly.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;
use tracing::{debug, trace};

use crate::fs::FileSystem;
use crate::watch::state::WatchState;

/// A recognized shader source seen during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedFile {
    pub path: PathBuf,
    /// File name without its last extension (`basic` for `basic.vert`).
    pub stem: String,
    /// Last extension including the dot (`.vert`).
    pub extension: String,
    pub modified: SystemTime,
}

/// Why a compile was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileReason {
    /// First time this file was seen.
    New,
    /// Modification time moved past the debounce threshold.
    Modified,
    /// A manual recompile was pending.
    Forced,
}

/// A single file the scheduler should hand to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub path: PathBuf,
    pub stem: String,
    pub extension: String,
    pub reason: CompileReason,
}

impl CompileRequest {
    fn from_observed(file: &ObservedFile, reason: CompileReason) -> Self {
        Self {
            path: file.path.clone(),
            stem: file.stem.clone(),
            extension: file.extension.clone(),
            reason,
        }
    }

    /// Source file name as passed to the compiler (`basic.vert`).
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }
}

/// Outcome of one [`WatchCore::step`].
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Files to compile, sorted by path.
    pub requests: Vec<CompileRequest>,
    /// This was the first completed cycle since startup.
    pub first_cycle: bool,
    /// A force-recompile request was consumed by this cycle.
    pub forced: bool,
    /// New files added to the state without being compiled.
    pub registered_only: usize,
    /// Entries dropped because their file disappeared.
    pub evicted: usize,
}

/// List `root` (non-recursively) and return every regular file whose
/// extension is in `extensions`, sorted by path.
///
/// Any listing or metadata error aborts the whole observation so the caller
/// can retry the cycle later.
pub fn observe_directory(
    fs: &dyn FileSystem,
    root: &Path,
    extensions: &BTreeSet<String>,
) -> Result<Vec<ObservedFile>> {
    let mut observed = Vec::new();

    for path in fs.read_dir(root)? {
        if !fs.is_file(&path) {
            continue;
        }

        let Some(extension) = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
        else {
            continue;
        };

        if !extensions.contains(&extension) {
            trace!(?path, "skipping file with unrecognized extension");
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let modified = fs.modified(&path)?;

        observed.push(ObservedFile {
            path,
            stem,
            extension,
            modified,
        });
    }

    observed.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(observed)
}

/// Pure watch state machine.
///
/// Owns the [`WatchState`] and the first-cycle marker. Has no IO, no
/// channels and no clock.
#[derive(Debug)]
pub struct WatchCore {
    state: WatchState,
    first_cycle: bool,
    compile_on_startup: bool,
}

impl WatchCore {
    pub fn new(compile_on_startup: bool) -> Self {
        Self {
            state: WatchState::new(),
            first_cycle: true,
            compile_on_startup,
        }
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    /// True until the first `step` completes.
    pub fn is_first_cycle(&self) -> bool {
        self.first_cycle
    }

    /// Compare an observation with the stored state and decide what to
    /// compile.
    ///
    /// - Tracked files compile when their time moved more than the threshold
    ///   or when `force` is set; the stored time is then overwritten.
    /// - Untracked files are recorded and compile unless this is the first
    ///   cycle and `compile_on_startup` is off.
    /// - Tracked files missing from the observation are evicted.
    ///
    /// Afterwards the first-cycle marker is cleared for good.
    pub fn step(&mut self, observed: Vec<ObservedFile>, force: bool) -> ScanReport {
        let mut report = ScanReport {
            first_cycle: self.first_cycle,
            forced: force,
            ..ScanReport::default()
        };

        for file in &observed {
            match self.state.get(&file.path) {
                Some(entry) => {
                    let outdated = entry.is_outdated_by(file.modified);
                    if outdated || force {
                        let reason = if outdated {
                            CompileReason::Modified
                        } else {
                            CompileReason::Forced
                        };
                        self.state.record(&file.path, file.modified);
                        report
                            .requests
                            .push(CompileRequest::from_observed(file, reason));
                    }
                }
                None => {
                    self.state.record(&file.path, file.modified);
                    if !self.first_cycle || self.compile_on_startup {
                        report
                            .requests
                            .push(CompileRequest::from_observed(file, CompileReason::New));
                    } else {
                        debug!(path = ?file.path, "registered shader without compiling (startup)");
                        report.registered_only += 1;
                    }
                }
            }
        }

        let present: HashSet<&Path> = observed.iter().map(|f| f.path.as_path()).collect();
        report.evicted = self.state.retain_present(&present);
        if report.evicted > 0 {
            debug!(evicted = report.evicted, "dropped state for removed shaders");
        }

        self.first_cycle = false;
        report
    }
}
