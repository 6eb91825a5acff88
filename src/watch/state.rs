// src/watch/state.rs

//! Per-file memory of what the watcher has already seen.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A tracked file is recompiled once its modification time moves more than
/// this many whole seconds past the stored one.
pub const CHANGE_THRESHOLD_SECS: i64 = 1;

/// Truncate a timestamp to whole seconds since the Unix epoch.
///
/// Times before the epoch floor towards negative infinity.
pub fn whole_seconds(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => {
            let d = e.duration();
            let secs = d.as_secs() as i64;
            if d.subsec_nanos() > 0 { -secs - 1 } else { -secs }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchEntry {
    pub last_modified: SystemTime,
}

impl WatchEntry {
    pub fn new(last_modified: SystemTime) -> Self {
        Self { last_modified }
    }

    /// Whether `current` is far enough past the stored time to count as an
    /// edit. Moving backwards in time never counts.
    pub fn is_outdated_by(&self, current: SystemTime) -> bool {
        whole_seconds(current) - whole_seconds(self.last_modified) > CHANGE_THRESHOLD_SECS
    }
}

/// Map from source file path to its last recorded modification time.
///
/// Owned by a single writer (the scheduler); no interior locking.
#[derive(Debug, Default)]
pub struct WatchState {
    entries: HashMap<PathBuf, WatchEntry>,
}

impl WatchState {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, path: &Path) -> Option<&WatchEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Insert or overwrite the entry for `path`.
    pub fn record(&mut self, path: &Path, modified: SystemTime) {
        self.entries
            .insert(path.to_path_buf(), WatchEntry::new(modified));
    }

    /// Drop every entry whose path is not in `present`; returns how many
    /// were removed.
    pub fn retain_present(&mut self, present: &HashSet<&Path>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|path, _| present.contains(path.as_path()));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(|p| p.as_path())
    }
}
