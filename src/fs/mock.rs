// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { modified: SystemTime },
    Dir(Vec<String>), // List of child names
}

/// In-memory filesystem with controllable modification times.
///
/// Clones share state, so a test can keep a handle and mutate files while
/// the scheduler owns another clone.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    failing_dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
            failing_dirs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Create (or overwrite) a file with the given modification time.
    pub fn add_file(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let path = path.as_ref().to_path_buf();
        let mut files = self.files.lock().unwrap();
        files.insert(path.clone(), MockEntry::File { modified });

        if let Some(parent) = path.parent() {
            let parent = normalize_parent(parent);
            self.ensure_dir_entry(&mut files, parent);
            add_child(&mut files, parent, &path);
        }
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        self.ensure_dir_entry(&mut files, path.as_ref());
    }

    /// Set the modification time of an existing file.
    pub fn set_modified(&self, path: impl AsRef<Path>, modified: SystemTime) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        match files.get_mut(path.as_ref()) {
            Some(MockEntry::File { modified: m }) => {
                *m = modified;
                Ok(())
            }
            _ => Err(anyhow!("File not found: {:?}", path.as_ref())),
        }
    }

    /// Move a file's modification time forward by `by`.
    pub fn touch(&self, path: impl AsRef<Path>, by: Duration) -> Result<()> {
        let current = self.modified(path.as_ref())?;
        self.set_modified(path, current + by)
    }

    /// Delete a file and unlink it from its parent directory.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut files = self.files.lock().unwrap();
        files.remove(path);

        if let Some(parent) = path.parent() {
            let parent = normalize_parent(parent);
            if let (Some(MockEntry::Dir(children)), Some(name)) =
                (files.get_mut(parent), path.file_name().and_then(|n| n.to_str()))
            {
                children.retain(|c| c != name);
            }
        }
    }

    /// Make `read_dir` on `path` fail until cleared.
    pub fn set_read_dir_failure(&self, path: impl AsRef<Path>, fail: bool) {
        let mut failing = self.failing_dirs.lock().unwrap();
        if fail {
            failing.insert(path.as_ref().to_path_buf());
        } else {
            failing.remove(path.as_ref());
        }
    }

    fn ensure_dir_entry(&self, files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if !files.contains_key(path) {
            files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
            if let Some(parent) = path.parent() {
                let parent = normalize_parent(parent);

                if parent != path { // Avoid infinite loop at root
                    self.ensure_dir_entry(files, parent);
                    add_child(files, parent, path);
                }
            }
        }
    }
}

fn normalize_parent(parent: &Path) -> &Path {
    if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    }
}

fn add_child(files: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
    if let Some(MockEntry::Dir(children)) = files.get_mut(parent) {
        if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::File { .. }))
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::File { modified }) => Ok(*modified),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        if let Some(MockEntry::File { .. }) = files.get(path) {
            return Err(anyhow!("Is a file: {:?}", path));
        }
        self.ensure_dir_entry(&mut files, path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if self.failing_dirs.lock().unwrap().contains(path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }

        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
