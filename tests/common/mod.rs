#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use shaderwatch::config::Config;
use shaderwatch::engine::{Scheduler, WatchContext};
use shaderwatch::fs::mock::MockFileSystem;
use shaderwatch::watch::ObservedFile;
use shaderwatch_test_utils::fake_compiler::FakeCompiler;

pub use shaderwatch_test_utils::{at_secs, base_time, init_tracing, with_timeout};

/// Build an `ObservedFile` for `path`, splitting stem and extension the same
/// way directory observation does.
pub fn observed(path: &str, modified: SystemTime) -> ObservedFile {
    let path = PathBuf::from(path);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    ObservedFile {
        path,
        stem,
        extension,
        modified,
    }
}

/// Everything a scheduler test needs, wired to a mock filesystem and a
/// recording compiler.
pub struct Harness {
    pub fs: MockFileSystem,
    pub compiler: FakeCompiler,
    pub context: Arc<WatchContext>,
    pub scheduler: Scheduler<FakeCompiler>,
}

impl Harness {
    pub fn new(cfg: &Config) -> Self {
        let fs = MockFileSystem::new();
        fs.add_dir(&cfg.watch_path);

        let compiler = FakeCompiler::new();
        let context = Arc::new(WatchContext::new());
        let scheduler = Scheduler::new(
            cfg,
            Arc::new(fs.clone()),
            compiler.clone(),
            Arc::clone(&context),
        );

        Self {
            fs,
            compiler,
            context,
            scheduler,
        }
    }

    pub fn add_shader(&self, dir: &Path, name: &str, modified: SystemTime) -> PathBuf {
        let path = dir.join(name);
        self.fs.add_file(&path, modified);
        path
    }
}
