// src/engine/scheduler.rs

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::compile::{CompileOutcome, CompilerBackend};
use crate::config::Config;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::{observe_directory, CompileReason, CompileRequest, ScanReport, WatchCore};

use super::context::WatchContext;

/// Default pause between two scan cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Callback receiving the outcome of every compile.
pub type ResultHook = Box<dyn FnMut(&CompileRequest, &CompileOutcome) + Send>;

/// Polls the shader directory on a fixed interval and feeds compile
/// requests to a `CompilerBackend`.
///
/// This is the IO shell around [`WatchCore`]: it lists the directory,
/// consumes the force-recompile flag, hands the observation to the core and
/// runs the compiles the core asks for, one at a time.
pub struct Scheduler<C: CompilerBackend> {
    core: WatchCore,
    fs: Arc<dyn FileSystem>,
    watch_path: PathBuf,
    extensions: BTreeSet<String>,
    compiler: C,
    context: Arc<WatchContext>,
    interval: Duration,
    result_hook: Option<ResultHook>,
}

impl<C: CompilerBackend> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("core", &self.core)
            .field("watch_path", &self.watch_path)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl<C: CompilerBackend> Scheduler<C> {
    pub fn new(
        config: &Config,
        fs: Arc<dyn FileSystem>,
        compiler: C,
        context: Arc<WatchContext>,
    ) -> Self {
        Self {
            core: WatchCore::new(config.compile_on_startup),
            fs,
            watch_path: config.watch_path.clone(),
            extensions: config.recognized_extensions(),
            compiler,
            context,
            interval: DEFAULT_INTERVAL,
            result_hook: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Observe every compile outcome, e.g. to surface build failures.
    pub fn with_result_hook(
        mut self,
        hook: impl FnMut(&CompileRequest, &CompileOutcome) + Send + 'static,
    ) -> Self {
        self.result_hook = Some(Box::new(hook));
        self
    }

    pub fn core(&self) -> &WatchCore {
        &self.core
    }

    /// Run a single scan cycle.
    ///
    /// If the directory cannot be listed the cycle is abandoned before any
    /// state changes: the first-cycle marker and a pending recompile request
    /// both survive for the next attempt.
    pub async fn tick(&mut self) -> Result<ScanReport> {
        let observed = observe_directory(self.fs.as_ref(), &self.watch_path, &self.extensions)?;
        let force = self.context.take_recompile_request();

        let report = self.core.step(observed, force);
        debug!(
            requests = report.requests.len(),
            first_cycle = report.first_cycle,
            forced = report.forced,
            tracked = self.core.state().len(),
            "scan cycle complete"
        );

        for request in &report.requests {
            let name = request.file_name();
            match request.reason {
                CompileReason::New => info!("newly recognized file {name}, compiling"),
                CompileReason::Modified => info!("file {name} is modified, recompiling"),
                CompileReason::Forced => info!("recompiling {name}"),
            }

            let outcome = self.compiler.compile(request.clone()).await;
            if outcome.is_success() {
                debug!(file = %name, "compiled");
            } else {
                warn!(file = %name, outcome = %outcome, "compile failed");
            }

            if let Some(hook) = self.result_hook.as_mut() {
                hook(request, &outcome);
            }
        }

        Ok(report)
    }

    /// Main polling loop.
    ///
    /// Checks the stop flag at the top of every tick, so shutdown takes at
    /// most one interval plus any compile already running. Failed cycles are
    /// logged and retried on the next tick.
    pub async fn run(mut self) -> Result<()> {
        info!(
            path = ?self.watch_path,
            interval_ms = self.interval.as_millis() as u64,
            "shader watcher started"
        );

        loop {
            if self.context.stop_requested() {
                break;
            }

            if let Err(e) = self.tick().await {
                warn!(error = %e, "scan cycle failed; retrying next interval");
            }

            tokio::time::sleep(self.interval).await;
        }

        info!("shader watcher stopped");
        Ok(())
    }
}
