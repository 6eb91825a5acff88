// src/engine/context.rs

use std::sync::atomic::{AtomicBool, Ordering};

/// Flags shared between the scheduler and the command channel.
///
/// The command channel (or Ctrl-C handler) only sets flags; the scheduler
/// reads `stop` and consumes `force_recompile`. The two flags are
/// independent, so plain atomics are enough.
#[derive(Debug, Default)]
pub struct WatchContext {
    stop: AtomicBool,
    force_recompile: AtomicBool,
}

impl WatchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the scheduler to exit at the start of its next tick.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Ask the next completed cycle to recompile every tracked shader.
    pub fn request_recompile(&self) {
        self.force_recompile.store(true, Ordering::Release);
    }

    pub fn recompile_requested(&self) -> bool {
        self.force_recompile.load(Ordering::Acquire)
    }

    /// Read and clear the recompile request in one step.
    pub fn take_recompile_request(&self) -> bool {
        self.force_recompile.swap(false, Ordering::AcqRel)
    }
}
