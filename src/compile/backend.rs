// src/compile/backend.rs

//! Pluggable compiler backend abstraction.
//!
//! The scheduler talks to a `CompilerBackend` instead of spawning processes
//! itself. This makes it easy to swap in a fake compiler in tests.
//!
//! - `ProcessCompiler` is the default implementation used by `shaderwatch`.
//!   It builds a [`CompileCommand`] from the config and runs it.
//! - Tests can provide their own `CompilerBackend` that records requests and
//!   returns a scripted outcome.

use std::future::Future;
use std::pin::Pin;

use crate::config::Config;
use crate::watch::CompileRequest;

use super::CompileOutcome;
use super::command::{CompileCommand, run_compile_command};

/// Trait abstracting how a shader gets compiled.
pub trait CompilerBackend: Send {
    /// Compile one shader and report what happened.
    ///
    /// The scheduler awaits each call before issuing the next, so an
    /// implementation never sees two requests at once.
    fn compile(
        &mut self,
        request: CompileRequest,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + '_>>;
}

/// Real compiler backend used in production.
pub struct ProcessCompiler {
    config: Config,
}

impl ProcessCompiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl CompilerBackend for ProcessCompiler {
    fn compile(
        &mut self,
        request: CompileRequest,
    ) -> Pin<Box<dyn Future<Output = CompileOutcome> + Send + '_>> {
        let command = CompileCommand::for_request(&self.config, &request);
        let limit = self.config.compile_timeout;

        Box::pin(async move { run_compile_command(&command, limit).await })
    }
}
