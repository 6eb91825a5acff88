// src/compile/mod.rs

//! Compiler invocation layer.
//!
//! - [`command`] turns a compile request into a `glslc` / `glslangValidator`
//!   command line and runs it with `tokio::process::Command`.
//! - [`backend`] provides the `CompilerBackend` trait and the concrete
//!   `ProcessCompiler` the scheduler uses in production.

use std::fmt;

pub mod backend;
pub mod command;

pub use backend::{CompilerBackend, ProcessCompiler};
pub use command::{CompileCommand, run_compile_command};

/// What happened to a compiler process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Success,
    /// Exited unsuccessfully; `None` when killed by a signal.
    Failed(Option<i32>),
    /// The executable could not be started (missing, not executable, ...).
    SpawnFailed(String),
    TimedOut,
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success)
    }
}

impl fmt::Display for CompileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileOutcome::Success => f.write_str("success"),
            CompileOutcome::Failed(Some(code)) => write!(f, "exited with code {code}"),
            CompileOutcome::Failed(None) => f.write_str("terminated by signal"),
            CompileOutcome::SpawnFailed(reason) => write!(f, "could not start compiler: {reason}"),
            CompileOutcome::TimedOut => f.write_str("timed out"),
        }
    }
}
