// src/compile/command.rs

//! Building and running a single compiler command line.

use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::Config;
use crate::watch::CompileRequest;

use super::CompileOutcome;

/// A fully resolved compiler invocation.
///
/// `Display` renders the command line the way a user would type it:
///
/// - glslc: `<glsl_c_path> basic.vert -o <output>/basic.vert.spv`
/// - glslangValidator: `<glsl_lang_validator_path> -V basic.vert -o <output>/basic.vert.spv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the compiler runs in; the source is passed relative to it.
    pub working_dir: PathBuf,
    pub output_file: PathBuf,
}

impl CompileCommand {
    pub fn for_request(cfg: &Config, request: &CompileRequest) -> Self {
        Self::for_file_name(cfg, &request.file_name())
    }

    /// Command for a source file name (`basic.vert`) inside the watch path.
    pub fn for_file_name(cfg: &Config, file_name: &str) -> Self {
        let output_file = cfg
            .output_path
            .join(format!("{file_name}{}", cfg.output_extension));

        let mut args: Vec<String> = cfg
            .compiler
            .leading_args()
            .iter()
            .map(|a| a.to_string())
            .collect();
        args.push(file_name.to_string());
        args.push("-o".to_string());
        args.push(output_file.to_string_lossy().into_owned());

        Self {
            program: cfg.compiler_path().to_string(),
            args,
            working_dir: cfg.watch_path.clone(),
            output_file,
        }
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run `command` to completion with all standard streams on the null
/// device.
///
/// With `limit = None` this waits as long as the compiler runs. On timeout
/// the child is killed.
pub async fn run_compile_command(command: &CompileCommand, limit: Option<Duration>) -> CompileOutcome {
    debug!(cmd = %command, cwd = ?command.working_dir, "spawning compiler");

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .current_dir(&command.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return CompileOutcome::SpawnFailed(e.to_string()),
    };

    let status = match limit {
        Some(limit) => {
            let waited = tokio::time::timeout(limit, child.wait()).await;
            match waited {
                Ok(status) => status,
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        warn!(cmd = %command, error = %e, "failed to kill timed out compiler");
                    }
                    return CompileOutcome::TimedOut;
                }
            }
        }
        None => child.wait().await,
    };

    match status {
        Ok(status) if status.success() => CompileOutcome::Success,
        Ok(status) => CompileOutcome::Failed(status.code()),
        Err(e) => CompileOutcome::SpawnFailed(e.to_string()),
    }
}
