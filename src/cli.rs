// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `shaderwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shaderwatch",
    version,
    about = "Watch a directory of GLSL shaders and recompile them to SPIR-V on change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the key/value config file.
    ///
    /// Default: `shaderwatch.ini` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "shaderwatch.ini")]
    pub config: String,

    /// Compile every recognized shader once, then exit. No watching.
    #[arg(long)]
    pub once: bool,

    /// Milliseconds to sleep between scans of the shader directory.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub interval_ms: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHADERWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the config, print it and the compiler command lines, but
    /// don't watch or compile anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
