// src/lib.rs

pub mod cli;
pub mod compile;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::compile::{CompileCommand, ProcessCompiler};
use crate::config::{config_warnings, load_and_validate, Config};
use crate::engine::{spawn_command_channel, Scheduler, WatchContext};
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - output directory creation
/// - scheduler + process compiler
/// - the interactive command channel
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let mut cfg = load_and_validate(&config_path)?;

    for warning in config_warnings(&cfg) {
        warn!("{warning}");
    }

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    fs.create_dir_all(&cfg.output_path)
        .context("creating SPIR-V output directory")?;

    info!(
        watch = ?cfg.watch_path,
        output = ?cfg.output_path,
        compiler = %cfg.compiler,
        "configuration loaded"
    );

    let context = Arc::new(WatchContext::new());

    if args.once {
        // A single pass is a full build: everything on disk counts as new.
        cfg.compile_on_startup = true;
        let compiler = ProcessCompiler::new(cfg.clone());
        let mut scheduler = Scheduler::new(&cfg, fs, compiler, context);
        let report = scheduler.tick().await?;
        info!(compiled = report.requests.len(), "single pass complete");
        return Ok(());
    }

    let compiler = ProcessCompiler::new(cfg.clone());
    let scheduler = Scheduler::new(&cfg, fs, compiler, Arc::clone(&context))
        .with_interval(Duration::from_millis(args.interval_ms));

    print_banner();

    let watcher = tokio::spawn(scheduler.run());

    // Ctrl-C → graceful shutdown.
    {
        let context = Arc::clone(&context);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            context.request_stop();
        });
    }

    // The prompt thread is never joined: it may be parked in a blocking
    // stdin read when shutdown comes from Ctrl-C.
    spawn_command_channel(Arc::clone(&context)).context("starting command channel")?;

    watcher.await.context("shader watcher task panicked")??;
    debug!("shutdown complete");
    Ok(())
}

fn print_banner() {
    println!("shaderwatch {}", env!("CARGO_PKG_VERSION"));
    println!("Enter -h for the list of commands.");
}

/// Dry-run output: resolved config plus one sample command per stage.
fn print_dry_run(cfg: &Config) {
    println!("shaderwatch dry-run");
    println!("  watch_path = {}", cfg.watch_path.display());
    println!("  output_path = {}", cfg.output_path.display());
    println!("  compiler = {} ({:?})", cfg.compiler, cfg.compiler_path());
    println!("  compile_on_startup = {}", cfg.compile_on_startup);
    match cfg.compile_timeout {
        Some(limit) => println!("  compile_timeout = {}s", limit.as_secs()),
        None => println!("  compile_timeout = none"),
    }
    println!();

    println!("stages ({}):", cfg.stage_extensions.len());
    for (stage, ext) in cfg.stage_extensions.iter() {
        let sample = CompileCommand::for_file_name(cfg, &format!("example{ext}"));
        println!("  - {stage:?} ({ext})");
        println!("      cmd: {sample}");
    }

    debug!("dry-run complete (no execution)");
}
