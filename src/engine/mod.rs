// src/engine/mod.rs

//! Runtime engine for shaderwatch.
//!
//! Two threads of control share one [`WatchContext`]:
//! - the [`Scheduler`], a tokio task that owns the watch state and runs a
//!   scan cycle every interval;
//! - the command channel, an OS thread reading prompt commands that set the
//!   stop / force-recompile flags.

pub mod commands;
pub mod context;
pub mod scheduler;

pub use commands::{parse_command, run_command_channel, spawn_command_channel, ChannelExit, Command};
pub use context::WatchContext;
pub use scheduler::{ResultHook, Scheduler, DEFAULT_INTERVAL};
