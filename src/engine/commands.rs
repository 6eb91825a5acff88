// src/engine/commands.rs

//! Interactive line-based prompt.
//!
//! Runs on its own OS thread doing blocking reads, so a pending read on
//! stdin never holds up the async runtime on shutdown.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{debug, info, warn};

use super::context::WatchContext;

pub const HELP_TEXT: &str = "\
commands:
-h|-help|help:        list of commands
-q|-quit|quit|exit:   quit shaderwatch
-r|-recompile:        recompile all shaders
";

/// A recognised prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Recompile,
}

/// Why [`run_command_channel`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelExit {
    /// A quit command was entered; stop has been requested.
    Quit,
    /// Input closed. The watcher keeps running.
    EndOfInput,
}

/// Parse one input line. Surrounding whitespace is ignored; anything
/// unrecognised yields `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "-h" | "-help" | "help" => Some(Command::Help),
        "-q" | "-quit" | "quit" | "exit" => Some(Command::Quit),
        "-r" | "-recompile" => Some(Command::Recompile),
        _ => None,
    }
}

/// Read commands from `input` until a quit command or end of input.
///
/// Help text and acknowledgements go to `output`; flags are set on `ctx`.
pub fn run_command_channel<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    ctx: &WatchContext,
) -> io::Result<ChannelExit> {
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Help) => {
                output.write_all(HELP_TEXT.as_bytes())?;
                output.flush()?;
            }
            Some(Command::Quit) => {
                info!("quit requested");
                ctx.request_stop();
                return Ok(ChannelExit::Quit);
            }
            Some(Command::Recompile) => {
                writeln!(output, "forcing recompile")?;
                output.flush()?;
                ctx.request_recompile();
            }
            None => {
                debug!(line = %line, "ignoring unknown command");
            }
        }
    }

    Ok(ChannelExit::EndOfInput)
}

/// Spawn the prompt on a dedicated thread reading stdin.
pub fn spawn_command_channel(ctx: Arc<WatchContext>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("command-channel".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            match run_command_channel(stdin.lock(), io::stdout(), &ctx) {
                Ok(ChannelExit::Quit) => debug!("command channel finished"),
                Ok(ChannelExit::EndOfInput) => {
                    info!("stdin closed; still watching, press Ctrl-C to stop")
                }
                Err(e) => warn!(error = %e, "command channel failed; still watching"),
            }
        })
}
