//! Command handlers

use tracing::{debug, warn};

use crate::state::TimersContext;
use super::{
    commands::{Command, CommandError, HELP},
    responses::Reply,
};

/// Parse and handle one input line
pub fn handle_line(ctx: &mut TimersContext<'_>, line: &str) -> Option<Reply> {
    match Command::parse(line) {
        Ok(command) => Some(handle(ctx, command)),
        Err(CommandError::Empty) => None,
        Err(e) => {
            warn!("Rejected input {:?}: {}", line.trim(), e);
            Some(Reply::error(e.to_string()))
        }
    }
}

/// Apply a parsed command to the store behind `ctx`
pub fn handle(ctx: &mut TimersContext<'_>, command: Command) -> Reply {
    debug!("Handling {:?}", command);
    match command {
        Command::Add(timer) => {
            let message = format!("added '{}' ({}s)", timer.name, timer.duration);
            ctx.add_timer(timer);
            Reply::ok(message)
        }
        Command::Start => {
            ctx.refresh();
            let was_running = ctx.is_running();
            ctx.start_timers();
            Reply::ok(if was_running { "timers already running" } else { "timers started" })
        }
        Command::Stop => {
            ctx.refresh();
            let was_running = ctx.is_running();
            ctx.stop_timers();
            Reply::ok(if was_running { "timers stopped" } else { "timers already stopped" })
        }
        Command::Status => {
            ctx.refresh();
            Reply::show_state()
        }
        Command::Help => Reply::ok(HELP),
        Command::Quit => Reply::exit(),
    }
}
