//! Parsing of console input lines

use thiserror::Error;

use crate::state::Timer;

/// A single console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Timer),
    Start,
    Stop,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid duration '{0}': expected a whole number of seconds")]
    InvalidDuration(String),
}

impl Command {
    /// Parse one line of input.
    ///
    /// `add` takes the duration as its last token; everything between the verb
    /// and the duration is the timer name.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();

        match verb.as_str() {
            "add" => {
                let mut args: Vec<&str> = tokens.collect();
                match args.as_slice() {
                    [] => return Err(CommandError::MissingArgument("name")),
                    [only] if only.parse::<u64>().is_ok() => {
                        return Err(CommandError::MissingArgument("name"))
                    }
                    [_] => return Err(CommandError::MissingArgument("duration")),
                    _ => {}
                }
                let duration = args.pop().unwrap_or_default();
                let duration = duration
                    .parse::<u64>()
                    .map_err(|_| CommandError::InvalidDuration(duration.to_string()))?;
                Ok(Command::Add(Timer::new(args.join(" "), duration)))
            }
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "status" | "list" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

pub const HELP: &str = "\
commands:
  add <name> <seconds>  append a timer
  start                 mark all timers as running
  stop                  mark all timers as stopped
  status                show the timer list
  help                  show this message
  quit                  exit";
