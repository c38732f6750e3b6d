//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

/// How state snapshots are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per timer
    #[default]
    Text,
    /// A JSON status report per render
    Json,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "timers")]
#[command(about = "Manage a list of timers from the console, one command per line")]
#[command(version)]
pub struct Config {
    /// Output format for rendered state
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not re-render the timer list after each change
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
