//! Timers - a reducer-driven timer store with a console front end
//! 
//! This is the main entry point for the timers application.

use tokio::io::BufReader;
use tracing::info;

use timers::{
    config::Config,
    console::{run_session, SessionOptions},
    state::TimersScope,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries replies and renders
    tracing_subscriber::fmt()
        .with_env_filter(format!("timers={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting timers v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: format={:?}, quiet={}", config.format, config.quiet);

    let scope = TimersScope::mount();
    let options = SessionOptions {
        format: config.format,
        quiet: config.quiet,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = run_session(&scope, stdin, &mut stdout, options) => {
            result?;
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
            // The stdin read may still be parked on the blocking pool, which
            // would hold up runtime shutdown.
            std::process::exit(0);
        }
    }

    info!("Shutdown complete");
    Ok(())
}
