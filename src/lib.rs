//! Timers - a reducer-driven timer store with a console front end
//! 
//! This library keeps an ordered list of timers and a global running flag in a
//! single store. State only changes through three actions (add, start, stop),
//! each applied as a pure transition that publishes a fresh snapshot.

pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use console::{run_session, SessionOptions};
pub use error::StoreError;
pub use state::{Action, Timer, TimerState, TimerStore, TimersContext, TimersScope};
pub use utils::signals::shutdown_signal;
pub use view::TimerView;
