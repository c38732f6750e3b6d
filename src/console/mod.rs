//! Console module
//! 
//! Turns input lines into store operations and replies, and runs the loop
//! that feeds them.

pub mod commands;
pub mod handlers;
pub mod responses;
pub mod session;

pub use commands::{Command, CommandError};
pub use handlers::{handle, handle_line};
pub use responses::{Reply, ReplyStatus};
pub use session::{run_session, SessionOptions};
