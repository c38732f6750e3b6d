//! State management module
//! 
//! Timer records, the state they live in, the actions that change it, and the
//! store and scope that own it.

pub mod action;
pub mod scope;
pub mod store;
pub mod timer;
pub mod timer_state;

// Re-export main types
pub use action::Action;
pub use scope::{TimersContext, TimersScope};
pub use store::{LastAction, TimerStore};
pub use timer::Timer;
pub use timer_state::{RunState, TimerState};
