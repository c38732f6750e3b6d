//! Presentation module
//! 
//! Pure renderers over timer records and state snapshots. Nothing here reads
//! the store on its own except [`StateReport::from_store`].

pub mod report;
pub mod timer_view;
pub mod timers_list;

pub use report::StateReport;
pub use timer_view::TimerView;
pub use timers_list::TimersList;
