//! Re-renders the timer list whenever the store publishes a new snapshot

use std::{io::Write, sync::Arc};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    config::OutputFormat,
    state::{TimerState, TimerStore},
    view::{StateReport, TimersList},
};

/// A dependent of the store that redraws on change
#[derive(Debug)]
pub struct Renderer<'a> {
    store: &'a TimerStore,
    state_rx: watch::Receiver<Arc<TimerState>>,
    format: OutputFormat,
}

impl<'a> Renderer<'a> {
    pub fn new(store: &'a TimerStore, format: OutputFormat) -> Self {
        Self {
            store,
            state_rx: store.subscribe(),
            format,
        }
    }

    /// Render if a snapshot was published since the last render.
    /// Returns whether anything was written.
    pub fn render_if_changed<W: Write>(&mut self, out: &mut W) -> anyhow::Result<bool> {
        if !self.state_rx.has_changed()? {
            return Ok(false);
        }
        debug!("State changed, re-rendering");
        self.render(out)?;
        Ok(true)
    }

    /// Render the latest snapshot unconditionally
    pub fn render<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let state = Arc::clone(&*self.state_rx.borrow_and_update());
        match self.format {
            OutputFormat::Text => write!(out, "{}", TimersList::new(&state))?,
            OutputFormat::Json => {
                let report = StateReport::from_snapshot(&state, self.store);
                writeln!(out, "{}", report.to_json()?)?
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timer;

    fn rendered(renderer: &mut Renderer<'_>) -> Option<String> {
        let mut buf = Vec::new();
        let wrote = renderer.render_if_changed(&mut buf).unwrap();
        wrote.then(|| String::from_utf8(buf).unwrap())
    }

    #[test]
    fn renders_only_after_change() {
        let store = TimerStore::new();
        let mut renderer = Renderer::new(&store, OutputFormat::Text);
        assert!(rendered(&mut renderer).is_none());

        store.add_timer(Timer::new("Tea", 180));
        let out = rendered(&mut renderer).unwrap();
        assert!(out.contains("Tea  180s"));
        assert!(rendered(&mut renderer).is_none());
    }

    #[test]
    fn coalesces_multiple_changes() {
        let store = TimerStore::new();
        let mut renderer = Renderer::new(&store, OutputFormat::Text);
        store.add_timer(Timer::new("A", 1));
        store.add_timer(Timer::new("B", 2));
        store.start_timers();

        let out = rendered(&mut renderer).unwrap();
        assert!(out.starts_with("[running] 2 timers"));
        assert!(rendered(&mut renderer).is_none());
    }

    #[test]
    fn json_output_is_one_report_per_line() {
        let store = TimerStore::new();
        let mut renderer = Renderer::new(&store, OutputFormat::Json);
        store.add_timer(Timer::new("Eggs", 600));

        let out = rendered(&mut renderer).unwrap();
        assert_eq!(out.lines().count(), 1);
        let report: StateReport = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(report.state.timers, vec![Timer::new("Eggs", 600)]);
    }
}
