//! Event loop
//!
//! Waits on the next terminal event or the search debounce deadline,
//! whichever comes first, and redraws after each.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

use crate::tui::app::App;

/// Resolves at `deadline`, or never when there is nothing to settle
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending::<()>().await,
    }
}

impl App {
    pub async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|f| self.ui(f))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key, Instant::now()),
                    // Resize and friends only need a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = sleep_until(self.search.deadline()) => {}
            }

            if self.search.tick(Instant::now()) {
                tracing::debug!(
                    query = %self.search.settled_query(),
                    hits = self.search.results().len(),
                    "Search results updated"
                );
            }
        }

        Ok(())
    }
}
