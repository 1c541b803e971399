//! Terminal UI
//!
//! Sets up the terminal, runs the event loop, and restores the terminal on
//! the way out even when the loop fails.

pub mod app;
pub mod handlers;
pub mod popups;
pub mod shortcuts;
pub mod themes;
pub mod views;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, Services};
use folio_core::FolioConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive portfolio until the user quits
pub async fn run(services: Services, config: &FolioConfig) -> Result<()> {
    let mut app = App::new(services, config.quiescence());
    tracing::info!(
        theme = %app.theme.name,
        debounce_ms = config.search.debounce_ms,
        "Starting TUI"
    );

    let mut terminal = setup_terminal()?;
    let result = app.run_loop(&mut terminal).await;
    restore_terminal(&mut terminal)?;
    result
}
