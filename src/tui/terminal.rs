//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::PlannerError;
use crate::store::Store;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// How long a status message stays on screen
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error("enable raw mode"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error("enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(tui_error("create terminal"))?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<(), PlannerError> {
    disable_raw_mode().map_err(tui_error("disable raw mode"))?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error("leave alternate screen"))?;
    Ok(())
}

fn tui_error(step: &'static str) -> impl Fn(io::Error) -> PlannerError {
    move |e| PlannerError::Tui(format!("Failed to {}: {}", step, e))
}

/// Run the TUI application until the user quits
pub fn run_tui(store: Store, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    tracing::info!("tui started");

    let result = event_loop(&mut terminal, App::new(store, settings));

    restore_terminal()?;
    match &result {
        Ok(()) => tracing::info!("tui exited"),
        Err(e) => tracing::error!(error = %e, "tui exited with error"),
    }
    result
}

fn event_loop(terminal: &mut Tui, mut app: App) -> Result<()> {
    let events = EventHandler::default();
    let mut status_since: Option<Instant> = None;

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events.next()?;
        let had_status = app.status_message.clone();
        handle_event(&mut app, event.clone())?;

        if app.status_message != had_status {
            status_since = app.status_message.as_ref().map(|_| Instant::now());
        } else if matches!(event, Event::Tick) {
            if let Some(since) = status_since {
                if since.elapsed() >= STATUS_TIMEOUT {
                    app.clear_status();
                    status_since = None;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
