//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Home => handle_home_key(app, key),
        ActiveView::Overview => handle_overview_key(app, key),
    }

    Ok(())
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddTransaction);
        }
        KeyCode::Char('b') => {
            app.open_dialog(ActiveDialog::EditBudget);
        }
        KeyCode::Char('o') | KeyCode::Tab => {
            app.switch_view(ActiveView::Overview);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if app.delete_selected().is_none() {
                app.set_status("Nothing to delete");
            }
        }

        _ => {}
    }
}

fn handle_overview_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
            app.switch_view(ActiveView::Home);
        }
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::EditBudget),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::add_expense::handle_key(app, key);
        }
        ActiveDialog::EditBudget => {
            dialogs::edit_budget::handle_key(app, key);
        }
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}
