//! TUI Views module
//!
//! The home and overview screens, the budget header above them and the
//! status bar below.

pub mod header;
pub mod home;
pub mod overview;
pub mod status_bar;

use ratatui::{style::Color, Frame};

use crate::reports::{BudgetSummary, Rgb};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Terminal colour for a palette entry
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    let summary = BudgetSummary::from_state(app.store.state());

    header::render(frame, app, &summary, layout.header);

    match app.active_view {
        ActiveView::Home => home::render(frame, app, layout.main),
        ActiveView::Overview => overview::render(frame, app, &summary, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddTransaction => dialogs::add_expense::render(frame, app),
        ActiveDialog::EditBudget => dialogs::edit_budget::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
    }
}
