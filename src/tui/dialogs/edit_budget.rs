//! Edit budget dialog
//!
//! Replaces the single budget with a whole-number amount.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{error_line, FormField};

/// Render the edit budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Current amount
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current_line = Line::from(vec![
        Span::styled(format!("{:<10}", "Current:"), Style::default().fg(Color::Yellow)),
        Span::styled(
            app.settings.format_money(app.store.state().budget),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[1]);

    let form = &app.budget_form;
    frame.render_widget(
        FormField::new("Budget", &form.input)
            .prefix(&app.settings.currency_symbol)
            .focused(true)
            .invalid(form.error.is_some()),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(error_line(form.error.as_ref().map(|e| e.to_string()))),
        chunks[3],
    );

    let instructions = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" save  "),
        Span::styled("Ctrl+U", Style::default().fg(Color::Cyan)),
        Span::raw(" clear  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key input for the dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            app.submit_budget();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.clear();
        }
        KeyCode::Backspace => {
            app.budget_form.backspace();
        }
        KeyCode::Char(c) => {
            app.budget_form.push(c);
        }
        _ => return false,
    }
    true
}
