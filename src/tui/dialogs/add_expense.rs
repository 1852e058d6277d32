//! Add transaction dialog
//!
//! Category is picked from the fixed list with the arrow keys; cost and date
//! are typed. Every field is validated on save and each failure is shown
//! under its field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, ExpenseField};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{error_line, FormField};

/// Render the add transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Category error
            Constraint::Length(1), // Cost
            Constraint::Length(1), // Cost error
            Constraint::Length(1), // Date
            Constraint::Length(1), // Date error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    let focus = app.expense_field;
    let errors = &form.errors;

    frame.render_widget(category_line(app), chunks[1]);
    frame.render_widget(
        Paragraph::new(error_line(errors.category.as_ref().map(|e| e.to_string()))),
        chunks[2],
    );

    frame.render_widget(
        FormField::new("Cost", &form.cost)
            .prefix(&app.settings.currency_symbol)
            .placeholder("0.00")
            .focused(focus == ExpenseField::Cost)
            .invalid(errors.cost.is_some()),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(error_line(errors.cost.as_ref().map(|e| e.to_string()))),
        chunks[4],
    );

    frame.render_widget(
        FormField::new("Date", &form.date)
            .placeholder("YYYY-MM-DD")
            .focused(focus == ExpenseField::Date)
            .invalid(errors.date.is_some()),
        chunks[5],
    );
    frame.render_widget(
        Paragraph::new(error_line(errors.date.as_ref().map(|e| e.to_string()))),
        chunks[6],
    );

    let instructions = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" next  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(" category  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[8]);
}

fn category_line(app: &App) -> Paragraph<'static> {
    let focused = app.expense_field == ExpenseField::Category;
    let label_style = if app.expense_form.errors.category.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let value = match app.expense_form.selected_category() {
        Some(category) => category.label().to_string(),
        None => app.expense_form.category.clone(),
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    Paragraph::new(Line::from(vec![
        Span::styled(format!("{:<10}", "Category:"), label_style),
        Span::raw(if focused { "◀ " } else { "  " }),
        Span::styled(value, value_style),
        Span::raw(if focused { " ▶" } else { "" }),
    ]))
}

fn cycle_category(app: &mut App, forward: bool) {
    let next = match app.expense_form.selected_category() {
        Some(current) if forward => current.next(),
        Some(current) => current.prev(),
        None => Category::default(),
    };
    app.expense_form.select_category(next);
}

/// Text of the focused typed field
fn focused_text<'s>(app: &'s mut App<'_>) -> Option<&'s mut String> {
    let form = &mut app.expense_form;
    match app.expense_field {
        ExpenseField::Category => None,
        ExpenseField::Cost => {
            form.errors.cost = None;
            Some(&mut form.cost)
        }
        ExpenseField::Date => {
            form.errors.date = None;
            Some(&mut form.date)
        }
    }
}

/// Handle key input for the dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            app.expense_field = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.expense_field.prev()
            } else {
                app.expense_field.next()
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.expense_field = app.expense_field.prev();
        }
        KeyCode::Down => {
            app.expense_field = app.expense_field.next();
        }

        KeyCode::Enter => {
            app.submit_expense();
        }

        KeyCode::Left if app.expense_field == ExpenseField::Category => {
            cycle_category(app, false);
        }
        KeyCode::Right if app.expense_field == ExpenseField::Category => {
            cycle_category(app, true);
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(text) = focused_text(app) {
                text.clear();
            }
        }

        KeyCode::Backspace => {
            if let Some(text) = focused_text(app) {
                text.pop();
            }
        }

        KeyCode::Char(c) => {
            if let Some(text) = focused_text(app) {
                text.push(c);
            }
        }

        _ => return false,
    }

    true
}
