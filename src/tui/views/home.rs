//! Home view
//!
//! The expense list in insertion order

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::reports::category_color;
use crate::tui::app::App;

use super::rgb;

/// Render the expense list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let state = app.store.state();
    if state.is_empty() {
        let paragraph = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Id
        Constraint::Length(24), // Category
        Constraint::Length(14), // Cost
        Constraint::Min(10),    // Date
    ];

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Cost").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let settings = app.settings;
    let rows: Vec<Row> = state
        .expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.id.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("● {}", expense.category))
                    .style(Style::default().fg(rgb(category_color(expense.category)))),
                Cell::from(settings.format_money(expense.cost)),
                Cell::from(
                    expense
                        .date
                        .map(|d| settings.format_date(d))
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}
