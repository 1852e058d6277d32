//! Spending overview
//!
//! One row per category with spending, drawn as a bar in the category's
//! colour and sized relative to the largest category.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::reports::BudgetSummary;
use crate::tui::app::App;

use super::rgb;

const BAR_WIDTH: usize = 24;

/// A bar like `██████░░░░` filled in proportion to `value / max`
pub fn ascii_bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the category breakdown
pub fn render(frame: &mut Frame, app: &App, summary: &BudgetSummary, area: Rect) {
    let block = Block::default()
        .title(" Spending Overview ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if summary.slices.is_empty() {
        let paragraph = Paragraph::new("No spending to show yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let max = summary
        .slices
        .iter()
        .map(|slice| slice.total.cents())
        .max()
        .unwrap_or(0);

    let widths = [
        Constraint::Length(24),               // Category
        Constraint::Length(BAR_WIDTH as u16), // Bar
        Constraint::Length(14),               // Spent
        Constraint::Min(8),                   // Share
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from(""),
        Cell::from("Spent"),
        Cell::from("Share"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = summary
        .slices
        .iter()
        .map(|slice| {
            let color = rgb(slice.color);
            Row::new(vec![
                Cell::from(slice.category.label()).style(Style::default().fg(color)),
                Cell::from(ascii_bar(slice.total.cents(), max, BAR_WIDTH))
                    .style(Style::default().fg(color)),
                Cell::from(app.settings.format_money(slice.total)),
                Cell::from(format!("{:.1}%", slice.percentage)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
