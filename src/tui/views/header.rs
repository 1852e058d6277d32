//! Budget header
//!
//! Budget, total spent and remaining, shown above every screen. The
//! remaining figure turns red once spending exceeds the budget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::{AlertLevel, BudgetSummary};
use crate::tui::app::{ActiveView, App};

/// Render the budget header
pub fn render(frame: &mut Frame, app: &App, summary: &BudgetSummary, area: Rect) {
    let title = match app.active_view {
        ActiveView::Home => " Budget Planner ",
        ActiveView::Overview => " Budget Planner - Overview ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let remains_color = match summary.alert {
        AlertLevel::Under => Color::Green,
        AlertLevel::Over => Color::Red,
    };

    let label = Style::default().fg(Color::White);
    let settings = app.settings;
    let lines = vec![
        Line::from(vec![
            Span::styled("Budget:        ", label),
            Span::styled(
                settings.format_money(summary.budget),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total Expense: ", label),
            Span::styled(
                settings.format_money(summary.total),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Remains:       ", label),
            Span::styled(
                settings.format_money(summary.remaining),
                Style::default()
                    .fg(remains_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if summary.alert.is_over() {
                    "  OVER BUDGET"
                } else {
                    ""
                },
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
