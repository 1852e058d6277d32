//! Help dialog
//!
//! Shows keyboard shortcuts for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("a", "Add transaction"),
        key_line("b", "Edit budget"),
        Line::from(""),
    ];

    match view {
        ActiveView::Home => {
            lines.push(heading("Home"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("d", "Delete selected expense"));
            lines.push(key_line("o", "Spending overview"));
        }
        ActiveView::Overview => {
            lines.push(heading("Overview"));
            lines.push(Line::from(""));
            lines.push(key_line("Esc/h", "Back to home"));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Dialogs"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/S-Tab", "Next/previous field"));
    lines.push(key_line("←/→", "Change category"));
    lines.push(key_line("Ctrl+U", "Clear field"));
    lines.push(key_line("Enter", "Save"));
    lines.push(key_line("Esc", "Cancel"));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
