//! Form field widget
//!
//! A single-line labelled field. The cursor always sits at the end of the
//! text since the forms only append and delete from the end.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A labelled form field
#[derive(Debug, Clone, Default)]
pub struct FormField<'a> {
    label: &'a str,
    content: &'a str,
    prefix: &'a str,
    placeholder: &'a str,
    focused: bool,
    invalid: bool,
}

impl<'a> FormField<'a> {
    pub fn new(label: &'a str, content: &'a str) -> Self {
        Self {
            label,
            content,
            ..Self::default()
        }
    }

    /// Text shown before the content, such as a currency symbol
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the field as failing validation
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    fn line(&self) -> Line<'a> {
        let label_style = if self.invalid {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = vec![
            Span::styled(format!("{:<10}", format!("{}:", self.label)), label_style),
            Span::raw(self.prefix),
        ];

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(self.content, Style::default().fg(Color::White)));
        }

        if self.focused {
            spans.push(Span::styled(
                " ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for FormField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.line();
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// A red message line under a field, or an empty line
pub fn error_line(message: Option<String>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}
