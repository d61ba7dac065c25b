//! Display pane rendering
//!
//! Shows the formatted operand right-aligned on the bottom line and the
//! pending expression (`12 +`) above it, the way a desk calculator does.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything the display pane needs from the calculator state
pub struct DisplayRenderData<'a> {
    pub value: &'a str,
    pub expression: &'a str,
    pub is_error: bool,
}

/// Render the display pane
pub fn render_display_pane(frame: &mut Frame, area: Rect, title: &str, data: &DisplayRenderData) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(DEFAULT_THEME.display_bg));

    let value_style = if data.is_error {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            data.expression.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(data.value.to_string(), value_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
