//! Keypad pane rendering
//!
//! Lays the [`KEYPAD`] grid out over the pane and records where each button
//! landed so mouse clicks can be resolved back to inputs.

use crate::dispatch::keypad::KEYPAD_COLUMNS;
use crate::dispatch::{Input, KeyButton, KEYPAD};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Render the keypad, filling `button_areas` with the rect of every button
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    pressed: Option<Input>,
    button_areas: &mut FxHashMap<Input, Rect>,
) {
    button_areas.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD.iter().map(|_| Constraint::Ratio(1, KEYPAD.len() as u32)))
        .split(area);

    for (row, row_area) in KEYPAD.iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                row.iter()
                    .map(|b| Constraint::Ratio(b.span as u32, KEYPAD_COLUMNS as u32)),
            )
            .split(*row_area);

        for (button, cell) in row.iter().zip(cells.iter()) {
            render_button(frame, *cell, button, pressed == Some(button.input));
            button_areas.insert(button.input, *cell);
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, button: &KeyButton, is_pressed: bool) {
    let border_style = if is_pressed {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let label_style = if is_pressed {
        Style::default()
            .fg(DEFAULT_THEME.bg)
            .bg(DEFAULT_THEME.pressed_key)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.key_color(button.variant))
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    // Center the label vertically inside the border
    let inner_height = area.height.saturating_sub(2);
    let top_pad = inner_height.saturating_sub(1) / 2;
    let mut lines = vec![Line::raw(""); top_pad as usize];
    lines.push(Line::styled(button.label, label_style));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
