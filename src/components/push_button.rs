// ABOUTME: Push trigger rendered as a button, greyed out while a push is running

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, Focus};

pub struct PushButtonComponent;

impl PushButtonComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Push;
        let (style, border) = if state.push_in_flight {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else if focused {
            (
                Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
            )
        };

        let button = Paragraph::new(state.push_button_label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));

        frame.render_widget(button, area);
    }
}

impl Default for PushButtonComponent {
    fn default() -> Self {
        Self::new()
    }
}
