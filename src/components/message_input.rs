// ABOUTME: Single-line commit message input with cursor placement and horizontal scroll

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, Focus};
use super::focus_border;

pub struct MessageInputComponent;

impl MessageInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Message;
        let input = &state.commit_message;
        let inner_width = usize::from(area.width.saturating_sub(2)).max(1);

        // Keep the cursor visible by scrolling the text window
        let offset = (input.cursor() + 1).saturating_sub(inner_width);
        let visible: String = input.text().chars().skip(offset).take(inner_width).collect();

        let title = if focused {
            "Commit Message (Enter: push, Esc: done)"
        } else {
            "Commit Message [m]"
        };

        let paragraph = Paragraph::new(visible)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(focus_border(focused)),
            );
        frame.render_widget(paragraph, area);

        if focused && area.width > 2 && area.height > 2 {
            let column = u16::try_from(input.cursor() - offset).unwrap_or(u16::MAX);
            let x = area.x + 1 + column.min(area.width - 3);
            frame.set_cursor(x, area.y + 1);
        }
    }
}

impl Default for MessageInputComponent {
    fn default() -> Self {
        Self::new()
    }
}
