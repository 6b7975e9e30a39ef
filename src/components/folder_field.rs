// ABOUTME: Selected repository field showing the target path and how to change it

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{AppState, Focus};
use super::focus_border;

pub struct FolderFieldComponent;

impl FolderFieldComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let path_style = if state.target_path.is_some() {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
        };

        let text = vec![
            Line::from(Span::styled(state.target_display(), path_style)),
            Line::from(vec![
                Span::styled("[o]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" 📁 Select Folder"),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Selected Repository")
                    .borders(Borders::ALL)
                    .border_style(focus_border(state.focus == Focus::Folder)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

impl Default for FolderFieldComponent {
    fn default() -> Self {
        Self::new()
    }
}
