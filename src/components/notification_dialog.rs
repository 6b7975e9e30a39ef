// ABOUTME: Blocking notification dialog that must be acknowledged before continuing

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{AppState, NotificationType};
use super::centered_rect;

pub struct NotificationDialogComponent;

impl NotificationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(notification) = state.current_notification() else {
            return;
        };

        let color = match notification.notification_type {
            NotificationType::Success => Color::Green,
            NotificationType::Error => Color::Red,
            NotificationType::Info => Color::Blue,
            NotificationType::Warning => Color::Yellow,
        };

        let popup_area = centered_rect(60, 35, area);
        frame.render_widget(Clear, popup_area);

        let mut text: Vec<Line> = notification
            .message
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Gray),
        )));

        let mut title = notification.title().to_string();
        if state.notifications.len() > 1 {
            title.push_str(&format!(" (1 of {})", state.notifications.len()));
        }

        let dialog = Paragraph::new(text)
            .block(
                Block::default()
                    .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(dialog, popup_area);
    }
}

impl Default for NotificationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
