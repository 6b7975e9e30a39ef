// ABOUTME: Folder browser overlay for choosing the repository to push

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    style::{Color, Modifier, Style},
};

use crate::app::{AppState, folder_browser::FolderBrowserState};
use super::centered_rect;

pub struct FolderBrowserComponent {
    list_state: ListState,
}

impl FolderBrowserComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(ref browser) = state.folder_browser else {
            return;
        };

        let popup_area = centered_rect(80, 70, area);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Current directory
                Constraint::Min(0),     // Folder list
                Constraint::Length(3),  // Instructions
            ])
            .split(popup_area);

        self.render_current_dir(frame, chunks[0], browser);
        self.render_entries(frame, chunks[1], browser);

        let instructions = Paragraph::new(
            "j/k: Navigate • Enter/l: Open • h: Up • s: Select highlighted • .: Select this folder • H: Hidden • Esc: Cancel",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        frame.render_widget(instructions, chunks[2]);
    }

    fn render_current_dir(&self, frame: &mut Frame, area: Rect, browser: &FolderBrowserState) {
        let mut spans = vec![Span::styled(
            browser.current_dir.display().to_string(),
            Style::default().fg(Color::Yellow),
        )];
        if browser.current_is_repo() {
            spans.push(Span::styled("  (git)", Style::default().fg(Color::Green)));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Select Git Repository Folder")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(header, area);
    }

    fn render_entries(&mut self, frame: &mut Frame, area: Rect, browser: &FolderBrowserState) {
        let items: Vec<ListItem> = if let Some(ref error) = browser.error {
            vec![ListItem::new(format!("Cannot read folder: {error}")).style(Style::default().fg(Color::Red))]
        } else if browser.entries.is_empty() {
            vec![ListItem::new("No sub-folders here. Press . to select this folder")
                .style(Style::default().fg(Color::Gray))]
        } else {
            browser
                .entries
                .iter()
                .map(|entry| {
                    let mut spans = vec![Span::raw(format!("📁 {}", entry.name))];
                    if entry.is_repo {
                        spans.push(Span::styled("  (git)", Style::default().fg(Color::Green)));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        self.list_state.select(if browser.error.is_some() { None } else { browser.selected_index });
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for FolderBrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}
