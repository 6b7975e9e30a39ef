// ABOUTME: Output console component showing colour-coded progress of git operations

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{AppState, Focus};
use unicode_width::UnicodeWidthChar;
use super::focus_border;

pub struct OutputConsoleComponent;

impl OutputConsoleComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Output;
        let title = if state.output.is_following() {
            "Output".to_string()
        } else {
            format!("Output (scrolled back {}, G: follow)", state.output.scroll_back())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(focused));

        if state.output.is_empty() {
            let paragraph = Paragraph::new("Select a folder, enter a commit message and push")
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let width = usize::from(area.width.saturating_sub(2)).max(1);
        let height = usize::from(area.height.saturating_sub(2));
        let items = Self::visible_rows(state, width, height);
        frame.render_widget(List::new(items).block(block), area);
    }

    /// Wraps every line to `width` and keeps the last `height` rows up to
    /// the scroll position.
    #[allow(elided_lifetimes_in_paths)]
    fn visible_rows(state: &AppState, width: usize, height: usize) -> Vec<ListItem> {
        let lines = state.output.lines();
        let end = lines.len().saturating_sub(state.output.scroll_back());

        let mut rows: Vec<ListItem> = Vec::new();
        for line in lines[..end].iter().rev() {
            let style = Style::default().fg(state.palette.color(line.severity));
            for chunk in wrap_cells(&line.text, width).into_iter().rev() {
                rows.push(ListItem::new(chunk).style(style));
                if rows.len() >= height {
                    rows.reverse();
                    return rows;
                }
            }
        }
        rows.reverse();
        rows
    }
}

/// Splits `text` into rows no wider than `width` terminal cells.
fn wrap_cells(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(ch);
        used += cells;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

impl Default for OutputConsoleComponent {
    fn default() -> Self {
        Self::new()
    }
}
