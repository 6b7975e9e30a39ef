// ABOUTME: Help overlay component displaying keyboard shortcuts and commands

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

use super::centered_rect;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Form:").style(heading),
            ListItem::new("  Tab        Next field"),
            ListItem::new("  Shift+Tab  Previous field"),
            ListItem::new("  o          Select folder"),
            ListItem::new("  m          Edit commit message"),
            ListItem::new("  p          Stage, commit and push"),
            ListItem::new(""),
            ListItem::new("Commit Message:").style(heading),
            ListItem::new("  Enter      Push"),
            ListItem::new("  Esc        Leave the message field"),
            ListItem::new("  Ctrl+U     Clear message"),
            ListItem::new(""),
            ListItem::new("Output:").style(heading),
            ListItem::new("  j/k        Scroll down/up"),
            ListItem::new("  g/G        Oldest/newest output"),
            ListItem::new("  c          Clear output"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press ? or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
