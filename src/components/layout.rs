// ABOUTME: Main layout component stacking the form controls, output console and bottom menu bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Modifier, Style},
};

use crate::app::{AppState, Focus};
use super::{
    FolderBrowserComponent, FolderFieldComponent, HelpComponent, MessageInputComponent,
    NotificationDialogComponent, OutputConsoleComponent, PushButtonComponent,
};

pub struct LayoutComponent {
    folder_field: FolderFieldComponent,
    message_input: MessageInputComponent,
    push_button: PushButtonComponent,
    output_console: OutputConsoleComponent,
    folder_browser: FolderBrowserComponent,
    help: HelpComponent,
    notification_dialog: NotificationDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            folder_field: FolderFieldComponent::new(),
            message_input: MessageInputComponent::new(),
            push_button: PushButtonComponent::new(),
            output_console: OutputConsoleComponent::new(),
            folder_browser: FolderBrowserComponent::new(),
            help: HelpComponent::new(),
            notification_dialog: NotificationDialogComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Header
                Constraint::Length(4),  // Selected repository
                Constraint::Length(3),  // Commit message
                Constraint::Length(3),  // Push button
                Constraint::Min(0),     // Output console
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(area);

        let header = Paragraph::new("Git Push Tool")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        self.folder_field.render(frame, chunks[1], state);
        self.message_input.render(frame, chunks[2], state);
        self.push_button.render(frame, chunks[3], state);
        self.output_console.render(frame, chunks[4], state);
        self.render_menu_bar(frame, chunks[5], state);

        if state.folder_browser.is_some() {
            self.folder_browser.render(frame, area, state);
        }

        if state.help_visible {
            self.help.render(frame, area);
        }

        // Notifications block everything else
        if state.current_notification().is_some() {
            self.notification_dialog.render(frame, area, state);
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let menu_text = if state.focus == Focus::Message {
            "Typing commit message • [Enter]push [Esc]done [Ctrl+U]clear"
        } else {
            "[o]pen folder [m]essage [p]ush [c]lear output [Tab]focus [?]help [q]uit"
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
