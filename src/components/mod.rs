// ABOUTME: UI components for the TUI form: folder field, message input, push button, output and overlays

pub mod folder_browser;
pub mod folder_field;
pub mod help;
pub mod layout;
pub mod message_input;
pub mod notification_dialog;
pub mod output_console;
pub mod push_button;

pub use folder_browser::FolderBrowserComponent;
pub use folder_field::FolderFieldComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use message_input::MessageInputComponent;
pub use notification_dialog::NotificationDialogComponent;
pub use output_console::OutputConsoleComponent;
pub use push_button::PushButtonComponent;

use ratatui::{
    prelude::*,
    style::{Color, Style},
};

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
