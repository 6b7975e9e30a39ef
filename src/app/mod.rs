// ABOUTME: Main application structure and state management for the TUI

pub mod commit_message;
pub mod events;
pub mod folder_browser;
pub mod non_git;
pub mod notification;
pub mod output_log;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use notification::{Notification, NotificationType};
pub use state::{App, AppState, Focus};
