// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::app::{AppState, state::{AsyncAction, Focus}};

const PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    FocusNext,
    FocusPrevious,
    FocusMessage,
    OpenFolderBrowser,
    TriggerPush,
    ClearOutput,
    DismissNotification,
    // Output console scrolling
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    ScrollBottom,
    // Commit message editing
    MessageInputChar(char),
    MessageBackspace,
    MessageDelete,
    MessageCursorLeft,
    MessageCursorRight,
    MessageCursorHome,
    MessageCursorEnd,
    MessageClear,
    // Folder browser events
    BrowserNext,
    BrowserPrevious,
    BrowserEnter,
    BrowserParent,
    BrowserHome,
    BrowserToggleHidden,
    BrowserSelectHighlighted,
    BrowserSelectCurrent,
    BrowserCancel,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        // Blocking notification first (highest priority)
        if state.current_notification().is_some() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    Some(AppEvent::DismissNotification)
                }
                _ => None,
            };
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if state.folder_browser.is_some() {
            return Self::handle_folder_browser_keys(key_event);
        }

        if state.focus == Focus::Message {
            return Self::handle_message_keys(key_event);
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Tab => Some(AppEvent::FocusNext),
            KeyCode::BackTab => Some(AppEvent::FocusPrevious),
            KeyCode::Char('o') => Some(AppEvent::OpenFolderBrowser),
            KeyCode::Char('m') => Some(AppEvent::FocusMessage),
            KeyCode::Char('p') => Some(AppEvent::TriggerPush),
            KeyCode::Char('c') => Some(AppEvent::ClearOutput),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::ScrollUp(1)),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::ScrollDown(1)),
            KeyCode::PageUp => Some(AppEvent::ScrollUp(PAGE_ROWS)),
            KeyCode::PageDown => Some(AppEvent::ScrollDown(PAGE_ROWS)),
            KeyCode::Char('g') => Some(AppEvent::ScrollTop),
            KeyCode::Char('G') => Some(AppEvent::ScrollBottom),
            KeyCode::Enter => match state.focus {
                Focus::Folder => Some(AppEvent::OpenFolderBrowser),
                Focus::Push => Some(AppEvent::TriggerPush),
                Focus::Message | Focus::Output => None,
            },
            _ => None,
        }
    }

    fn handle_message_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('u') => Some(AppEvent::MessageClear),
                KeyCode::Char('a') => Some(AppEvent::MessageCursorHome),
                KeyCode::Char('e') => Some(AppEvent::MessageCursorEnd),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Tab => Some(AppEvent::FocusNext),
            KeyCode::BackTab => Some(AppEvent::FocusPrevious),
            KeyCode::Enter => Some(AppEvent::TriggerPush),
            KeyCode::Backspace => Some(AppEvent::MessageBackspace),
            KeyCode::Delete => Some(AppEvent::MessageDelete),
            KeyCode::Left => Some(AppEvent::MessageCursorLeft),
            KeyCode::Right => Some(AppEvent::MessageCursorRight),
            KeyCode::Home => Some(AppEvent::MessageCursorHome),
            KeyCode::End => Some(AppEvent::MessageCursorEnd),
            KeyCode::Char(ch) => Some(AppEvent::MessageInputChar(ch)),
            _ => None,
        }
    }

    fn handle_folder_browser_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::BrowserCancel),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::BrowserNext),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::BrowserPrevious),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => Some(AppEvent::BrowserEnter),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Some(AppEvent::BrowserParent),
            KeyCode::Char('~') => Some(AppEvent::BrowserHome),
            KeyCode::Char('H') => Some(AppEvent::BrowserToggleHidden),
            KeyCode::Char('s') => Some(AppEvent::BrowserSelectHighlighted),
            KeyCode::Char('.') => Some(AppEvent::BrowserSelectCurrent),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::FocusMessage => state.focus = Focus::Message,
            AppEvent::OpenFolderBrowser => {
                if !state.push_in_flight {
                    state.open_folder_browser();
                }
            },
            AppEvent::TriggerPush => {
                // Ignored while disabled; the worker is started on the next tick
                if !state.push_in_flight {
                    state.pending_async_action = Some(AsyncAction::StartPush);
                }
            },
            AppEvent::ClearOutput => state.clear_output(),
            AppEvent::DismissNotification => state.dismiss_notification(),
            AppEvent::ScrollUp(rows) => state.output.scroll_up(rows),
            AppEvent::ScrollDown(rows) => state.output.scroll_down(rows),
            AppEvent::ScrollTop => state.output.scroll_to_top(),
            AppEvent::ScrollBottom => state.output.follow_tail(),
            AppEvent::MessageInputChar(ch) => state.commit_message.insert(ch),
            AppEvent::MessageBackspace => state.commit_message.backspace(),
            AppEvent::MessageDelete => state.commit_message.delete(),
            AppEvent::MessageCursorLeft => state.commit_message.move_left(),
            AppEvent::MessageCursorRight => state.commit_message.move_right(),
            AppEvent::MessageCursorHome => state.commit_message.move_home(),
            AppEvent::MessageCursorEnd => state.commit_message.move_end(),
            AppEvent::MessageClear => state.commit_message.clear(),
            AppEvent::BrowserNext => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.next();
                }
            },
            AppEvent::BrowserPrevious => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.previous();
                }
            },
            AppEvent::BrowserEnter => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.enter_selected();
                }
            },
            AppEvent::BrowserParent => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.go_to_parent();
                }
            },
            AppEvent::BrowserHome => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.go_home();
                }
            },
            AppEvent::BrowserToggleHidden => {
                if let Some(ref mut browser) = state.folder_browser {
                    browser.toggle_hidden();
                }
            },
            AppEvent::BrowserSelectHighlighted => state.confirm_folder_browser(false),
            AppEvent::BrowserSelectCurrent => state.confirm_folder_browser(true),
            AppEvent::BrowserCancel => state.cancel_folder_browser(),
        }
    }
}
