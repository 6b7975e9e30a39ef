// ABOUTME: Application state management and push trigger lifecycle
// Owns the form fields, output log and notifications; applies worker events on the UI loop

use crate::app::commit_message::CommitMessageInput;
use crate::app::folder_browser::FolderBrowserState;
use crate::app::non_git::has_git_metadata;
use crate::app::notification::Notification;
use crate::app::output_log::OutputLog;
use crate::config::{AppConfig, Palette};
use crate::git::{spawn_push, GitRunner, PushEvent, PushOutcome, PushPlan, PushRequest, SequenceStage, Severity};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{info, warn};

pub const NO_FOLDER_SELECTED: &str = "No folder selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Folder,
    Message,
    Push,
    Output,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Folder => Focus::Message,
            Focus::Message => Focus::Push,
            Focus::Push => Focus::Output,
            Focus::Output => Focus::Folder,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Folder => Focus::Output,
            Focus::Message => Focus::Folder,
            Focus::Push => Focus::Message,
            Focus::Output => Focus::Push,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    StartPush,
}

#[derive(Debug)]
pub struct AppState {
    pub target_path: Option<PathBuf>,
    pub commit_message: CommitMessageInput,
    pub output: OutputLog,
    pub notifications: VecDeque<Notification>,
    pub focus: Focus,
    pub folder_browser: Option<FolderBrowserState>,
    pub help_visible: bool,
    pub should_quit: bool,
    /// True while a push worker runs; the trigger is disabled.
    pub push_in_flight: bool,
    pub push_stage: SequenceStage,
    pub push_plan: PushPlan,
    pub palette: Palette,
    pub show_hidden_dirs: bool,
    pub pending_async_action: Option<AsyncAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            target_path: None,
            commit_message: CommitMessageInput::new(config.ui.default_message.clone()),
            output: OutputLog::new(),
            notifications: VecDeque::new(),
            focus: Focus::Folder,
            folder_browser: None,
            help_visible: false,
            should_quit: false,
            push_in_flight: false,
            push_stage: SequenceStage::Idle,
            push_plan: config.push_plan(),
            palette: config.ui.palette.clone(),
            show_hidden_dirs: config.ui.show_hidden_dirs,
            pending_async_action: None,
        }
    }

    pub fn target_display(&self) -> String {
        self.target_path
            .as_ref()
            .map_or_else(|| NO_FOLDER_SELECTED.to_string(), |path| path.display().to_string())
    }

    pub fn log(&mut self, severity: Severity, text: &str) {
        self.output.append(severity, text);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn open_folder_browser(&mut self) {
        let start = self
            .target_path
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        self.folder_browser = Some(FolderBrowserState::new(&start, self.show_hidden_dirs));
    }

    pub fn cancel_folder_browser(&mut self) {
        self.folder_browser = None;
    }

    /// Selects the highlighted entry, or the browsed directory itself when
    /// `current` is set or nothing is highlighted.
    pub fn confirm_folder_browser(&mut self, current: bool) {
        let Some(browser) = self.folder_browser.take() else {
            return;
        };
        let chosen = if current {
            browser.current_dir.clone()
        } else {
            browser
                .selected_entry()
                .map_or_else(|| browser.current_dir.clone(), |entry| entry.path.clone())
        };
        self.show_hidden_dirs = browser.show_hidden;
        self.select_folder(&chosen);
    }

    /// Sets the target path. A folder without git metadata is still selected
    /// but raises a warning notification.
    pub fn select_folder(&mut self, path: &Path) {
        info!("Selected folder {}", path.display());
        self.target_path = Some(path.to_path_buf());
        self.log(Severity::Info, &format!("Selected folder: {}", path.display()));

        if !has_git_metadata(path) {
            warn!("{} has no git metadata", path.display());
            self.notify(Notification::warning(
                "The selected folder does not appear to be a Git repository.\n\n\
                 Make sure you've initialized git with 'git init' and added a remote.",
            ));
        }
    }

    /// Validates the form and disables the trigger. Returns `None` (after
    /// notifying the user) when the push must not start.
    pub fn request_push(&mut self) -> Option<PushRequest> {
        if self.push_in_flight {
            warn!("Push requested while another push is running");
            return None;
        }

        let Some(path) = self.target_path.clone() else {
            self.notify(Notification::error("Please select a folder first!"));
            return None;
        };

        let message = self.commit_message.submitted().to_string();
        if message.is_empty() {
            self.notify(Notification::error("Please enter a commit message!"));
            return None;
        }

        self.push_in_flight = true;
        self.push_stage = SequenceStage::Idle;
        Some(PushRequest { path, message })
    }

    pub fn apply_push_event(&mut self, event: PushEvent) {
        match event {
            PushEvent::Stage(stage) => self.push_stage = stage,
            PushEvent::Output { severity, text } => self.log(severity, &text),
            PushEvent::Finished(outcome) => self.finish_push(outcome),
        }
    }

    fn finish_push(&mut self, outcome: PushOutcome) {
        if !self.push_in_flight {
            return;
        }
        self.push_in_flight = false;
        self.push_stage = outcome.stage();

        match outcome {
            PushOutcome::Done => {
                self.notify(Notification::success(format!(
                    "Changes pushed to {} successfully!",
                    self.push_plan.target()
                )));
            }
            PushOutcome::Faulted(message) => {
                self.notify(Notification::error(format!(
                    "An unexpected error occurred:\n{message}"
                )));
            }
            PushOutcome::Aborted(stage) => {
                info!("Push aborted while {}", stage);
            }
        }
    }

    pub fn push_button_label(&self) -> String {
        if self.push_in_flight {
            format!("Processing... ({})", self.push_stage)
        } else {
            format!("🚀 Push to {}", self.push_plan.target())
        }
    }
}

pub struct App {
    pub state: AppState,
    runner: Arc<dyn GitRunner + Send + Sync>,
    push_events: Option<mpsc::UnboundedReceiver<PushEvent>>,
    needs_refresh: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_runner(config, Arc::new(config.git_runner()))
    }

    pub fn with_runner(config: &AppConfig, runner: Arc<dyn GitRunner + Send + Sync>) -> Self {
        Self {
            state: AppState::from_config(config),
            runner,
            push_events: None,
            needs_refresh: false,
        }
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        if let Some(action) = self.state.pending_async_action.take() {
            match action {
                AsyncAction::StartPush => {
                    self.start_push();
                }
            }
        }

        self.drain_push_events();
        Ok(())
    }

    /// Validates the form and, if it passes, starts the worker.
    pub fn start_push(&mut self) -> bool {
        let Some(request) = self.state.request_push() else {
            self.needs_refresh = true;
            return false;
        };
        info!(
            "Starting push for {} to {}",
            request.path.display(),
            self.state.push_plan.target()
        );
        self.push_events = Some(spawn_push(
            Arc::clone(&self.runner),
            self.state.push_plan.clone(),
            request,
        ));
        self.needs_refresh = true;
        true
    }

    fn drain_push_events(&mut self) {
        let Some(rx) = self.push_events.as_mut() else {
            return;
        };

        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    finished = matches!(event, PushEvent::Finished(_));
                    self.state.apply_push_event(event);
                    self.needs_refresh = true;
                    if finished {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Push worker channel closed without a result");
                    self.state
                        .apply_push_event(PushEvent::Finished(PushOutcome::Faulted(
                            "push worker stopped".to_string(),
                        )));
                    self.needs_refresh = true;
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.push_events = None;
        }
    }

    pub fn is_push_running(&self) -> bool {
        self.push_events.is_some()
    }

    /// Returns true once after state changed outside of key handling.
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }
}
