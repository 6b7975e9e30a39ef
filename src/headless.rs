// ABOUTME: Runs one push sequence without the TUI, printing coloured output lines

use crate::app::non_git::has_git_metadata;
use crate::config::Palette;
use crate::git::{spawn_push, GitRunner, PushEvent, PushOutcome, PushPlan, PushRequest, Severity};
use anyhow::{bail, Result};
use crossterm::style::{ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use ratatui::style::Color;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

pub struct HeadlessRun<'a, W: Write> {
    pub palette: &'a Palette,
    pub out: W,
    pub color: bool,
}

impl<W: Write> HeadlessRun<'_, W> {
    /// Validates the request, runs the sequence and prints every line.
    /// Input errors are returned before any git command runs.
    pub async fn run(
        &mut self,
        runner: Arc<dyn GitRunner + Send + Sync>,
        plan: PushPlan,
        request: PushRequest,
    ) -> Result<PushOutcome> {
        if request.message.trim().is_empty() {
            bail!("Please enter a commit message!");
        }
        if !request.path.is_dir() {
            bail!("Not a folder: {}", request.path.display());
        }

        let request = PushRequest {
            message: request.message.trim().to_string(),
            ..request
        };

        self.print(Severity::Info, &format!("Selected folder: {}", request.path.display()))?;
        if !has_git_metadata(&request.path) {
            warn!("{} has no git metadata", request.path.display());
            self.print(
                Severity::Warning,
                "Warning: the selected folder does not appear to be a Git repository.",
            )?;
        }

        let mut events = spawn_push(runner, plan, request);
        let mut outcome = None;
        while let Some(event) = events.recv().await {
            match event {
                PushEvent::Stage(_) => {}
                PushEvent::Output { severity, text } => self.print(severity, &text)?,
                PushEvent::Finished(result) => {
                    outcome = Some(result);
                    break;
                }
            }
        }

        let outcome =
            outcome.unwrap_or_else(|| PushOutcome::Faulted("push worker stopped".to_string()));
        info!("Headless push finished: {:?}", outcome);
        Ok(outcome)
    }

    fn print(&mut self, severity: Severity, text: &str) -> Result<()> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let color = self.palette.color(severity);
        if self.color && color != Color::Reset {
            self.out.queue(SetForegroundColor(color.into()))?;
            writeln!(self.out, "{text}")?;
            self.out.queue(ResetColor)?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
