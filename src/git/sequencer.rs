// ABOUTME: Stage/commit/push sequence run against a selected repository
// Emits status events over a channel so the UI can apply them on its own loop

use crate::git::runner::{CommandOutput, GitError, GitInvocation, GitRunner};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Phrase git prints when a commit would record no changes.
pub const NOTHING_TO_COMMIT: &str = "nothing to commit";

const SEPARATOR_WIDTH: usize = 60;
const WORKER_THREAD_NAME: &str = "git-push-worker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Plain,
    Info,
    Success,
    Warning,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStage {
    Idle,
    Staging,
    Committing,
    Pushing,
    Done,
    Aborted,
    Faulted,
}

impl SequenceStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Staging => "staging",
            Self::Committing => "committing",
            Self::Pushing => "pushing",
            Self::Done => "done",
            Self::Aborted => "aborted",
            Self::Faulted => "faulted",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted | Self::Faulted)
    }
}

impl fmt::Display for SequenceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Done,
    /// Stopped at the given step after a non-zero exit.
    Aborted(SequenceStage),
    Faulted(String),
}

impl PushOutcome {
    pub fn stage(&self) -> SequenceStage {
        match self {
            Self::Done => SequenceStage::Done,
            Self::Aborted(_) => SequenceStage::Aborted,
            Self::Faulted(_) => SequenceStage::Faulted,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    Stage(SequenceStage),
    Output { severity: Severity, text: String },
    Finished(PushOutcome),
}

/// Where a push goes. Both values come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPlan {
    pub remote: String,
    pub branch: String,
}

impl PushPlan {
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    pub fn target(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }
}

impl Default for PushPlan {
    fn default() -> Self {
        Self::new("origin", "main")
    }
}

/// The two form fields, read at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    pub path: PathBuf,
    pub message: String,
}

pub struct PushSequencer<'a, R: GitRunner + ?Sized> {
    runner: &'a R,
    plan: &'a PushPlan,
}

impl<'a, R: GitRunner + ?Sized> PushSequencer<'a, R> {
    pub fn new(runner: &'a R, plan: &'a PushPlan) -> Self {
        Self { runner, plan }
    }

    /// Runs the whole sequence, sending every status event to `events`.
    /// Exactly one `PushEvent::Finished` is sent, even if a step panics.
    pub fn run(&self, request: &PushRequest, events: &mpsc::UnboundedSender<PushEvent>) -> PushOutcome {
        let mut reporter = Reporter::new(events);
        info!(
            "Starting push sequence in {} to {}",
            request.path.display(),
            self.plan.target()
        );

        let outcome = match self.run_steps(request, &mut reporter) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Push sequence faulted: {}", e);
                reporter.line(Severity::Failure, format!("\nUnexpected error: {e}"));
                PushOutcome::Faulted(e.to_string())
            }
        };

        info!("Push sequence finished: {:?}", outcome);
        reporter.finish(outcome.clone());
        outcome
    }

    fn run_steps(&self, request: &PushRequest, reporter: &mut Reporter<'_>) -> Result<PushOutcome, GitError> {
        reporter.line(Severity::Plain, separator());
        reporter.line(Severity::Info, "Starting Git operations...");

        reporter.stage(SequenceStage::Staging);
        let output = self.step(request, reporter, ["add", "."])?;
        if !output.success() {
            warn!("git add failed with {:?}", output.code);
            reporter.line(Severity::Failure, format!("Error in git add:\n{}", output.stderr));
            return Ok(PushOutcome::Aborted(SequenceStage::Staging));
        }
        reporter.line(Severity::Success, "✓ Successfully staged all changes");

        reporter.stage(SequenceStage::Committing);
        let output = self.step(request, reporter, ["commit", "-m", request.message.as_str()])?;
        if output.success() {
            reporter.line(
                Severity::Success,
                format!("✓ Successfully committed changes\n{}", output.stdout),
            );
        } else if output.contains(NOTHING_TO_COMMIT) {
            info!("Nothing to commit, continuing to push");
            reporter.line(Severity::Info, "ℹ No changes to commit");
        } else {
            warn!("git commit failed with {:?}", output.code);
            reporter.line(
                Severity::Failure,
                format!("Error in git commit:\n{}\n{}", output.stderr, output.stdout),
            );
            return Ok(PushOutcome::Aborted(SequenceStage::Committing));
        }

        reporter.stage(SequenceStage::Pushing);
        let output = self.step(
            request,
            reporter,
            ["push", self.plan.remote.as_str(), self.plan.branch.as_str()],
        )?;
        if !output.success() {
            warn!("git push failed with {:?}", output.code);
            reporter.line(Severity::Failure, format!("Error in git push:\n{}", output.stderr));
            for hint in remediation_hints(self.plan) {
                reporter.line(Severity::Warning, hint);
            }
            return Ok(PushOutcome::Aborted(SequenceStage::Pushing));
        }

        reporter.line(
            Severity::Success,
            format!("✓ Successfully pushed to {}\n{}", self.plan.target(), output.stderr),
        );
        reporter.line(Severity::Plain, separator());
        reporter.line(Severity::Success, "🎉 All operations completed successfully!");
        Ok(PushOutcome::Done)
    }

    fn step<const N: usize>(
        &self,
        request: &PushRequest,
        reporter: &mut Reporter<'_>,
        args: [&str; N],
    ) -> Result<CommandOutput, GitError> {
        let invocation = GitInvocation::new(&request.path, args);
        reporter.line(Severity::Plain, format!("Running: {invocation}"));
        self.runner.run(&invocation)
    }
}

/// Checklist printed after a failed push.
pub fn remediation_hints(plan: &PushPlan) -> Vec<String> {
    vec![
        "\nTip: Make sure you have:".to_string(),
        format!("  • Set up a remote named '{}'", plan.remote),
        format!("  • A branch named '{}' (or set git.branch / --branch)", plan.branch),
        "  • Proper authentication configured".to_string(),
    ]
}

fn separator() -> String {
    format!("\n{}", "=".repeat(SEPARATOR_WIDTH))
}

/// Starts the sequence on a detached worker thread and returns the event
/// stream. The worker is never joined, so quitting mid-push does not wait
/// for git; the stream ends after `PushEvent::Finished`.
pub fn spawn_push(
    runner: Arc<dyn GitRunner + Send + Sync>,
    plan: PushPlan,
    request: PushRequest,
) -> mpsc::UnboundedReceiver<PushEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    let worker_tx = tx.clone();
    let spawned = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            PushSequencer::new(runner.as_ref(), &plan).run(&request, &worker_tx);
        });
    if let Err(e) = spawned {
        error!("Failed to start push worker: {}", e);
        let _ = tx.send(PushEvent::Finished(PushOutcome::Faulted(format!(
            "failed to start push worker: {e}"
        ))));
    }
    rx
}

/// Sends events for one run; reports a fault on drop if the run never finished.
struct Reporter<'a> {
    events: &'a mpsc::UnboundedSender<PushEvent>,
    finished: bool,
}

impl<'a> Reporter<'a> {
    fn new(events: &'a mpsc::UnboundedSender<PushEvent>) -> Self {
        Self { events, finished: false }
    }

    fn send(&self, event: PushEvent) {
        // A closed receiver means the UI is gone; the run continues regardless.
        let _ = self.events.send(event);
    }

    fn stage(&self, stage: SequenceStage) {
        self.send(PushEvent::Stage(stage));
    }

    fn line(&self, severity: Severity, text: impl Into<String>) {
        self.send(PushEvent::Output {
            severity,
            text: text.into(),
        });
    }

    fn finish(&mut self, outcome: PushOutcome) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.stage(outcome.stage());
        self.send(PushEvent::Finished(outcome));
    }
}

impl Drop for Reporter<'_> {
    fn drop(&mut self) {
        if !self.finished {
            error!("Push worker stopped before finishing");
            self.line(Severity::Failure, "\nUnexpected error: push worker stopped");
            self.finish(PushOutcome::Faulted("push worker stopped".to_string()));
        }
    }
}
