// ABOUTME: End-to-end tests of the push trigger: validation, worker events and trigger restore

mod common;

use common::{app_with, wait_for_push, HangingGit, Reply, ScriptedGit};
use git_push_tool::app::{AppEvent, EventHandler, NotificationType};
use git_push_tool::git::{remediation_hints, PushPlan, SequenceStage, Severity};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn repo_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join(".git")).unwrap();
    temp_dir
}

fn notification_types(app: &git_push_tool::app::App) -> Vec<NotificationType> {
    app.state
        .notifications
        .iter()
        .map(|n| n.notification_type)
        .collect()
}

#[tokio::test]
async fn test_successful_push_ends_done_with_one_acknowledgment() {
    let repo = repo_dir();
    let runner = Arc::new(
        ScriptedGit::new()
            .reply("commit", Reply::Exit(0, "[main 1a2b3c4] Fix bug #1 \"urgent\"\n 1 file changed", ""))
            .reply("push", Reply::Exit(0, "", "To github.com:me/repo.git\n   abc..def  main -> main\n")),
    );
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());
    app.state.commit_message.set_text(r#"Fix bug #1 "urgent""#);

    assert!(app.start_push());
    assert!(app.state.push_in_flight);
    wait_for_push(&mut app).await;

    assert_eq!(runner.subcommands(), vec!["add", "commit", "push"]);
    assert_eq!(app.state.push_stage, SequenceStage::Done);
    assert!(!app.state.push_in_flight);
    assert!(!app.is_push_running());
    assert_eq!(notification_types(&app), vec![NotificationType::Success]);
    assert!(app.state.output.contains("✓ Successfully staged all changes"));
    assert!(app.state.output.contains("✓ Successfully committed changes"));
    assert!(app.state.output.contains("✓ Successfully pushed to origin/main"));
    assert!(app.state.output.contains(r#"Fix bug #1 "urgent""#));
}

#[tokio::test]
async fn test_commit_message_is_one_argument() {
    let repo = repo_dir();
    let runner = Arc::new(ScriptedGit::new());
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());
    let message = r#"it's "quoted" $(rm -rf /) && `echo` ; \n"#;
    app.state.commit_message.set_text(message);

    app.start_push();
    wait_for_push(&mut app).await;

    let commit = runner
        .calls()
        .into_iter()
        .find(|call| call.subcommand() == "commit")
        .unwrap();
    assert_eq!(commit.args, vec!["commit".to_string(), "-m".to_string(), message.to_string()]);
    assert_eq!(commit.cwd, repo.path());
}

#[tokio::test]
async fn test_stage_failure_never_commits_or_pushes() {
    let repo = repo_dir();
    let runner = Arc::new(ScriptedGit::new().reply(
        "add",
        Reply::Exit(128, "", "fatal: Unable to create '.git/index.lock': File exists."),
    ));
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    assert_eq!(runner.subcommands(), vec!["add"]);
    assert_eq!(app.state.push_stage, SequenceStage::Aborted);
    assert!(app.state.output.contains("index.lock"));
    assert!(app.state.notifications.is_empty());
    assert!(!app.state.push_in_flight);
}

#[tokio::test]
async fn test_nothing_to_commit_still_pushes_and_finishes() {
    let repo = repo_dir();
    let runner = Arc::new(
        ScriptedGit::new()
            .reply("commit", Reply::Exit(1, "", "nothing to commit, working tree clean")),
    );
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    assert_eq!(runner.subcommands(), vec!["add", "commit", "push"]);
    assert_eq!(app.state.push_stage, SequenceStage::Done);
    let soft = app
        .state
        .output
        .lines()
        .iter()
        .find(|line| line.text.contains("No changes to commit"))
        .unwrap();
    assert_eq!(soft.severity, Severity::Info);
    assert_eq!(notification_types(&app), vec![NotificationType::Success]);
}

#[tokio::test]
async fn test_other_commit_failure_never_pushes() {
    let repo = repo_dir();
    let runner = Arc::new(
        ScriptedGit::new().reply("commit", Reply::Exit(1, "", "error: gpg failed to sign the data")),
    );
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    assert_eq!(runner.subcommands(), vec!["add", "commit"]);
    assert_eq!(app.state.push_stage, SequenceStage::Aborted);
    assert!(app.state.output.contains("error: gpg failed to sign the data"));
}

#[tokio::test]
async fn test_push_permission_denied_shows_stderr_and_hints() {
    let repo = repo_dir();
    let runner = Arc::new(
        ScriptedGit::new().reply("push", Reply::Exit(1, "", "remote: Permission denied")),
    );
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    assert_eq!(app.state.push_stage, SequenceStage::Aborted);
    assert!(app.state.output.contains("remote: Permission denied"));
    for hint in remediation_hints(&PushPlan::default()) {
        assert!(app.state.output.contains(hint.trim()), "missing hint: {hint}");
    }
    assert!(app.state.notifications.is_empty());
    assert!(!app.state.push_in_flight);
}

#[tokio::test]
async fn test_missing_git_faults_and_restores_trigger() {
    let repo = repo_dir();
    let runner = Arc::new(ScriptedGit::new().reply("add", Reply::Missing));
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    assert_eq!(app.state.push_stage, SequenceStage::Faulted);
    assert!(app.state.output.contains("Unexpected error: Failed to run git"));
    assert_eq!(notification_types(&app), vec![NotificationType::Error]);
    assert!(!app.state.push_in_flight);
    assert!(!app.is_push_running());
}

#[tokio::test]
async fn test_invalid_form_runs_no_git_commands() {
    let runner = Arc::new(ScriptedGit::new());
    let mut app = app_with(&runner);

    // No folder selected
    assert!(!app.start_push());

    // Folder selected, empty message
    let repo = repo_dir();
    app.state.select_folder(repo.path());
    app.state.commit_message.clear();
    assert!(!app.start_push());

    tokio::time::sleep(Duration::from_millis(20)).await;
    app.tick().await.unwrap();

    assert!(runner.calls().is_empty());
    assert!(!app.state.push_in_flight);
    assert_eq!(
        notification_types(&app),
        vec![NotificationType::Error, NotificationType::Error]
    );
}

#[tokio::test]
async fn test_trigger_key_starts_push_on_tick() {
    let repo = repo_dir();
    let runner = Arc::new(ScriptedGit::new());
    let mut app = app_with(&runner);
    app.state.select_folder(repo.path());

    EventHandler::process_event(AppEvent::TriggerPush, &mut app.state);
    assert!(app.state.pending_async_action.is_some());
    app.tick().await.unwrap();
    assert!(app.state.pending_async_action.is_none());

    wait_for_push(&mut app).await;
    assert_eq!(runner.subcommands(), vec!["add", "commit", "push"]);

    // Re-enabled: a second run is accepted
    app.state.dismiss_notification();
    assert!(app.start_push());
    wait_for_push(&mut app).await;
    assert_eq!(runner.calls().len(), 6);
}

#[tokio::test]
async fn test_custom_branch_reaches_push() {
    let repo = repo_dir();
    let runner = Arc::new(ScriptedGit::new());
    let mut config = git_push_tool::config::AppConfig::default();
    config.git.branch = "master".to_string();
    let dyn_runner: Arc<dyn git_push_tool::git::GitRunner + Send + Sync> = runner.clone();
    let mut app = git_push_tool::app::App::with_runner(&config, dyn_runner);
    app.state.select_folder(repo.path());

    app.start_push();
    wait_for_push(&mut app).await;

    let push = runner.calls().pop().unwrap();
    assert_eq!(push.args, vec!["push", "origin", "master"]);
    assert!(app.state.current_notification().unwrap().message.contains("origin/master"));
}

#[test]
fn test_quit_during_push_does_not_wait_for_git() {
    let repo = repo_dir();
    let (runner, started) = HangingGit::new(Duration::from_secs(4));
    let runner: Arc<dyn git_push_tool::git::GitRunner + Send + Sync> = Arc::new(runner);
    let mut app = git_push_tool::app::App::with_runner(
        &git_push_tool::config::AppConfig::default(),
        runner,
    );
    app.state.select_folder(repo.path());

    let runtime = tokio::runtime::Runtime::new().unwrap();
    EventHandler::process_event(AppEvent::TriggerPush, &mut app.state);
    runtime.block_on(app.tick()).unwrap();
    started.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(app.state.push_in_flight);

    EventHandler::process_event(AppEvent::Quit, &mut app.state);
    assert!(app.state.should_quit);

    let begin = Instant::now();
    drop(app);
    drop(runtime);
    assert!(
        begin.elapsed() < Duration::from_secs(1),
        "shutdown waited {:?} for the push worker",
        begin.elapsed()
    );
}
