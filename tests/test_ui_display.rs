// ABOUTME: Test UI display components including form fields, menu bar and overlays

use git_push_tool::app::{App, Focus, Notification};
use git_push_tool::components::LayoutComponent;
use git_push_tool::config::AppConfig;
use git_push_tool::git::{PushEvent, Severity};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal.draw(|frame| {
        layout.render(frame, &app.state);
    }).unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn printable(content: &str) -> String {
    content.chars().filter(|c| c.is_ascii_graphic() || *c == ' ').collect()
}

#[tokio::test]
async fn test_form_shows_all_controls() {
    let app = App::new(&AppConfig::default());
    let content = render(&app);

    assert!(content.contains("Git Push Tool"), "header missing: {}", printable(&content));
    assert!(content.contains("Selected Repository"));
    assert!(content.contains("No folder selected"));
    assert!(content.contains("Commit Message"));
    assert!(content.contains("Updated project"));
    assert!(content.contains("Push to origin/main"));
    assert!(content.contains("Output"));
    assert!(content.contains("[p]ush"), "Should contain '[p]ush'");
    assert!(content.contains("[?]help"), "Should contain '[?]help'");
    assert!(content.contains("[q]uit"), "Should contain '[q]uit'");
}

#[tokio::test]
async fn test_output_lines_are_rendered() {
    let mut app = App::new(&AppConfig::default());
    app.state.log(Severity::Info, "Starting Git operations...");
    app.state.log(Severity::Failure, "Error in git push:\nremote: Permission denied");

    let content = render(&app);
    assert!(content.contains("Starting Git operations..."));
    assert!(content.contains("remote: Permission denied"));
}

#[tokio::test]
async fn test_button_shows_processing_while_in_flight() {
    let mut app = App::new(&AppConfig::default());
    app.state.target_path = Some(PathBuf::from("/tmp/repo"));
    app.state.request_push().unwrap();
    app.state.apply_push_event(PushEvent::Stage(git_push_tool::git::SequenceStage::Committing));

    let content = render(&app);
    assert!(content.contains("Processing... (committing)"), "content: {}", printable(&content));
    assert!(content.contains("/tmp/repo"));
}

#[tokio::test]
async fn test_notification_dialog_renders_on_top() {
    let mut app = App::new(&AppConfig::default());
    app.state.notify(Notification::error("Please enter a commit message!"));

    let content = render(&app);
    assert!(content.contains("Error"));
    assert!(content.contains("Please enter a commit message!"));
    assert!(content.contains("Press Enter to continue"));
}

#[tokio::test]
async fn test_help_screen_lists_push_key() {
    let mut app = App::new(&AppConfig::default());
    app.state.help_visible = true;

    let content = render(&app);
    assert!(content.contains("p          Stage, commit and push"),
        "Help screen should list the push key but content was: {}", printable(&content));
    assert!(content.contains("Form:"), "Should contain 'Form:' section");
    assert!(content.contains("General:"), "Should contain 'General:' section");
}

#[tokio::test]
async fn test_message_focus_changes_menu_bar() {
    let mut app = App::new(&AppConfig::default());
    app.state.focus = Focus::Message;

    let content = render(&app);
    assert!(content.contains("Typing commit message"));
}
