// ABOUTME: Main entry point for the Git Push Tool TUI and headless runner

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    Terminal,
};
use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::{Duration, Instant},
};

use git_push_tool::app::{App, EventHandler};
use git_push_tool::components::LayoutComponent;
use git_push_tool::config::{AppConfig, LoggingConfig};
use git_push_tool::git::PushRequest;
use git_push_tool::headless::HeadlessRun;

#[derive(Parser, Debug)]
#[command(
    name = "git-push-tool",
    version,
    about = "Stage, commit and push a Git repository from a terminal form"
)]
struct Cli {
    /// Repository folder to preselect
    #[arg(index = 1)]
    path: Option<PathBuf>,

    /// Commit message (defaults to ui.default_message)
    #[arg(short, long)]
    message: Option<String>,

    /// Remote to push to (overrides git.remote)
    #[arg(long)]
    remote: Option<String>,

    /// Branch to push (overrides git.branch)
    #[arg(long)]
    branch: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the sequence once and print the output instead of opening the TUI
    #[arg(long, requires = "path")]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(remote) = cli.remote.clone() {
        config.git.remote = remote;
    }
    if let Some(branch) = cli.branch.clone() {
        config.git.branch = branch;
    }
    if let Some(message) = cli.message.clone() {
        config.ui.default_message = message;
    }

    setup_logging(&config.logging)?;

    if cli.headless {
        return run_headless(&cli, &config).await;
    }

    setup_panic_handler();

    let mut app = App::new(&config);
    if let Some(path) = cli.path.as_deref() {
        app.state.select_folder(path);
    }
    let mut layout = LayoutComponent::new();

    run_tui(&mut app, &mut layout, Duration::from_millis(config.ui.tick_rate_ms)).await?;

    Ok(ExitCode::SUCCESS)
}

async fn run_headless(cli: &Cli, config: &AppConfig) -> Result<ExitCode> {
    let path = cli.path.clone().context("--headless needs a repository path")?;
    let request = PushRequest {
        path,
        message: config.ui.default_message.clone(),
    };

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut run = HeadlessRun {
        palette: &config.ui.palette,
        out: stdout.lock(),
        color,
    };

    let outcome = run
        .run(Arc::new(config.git_runner()), config.push_plan(), request)
        .await?;

    Ok(if outcome.is_done() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(anyhow::anyhow!("Terminal not compatible: stdout is not a TTY (use --headless)"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(app, layout, &mut terminal, tick_rate).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::Paste(text) => {
                    if app.state.focus == git_push_tool::app::Focus::Message {
                        for ch in text.chars().filter(|c| !c.is_control()) {
                            app.state.commit_message.insert(ch);
                        }
                    }
                }
                Event::Mouse(_) | Event::Resize(_, _) | Event::FocusGained | Event::FocusLost => {}
            }
        }

        // A pending push starts right away rather than on the next tick
        if last_tick.elapsed() >= tick_rate || app.state.pending_async_action.is_some() {
            match app.tick().await {
                Ok(()) => {
                    last_tick = Instant::now();

                    if app.needs_ui_refresh() {
                        terminal.draw(|frame| {
                            layout.render(frame, &app.state);
                        })?;
                    }
                }
                Err(e) => {
                    use tracing::error;
                    error!("Error during app tick: {}", e);
                    // Continue running instead of crashing
                    last_tick = Instant::now();
                }
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging(logging: &LoggingConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = logging.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "git-push-tool-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false) // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter.clone().into())
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Push workers report their own panics; only the UI thread owns the terminal
        if std::thread::current().name() != Some("main") {
            error!("Worker panicked: {}", panic_info);
            return;
        }

        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
