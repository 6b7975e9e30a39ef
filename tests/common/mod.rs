// ABOUTME: Shared test helpers: a scripted git runner and an App driver

#![allow(dead_code)]

use git_push_tool::app::App;
use git_push_tool::config::AppConfig;
use git_push_tool::git::{CommandOutput, GitError, GitInvocation, GitRunner};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    Exit(i32, &'static str, &'static str),
    Missing,
}

/// Answers each subcommand (`add`, `commit`, `push`) with a fixed reply and
/// records every invocation. Unscripted subcommands exit 0.
#[derive(Default)]
pub struct ScriptedGit {
    replies: HashMap<&'static str, Reply>,
    calls: Mutex<Vec<GitInvocation>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, subcommand: &'static str, reply: Reply) -> Self {
        self.replies.insert(subcommand, reply);
        self
    }

    pub fn calls(&self) -> Vec<GitInvocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| call.subcommand().to_string())
            .collect()
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, invocation: &GitInvocation) -> Result<CommandOutput, GitError> {
        self.calls.lock().unwrap().push(invocation.clone());
        match self.replies.get(invocation.subcommand()) {
            Some(Reply::Exit(code, stdout, stderr)) => Ok(CommandOutput {
                code: Some(*code),
                stdout: (*stdout).to_string(),
                stderr: (*stderr).to_string(),
            }),
            Some(Reply::Missing) => Err(GitError::Spawn {
                program: "git".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            }),
            None => Ok(CommandOutput {
                code: Some(0),
                ..CommandOutput::default()
            }),
        }
    }
}

pub fn app_with(runner: &Arc<ScriptedGit>) -> App {
    let runner: Arc<dyn GitRunner + Send + Sync> = runner.clone();
    App::with_runner(&AppConfig::default(), runner)
}

/// Ticks the app until the running push has finished.
pub async fn wait_for_push(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            app.tick().await.unwrap();
            if !app.state.push_in_flight {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("push did not finish in time");
}

/// Sleeps inside every git call, signalling once when the first call starts.
pub struct HangingGit {
    pub delay: Duration,
    pub started: Mutex<Option<std::sync::mpsc::Sender<()>>>,
}

impl HangingGit {
    pub fn new(delay: Duration) -> (Self, std::sync::mpsc::Receiver<()>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let runner = Self {
            delay,
            started: Mutex::new(Some(tx)),
        };
        (runner, rx)
    }
}

impl GitRunner for HangingGit {
    fn run(&self, _invocation: &GitInvocation) -> Result<CommandOutput, GitError> {
        if let Some(started) = self.started.lock().unwrap().take() {
            let _ = started.send(());
        }
        std::thread::sleep(self.delay);
        Ok(CommandOutput {
            code: Some(0),
            ..CommandOutput::default()
        })
    }
}
