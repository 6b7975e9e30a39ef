// ABOUTME: Process-level access to the git binary used by the push sequence
// Invocations carry a discrete argument vector, never an interpolated shell string

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Working directory not found: {0}")]
    MissingWorkingDirectory(PathBuf),
}

/// A single git command: the directory it runs in and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    pub cwd: PathBuf,
    pub args: Vec<String>,
}

impl GitInvocation {
    pub fn new<I, S>(cwd: &Path, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cwd: cwd.to_path_buf(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// First argument, e.g. `add`, `commit`, `push`.
    pub fn subcommand(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }
}

impl fmt::Display for GitInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    fn run(&self, invocation: &GitInvocation) -> Result<CommandOutput, GitError>;
}

/// Runs the real git binary found on `PATH` (or a configured program).
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    disable_terminal_prompt: bool,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            disable_terminal_prompt: true,
        }
    }

    pub fn with_terminal_prompt_disabled(mut self, disabled: bool) -> Self {
        self.disable_terminal_prompt = disabled;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    fn run(&self, invocation: &GitInvocation) -> Result<CommandOutput, GitError> {
        if !invocation.cwd.is_dir() {
            return Err(GitError::MissingWorkingDirectory(invocation.cwd.clone()));
        }

        debug!("Running {} in {}", invocation, invocation.cwd.display());

        let mut command = Command::new(&self.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null());
        if self.disable_terminal_prompt {
            command.env("GIT_TERMINAL_PROMPT", "0");
        }

        let output = command.output().map_err(|source| GitError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("{} exited with {:?}", invocation.subcommand(), result.code);
        Ok(result)
    }
}
