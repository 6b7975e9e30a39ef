// ABOUTME: Application configuration loaded from TOML with defaults for every field
// Covers the push target, form defaults, output palette and log output

use crate::git::{PushPlan, Severity, SystemGit};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const APP_DIR_NAME: &str = "git-push-tool";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub git: GitConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub program: String,
    pub remote: String,
    pub branch: String,
    /// Sets `GIT_TERMINAL_PROMPT=0` so credential prompts fail instead of
    /// writing to the raw-mode terminal.
    pub disable_terminal_prompt: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
            branch: "main".to_string(),
            disable_terminal_prompt: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_message: String,
    pub tick_rate_ms: u64,
    pub show_hidden_dirs: bool,
    pub palette: Palette,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_message: "Updated project".to_string(),
            tick_rate_ms: 250,
            show_hidden_dirs: false,
            palette: Palette::default(),
        }
    }
}

/// Display colour per output severity. Values are colour names
/// (`red`, `lightblue`, `reset`, ...) or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub plain: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub failure: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            plain: "reset".to_string(),
            info: "blue".to_string(),
            success: "green".to_string(),
            warning: "#ffa500".to_string(),
            failure: "red".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, severity: Severity) -> Color {
        let (value, fallback) = match severity {
            Severity::Plain => (&self.plain, Color::Reset),
            Severity::Info => (&self.info, Color::Blue),
            Severity::Success => (&self.success, Color::Green),
            Severity::Warning => (&self.warning, Color::Rgb(255, 165, 0)),
            Severity::Failure => (&self.failure, Color::Red),
        };
        parse_color(value).unwrap_or(fallback)
    }
}

fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("reset") || value.eq_ignore_ascii_case("default") {
        return Some(Color::Reset);
    }
    if value.eq_ignore_ascii_case("orange") {
        return Some(Color::Rgb(255, 165, 0));
    }
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Unknown palette colour '{}', using default", value);
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log directory; `~/.git-push-tool/logs` when unset.
    pub directory: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: "git_push_tool=info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.directory {
            return dir.clone();
        }
        dirs::home_dir()
            .map(|home| home.join(format!(".{APP_DIR_NAME}")).join("logs"))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}/logs")))
    }
}

impl AppConfig {
    /// `<config_dir>/git-push-tool/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given (it must exist), otherwise the default path
    /// when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn push_plan(&self) -> PushPlan {
        PushPlan::new(self.git.remote.clone(), self.git.branch.clone())
    }

    pub fn git_runner(&self) -> SystemGit {
        SystemGit::new(self.git.program.clone())
            .with_terminal_prompt_disabled(self.git.disable_terminal_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.push_plan(), PushPlan::new("origin", "main"));
        assert_eq!(config.ui.default_message, "Updated project");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r##"
            [git]
            branch = "master"

            [ui.palette]
            warning = "yellow"
            "##,
        )
        .unwrap();

        assert_eq!(config.git.branch, "master");
        assert_eq!(config.git.remote, "origin");
        assert_eq!(config.ui.palette.warning, "yellow");
        assert_eq!(config.ui.palette.info, "blue");
        assert_eq!(config.ui.palette.color(Severity::Warning), Color::Yellow);
    }

    #[test]
    fn test_default_palette_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Severity::Plain), Color::Reset);
        assert_eq!(palette.color(Severity::Info), Color::Blue);
        assert_eq!(palette.color(Severity::Success), Color::Green);
        assert_eq!(palette.color(Severity::Warning), Color::Rgb(255, 165, 0));
        assert_eq!(palette.color(Severity::Failure), Color::Red);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let palette = Palette {
            failure: "not-a-colour".to_string(),
            ..Palette::default()
        };
        assert_eq!(palette.color(Severity::Failure), Color::Red);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[git\nbranch = ").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_log_dir_override() {
        let logging = LoggingConfig {
            directory: Some(PathBuf::from("/var/log/push")),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.log_dir(), PathBuf::from("/var/log/push"));
    }
}
