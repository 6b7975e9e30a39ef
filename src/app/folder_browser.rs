// ABOUTME: Directory browser state used to pick the target repository folder

use crate::app::non_git::has_git_metadata;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_repo: bool,
}

#[derive(Debug)]
pub struct FolderBrowserState {
    pub current_dir: PathBuf,
    pub entries: Vec<FolderEntry>,
    pub selected_index: Option<usize>,
    pub show_hidden: bool,
    /// Set when the current directory could not be listed.
    pub error: Option<String>,
}

impl FolderBrowserState {
    pub fn new(start: &Path, show_hidden: bool) -> Self {
        let mut state = Self {
            current_dir: start.to_path_buf(),
            entries: Vec::new(),
            selected_index: None,
            show_hidden,
            error: None,
        };
        state.refresh();
        state
    }

    pub fn refresh(&mut self) {
        self.error = None;
        match list_subdirectories(&self.current_dir, self.show_hidden) {
            Ok(entries) => {
                debug!(
                    "Listed {} folders in {}",
                    entries.len(),
                    self.current_dir.display()
                );
                self.entries = entries;
            }
            Err(e) => {
                warn!("Failed to list {}: {}", self.current_dir.display(), e);
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
        self.selected_index = if self.entries.is_empty() { None } else { Some(0) };
    }

    pub fn selected_entry(&self) -> Option<&FolderEntry> {
        self.entries.get(self.selected_index?)
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some((current + 1) % self.entries.len());
        }
    }

    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some(if current == 0 {
                self.entries.len() - 1
            } else {
                current - 1
            });
        }
    }

    pub fn enter_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.current_dir = entry.path.clone();
            self.refresh();
        }
    }

    /// Moves to the parent directory and highlights the folder we came from.
    pub fn go_to_parent(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let previous = std::mem::replace(&mut self.current_dir, parent);
        self.refresh();
        if let Some(idx) = self.entries.iter().position(|entry| entry.path == previous) {
            self.selected_index = Some(idx);
        }
    }

    pub fn go_home(&mut self) {
        if let Some(home) = dirs::home_dir() {
            self.current_dir = home;
            self.refresh();
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.refresh();
    }

    pub fn current_is_repo(&self) -> bool {
        has_git_metadata(&self.current_dir)
    }
}

fn list_subdirectories(dir: &Path, show_hidden: bool) -> std::io::Result<Vec<FolderEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let is_repo = has_git_metadata(&path);
        entries.push(FolderEntry { name, path, is_repo });
    }
    entries.sort_by_key(|entry| entry.name.to_lowercase());
    Ok(entries)
}
