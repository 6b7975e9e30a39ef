// ABOUTME: Handles validation for non-git repositories
// Probes for the git metadata marker without inspecting repository state

use std::path::Path;

/// Name of the metadata marker; a directory in normal clones, a file in worktrees.
pub const GIT_MARKER: &str = ".git";

pub fn has_git_metadata(path: &Path) -> bool {
    path.join(GIT_MARKER).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_directory_has_no_marker() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!has_git_metadata(temp_dir.path()));
    }

    #[test]
    fn test_marker_directory_detected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(".git")).unwrap();
        assert!(has_git_metadata(temp_dir.path()));
    }

    #[test]
    fn test_worktree_marker_file_detected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".git"), "gitdir: /elsewhere\n").unwrap();
        assert!(has_git_metadata(temp_dir.path()));
    }
}
