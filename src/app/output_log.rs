// ABOUTME: Append-only output console contents with severity per line
// Follows the newest line unless the user has scrolled back

use crate::git::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
    /// Rows scrolled back from the bottom; 0 follows the tail.
    scroll_back: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text`, splitting it into one entry per line. A trailing
    /// newline does not produce an empty entry.
    pub fn append(&mut self, severity: Severity, text: &str) {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let added = text.split('\n').count();
        for line in text.split('\n') {
            self.lines.push(OutputLine {
                severity,
                text: line.trim_end_matches('\r').to_string(),
            });
        }
        if self.scroll_back > 0 {
            self.scroll_back += added;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = (self.scroll_back + rows).min(self.lines.len().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_back = self.lines.len().saturating_sub(1);
    }

    pub fn follow_tail(&mut self) {
        self.scroll_back = 0;
    }

    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }
}
