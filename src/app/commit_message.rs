// ABOUTME: Single-line commit message input with a character-indexed cursor

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageInput {
    text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    cursor: usize,
}

impl CommitMessageInput {
    pub fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Message as submitted: surrounding whitespace removed.
    pub fn submitted(&self) -> &str {
        self.text.trim()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn insert(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

impl Default for CommitMessageInput {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let input = CommitMessageInput::new("Updated project");
        assert_eq!(input.cursor(), 15);
    }

    #[test]
    fn test_insert_and_backspace_mid_text() {
        let mut input = CommitMessageInput::new("Fix bug");
        input.move_home();
        input.insert('"');
        input.move_end();
        input.insert('"');
        assert_eq!(input.text(), "\"Fix bug\"");

        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "\"Fix bu\"");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = CommitMessageInput::new("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "hllo");
        input.insert('é');
        input.delete();
        assert_eq!(input.text(), "hélo");
    }

    #[test]
    fn test_submitted_trims_whitespace() {
        let mut input = CommitMessageInput::new("   ");
        assert_eq!(input.submitted(), "");
        input.set_text("  ship it  ");
        assert_eq!(input.submitted(), "ship it");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = CommitMessageInput::new("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.text(), "ab");
    }
}
