//! Single-line input used for file names, search terms and commands.

use super::line::Line;

/// Longest answer a prompt accepts, in bytes.
pub const PROMPT_MAX_LEN: usize = 255;

/// An edit applied to a [`LinePrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Char(u8),
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Submit,
    Cancel,
}

/// Result of feeding a key to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Submitted(Vec<u8>),
    Cancelled,
}

/// A label plus an editable answer with its own cursor.
#[derive(Debug, Clone)]
pub struct LinePrompt {
    label: String,
    input: Line,
    cursor: usize,
    max_len: usize,
}

impl LinePrompt {
    /// Start a prompt with `initial` already typed and the cursor after it.
    pub fn new(label: impl Into<String>, initial: &[u8]) -> Self {
        let initial = &initial[..initial.len().min(PROMPT_MAX_LEN)];
        Self {
            label: label.into(),
            input: Line::from_bytes(initial),
            cursor: initial.len(),
            max_len: PROMPT_MAX_LEN,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input(&self) -> &[u8] {
        self.input.text()
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle(&mut self, key: PromptKey) -> PromptOutcome {
        match key {
            PromptKey::Char(byte) => {
                if self.input.len() < self.max_len {
                    self.input.insert(self.cursor, &[byte]);
                    self.cursor += 1;
                }
            }
            PromptKey::Left => self.cursor = self.cursor.saturating_sub(1),
            PromptKey::Right => self.cursor = (self.cursor + 1).min(self.input.len()),
            PromptKey::Home => self.cursor = 0,
            PromptKey::End => self.cursor = self.input.len(),
            PromptKey::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor, 1);
                }
            }
            PromptKey::Delete => self.input.remove(self.cursor, 1),
            PromptKey::Submit => return PromptOutcome::Submitted(self.input.text().to_vec()),
            PromptKey::Cancel => return PromptOutcome::Cancelled,
        }
        PromptOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(prompt: &mut LinePrompt, s: &str) {
        for byte in s.bytes() {
            prompt.handle(PromptKey::Char(byte));
        }
    }

    #[test]
    fn test_initial_text_is_editable() {
        let mut prompt = LinePrompt::new("Save as: ", b"notes.txt");
        assert_eq!(prompt.cursor(), 9);
        prompt.handle(PromptKey::Home);
        type_str(&mut prompt, "old_");
        assert_eq!(
            prompt.handle(PromptKey::Submit),
            PromptOutcome::Submitted(b"old_notes.txt".to_vec())
        );
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut prompt = LinePrompt::new("> ", b"");
        type_str(&mut prompt, "abcd");
        prompt.handle(PromptKey::Left);
        prompt.handle(PromptKey::Left);
        prompt.handle(PromptKey::Backspace);
        prompt.handle(PromptKey::Delete);
        assert_eq!(prompt.input(), b"ad");
        assert_eq!(prompt.cursor(), 1);
        prompt.handle(PromptKey::End);
        prompt.handle(PromptKey::Delete);
        assert_eq!(prompt.input(), b"ad");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut prompt = LinePrompt::new("> ", b"ab");
        prompt.handle(PromptKey::Right);
        assert_eq!(prompt.cursor(), 2);
        prompt.handle(PromptKey::Home);
        prompt.handle(PromptKey::Left);
        prompt.handle(PromptKey::Backspace);
        assert_eq!(prompt.cursor(), 0);
        assert_eq!(prompt.input(), b"ab");
    }

    #[test]
    fn test_input_is_capped() {
        let mut prompt = LinePrompt::new("> ", b"");
        type_str(&mut prompt, &"x".repeat(PROMPT_MAX_LEN + 10));
        assert_eq!(prompt.input().len(), PROMPT_MAX_LEN);
    }

    #[test]
    fn test_cancel() {
        let mut prompt = LinePrompt::new("> ", b"abc");
        assert_eq!(prompt.handle(PromptKey::Cancel), PromptOutcome::Cancelled);
    }
}
