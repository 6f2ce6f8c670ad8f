//! State for text entry fields (the compose box and the access-key gate).

/// Maximum allowed input length in characters.
const MAX_INPUT_LENGTH: usize = 8192;

/// A cursor-addressable text buffer for keyboard editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeState {
    /// The current text being composed.
    text: String,
    /// Cursor position (character index, not byte).
    cursor_position: usize,
}

impl ComposeState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor.
    /// Returns false if the input would exceed the maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    /// Inserts a literal line break at the cursor (the commit-with-modifier
    /// variant of the compose keystroke).
    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    /// Deletes the character at the cursor position (delete key).
    pub fn delete_char_at(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor_position < char_count {
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor_position < char_count {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    /// Returns the trimmed content and resets the buffer.
    pub fn take_trimmed(&mut self) -> String {
        let taken = self.text.trim().to_owned();
        self.clear();
        taken
    }

    /// Converts character index to byte index.
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> ComposeState {
        let mut state = ComposeState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = ComposeState::default();
        assert!(state.is_empty());
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn insert_char_appends_and_moves_cursor() {
        let state = typed("Hi");

        assert_eq!(state.text(), "Hi");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn insert_char_at_middle_position() {
        let mut state = typed("Ho");
        state.move_cursor_left();
        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn insert_newline_adds_literal_line_break() {
        let mut state = typed("ab");
        state.insert_newline();
        state.insert_char('c');

        assert_eq!(state.text(), "ab\nc");
    }

    #[test]
    fn delete_char_before_removes_previous_char() {
        let mut state = typed("Hi");
        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn delete_char_before_at_start_does_nothing() {
        let mut state = typed("H");
        state.move_cursor_home();
        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_char_at_removes_current_char() {
        let mut state = typed("Hi");
        state.move_cursor_home();
        state.delete_char_at();

        assert_eq!(state.text(), "i");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn cursor_movement_is_clamped_to_text_bounds() {
        let mut state = typed("abc");

        state.move_cursor_end();
        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 3);

        state.move_cursor_home();
        state.move_cursor_left();
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn take_trimmed_returns_content_and_clears() {
        let mut state = typed("  hello there  ");

        let taken = state.take_trimmed();

        assert_eq!(taken, "hello there");
        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn take_trimmed_on_whitespace_yields_empty() {
        let mut state = typed("   ");

        assert_eq!(state.take_trimmed(), "");
        assert!(state.is_empty());
    }

    #[test]
    fn handles_unicode_characters() {
        let mut state = typed("Привет");

        assert_eq!(state.cursor_position(), 6);

        state.delete_char_before();
        assert_eq!(state.text(), "Приве");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn insert_char_respects_max_length_limit() {
        let mut state = ComposeState::default();
        for _ in 0..MAX_INPUT_LENGTH {
            assert!(state.insert_char('x'));
        }

        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
    }
}
