//! Editable text field.
//!
//! This module provides [`TextField`], the editing buffer behind every form
//! field and the exercise draft. The cursor is a char index, so multi-byte
//! input never splits a code point.

/// Text buffer with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the field holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position (paste).
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_start(line);
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        let len = self.text.split('\n').nth(line).map_or(0, |l| l.chars().count());
        self.cursor = self.line_start(line) + len;
    }

    fn line_start(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum()
    }

    /// Zero-based (line, column) of the cursor, in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        for c in "abc".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.text(), "abc");
        assert!(field.backspace());
        assert_eq!(field.text(), "ab");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = TextField::with_text("ac");
        field.move_left();
        field.insert_char('b');
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut field = TextField::with_text("héllo");
        field.move_home();
        field.move_right();
        field.move_right();
        assert!(field.backspace());
        assert_eq!(field.text(), "hllo");
        assert!(field.delete());
        assert_eq!(field.text(), "hlo");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::with_text("x");
        field.move_home();
        assert!(!field.backspace());
        assert_eq!(field.text(), "x");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = TextField::with_text("x");
        assert!(!field.delete());
    }

    #[test]
    fn test_is_blank() {
        assert!(TextField::new().is_blank());
        assert!(TextField::with_text("  \n\t").is_blank());
        assert!(!TextField::with_text(" x ").is_blank());
    }

    #[test]
    fn test_multiline_cursor() {
        let mut field = TextField::new();
        field.insert_str("fn main() {\n    x\n}");
        assert_eq!(field.cursor_line_col(), (2, 1));

        field.move_left();
        field.move_left();
        assert_eq!(field.cursor_line_col(), (1, 5));

        field.move_home();
        assert_eq!(field.cursor_line_col(), (1, 0));
        field.move_end();
        assert_eq!(field.cursor_line_col(), (1, 5));
        assert_eq!(field.lines().count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut field = TextField::with_text("secret");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
