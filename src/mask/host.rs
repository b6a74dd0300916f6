//! Host widget surface and an in-memory single-line field.
//!
//! `TextHost` is everything the controller needs from a text widget.
//! `MemoryField` behaves like a native single-line field: edits land at the
//! cursor and an optional length filter drops characters past the limit.

use super::buffer::MaskBuffer;

/// Minimal text widget protocol consumed by the controller.
///
/// `set_text` and `set_cursor` are programmatic writes; implementations must
/// not call back into the controller from them.
pub trait TextHost {
    fn text(&self) -> String;
    fn cursor(&self) -> usize;
    fn set_text(&mut self, text: &str);
    fn set_cursor(&mut self, cursor: usize);
}

/// In-memory text field with native editing behavior.
#[derive(Debug, Clone, Default)]
pub struct MemoryField {
    buffer: MaskBuffer,
    cursor: usize,
    max_len: Option<usize>,
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field with content and the cursor at the end
    pub fn from_text(text: &str) -> Self {
        let buffer = MaskBuffer::from_text(text);
        let cursor = buffer.len_chars();
        Self {
            buffer,
            cursor,
            max_len: None,
        }
    }

    /// Drop input that would grow the text past `max_len` characters
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn room(&self) -> usize {
        match self.max_len {
            Some(max) => max.saturating_sub(self.len_chars()),
            None => usize::MAX,
        }
    }

    /// Insert at the cursor. Returns false when the length filter drops it.
    pub fn native_insert(&mut self, ch: char) -> bool {
        if self.room() == 0 {
            return false;
        }
        self.buffer.insert_char(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Insert as much of `text` as the length filter allows
    pub fn native_paste(&mut self, text: &str) -> bool {
        let accepted: Vec<char> = text.chars().take(self.room()).collect();
        if accepted.is_empty() {
            return false;
        }
        for ch in accepted {
            self.buffer.insert_char(self.cursor, ch);
            self.cursor += 1;
        }
        true
    }

    /// Delete the character before the cursor
    pub fn native_backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor..self.cursor + 1);
        true
    }

    /// Delete the character under the cursor
    pub fn native_delete_forward(&mut self) -> bool {
        if self.cursor >= self.len_chars() {
            return false;
        }
        self.buffer.remove(self.cursor..self.cursor + 1);
        true
    }

    /// Select all and delete
    pub fn native_clear(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        self.buffer = MaskBuffer::new();
        self.cursor = 0;
        true
    }
}

impl TextHost for MemoryField {
    fn text(&self) -> String {
        self.buffer.as_str().to_string()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = MaskBuffer::from_text(text);
        self.cursor = self.cursor.min(self.buffer.len_chars());
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.buffer.len_chars());
    }
}
