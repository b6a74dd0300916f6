//! Character-indexed string buffer used for every splice in the engine.
//!
//! Mask positions are `char` offsets; `MaskBuffer` converts them to byte
//! offsets internally so literals like `€` or `·` never split a code point.

use std::ops::Range;

/// String wrapper addressed by character offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskBuffer {
    text: String,
}

impl MaskBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a MaskBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get character at offset, None if out of bounds
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    /// Get slice of text as String (by character indices, clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Insert single character at character offset
    pub fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    /// Remove text in character range
    pub fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }

    /// Overwrite the character at `offset`. Returns false when out of bounds.
    pub fn set_char(&mut self, offset: usize, ch: char) -> bool {
        if offset >= self.len_chars() {
            return false;
        }
        self.remove(offset..offset + 1);
        self.insert_char(offset, ch);
        true
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
