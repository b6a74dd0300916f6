//! Keystroke scripts for replaying edits against a masked field.
//!
//! Script syntax:
//! - any character types it
//! - `<` backspace, `>` forward delete, `!` select-all + delete
//! - `@N` moves the cursor to index N
//! - `[text]` pastes `text`
//! - `\c` types `c` literally (for `<`, `>`, `!`, `@`, `[`, `\`)

use serde::Serialize;

use crate::mask::{MaskError, MaskedField, Reconciled};

/// One user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "arg", rename_all = "snake_case")]
pub enum Keystroke {
    Type(char),
    Backspace,
    DeleteForward,
    SelectAllDelete,
    MoveTo(usize),
    Paste(String),
}

/// Errors that can occur when parsing a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    MissingCursorIndex { offset: usize },
    UnterminatedPaste { offset: usize },
    DanglingEscape,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::MissingCursorIndex { offset } => {
                write!(f, "'@' at offset {} is not followed by an index", offset)
            }
            ScriptError::UnterminatedPaste { offset } => {
                write!(f, "'[' at offset {} has no closing ']'", offset)
            }
            ScriptError::DanglingEscape => write!(f, "script ends with '\\'"),
        }
    }
}

impl std::error::Error for ScriptError {}

pub fn parse(script: &str) -> Result<Vec<Keystroke>, ScriptError> {
    let chars: Vec<char> = script.chars().collect();
    let mut keys = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        let key = match c {
            '<' => Keystroke::Backspace,
            '>' => Keystroke::DeleteForward,
            '!' => Keystroke::SelectAllDelete,
            '\\' => {
                let escaped = chars.get(i).copied().ok_or(ScriptError::DanglingEscape)?;
                i += 1;
                Keystroke::Type(escaped)
            }
            '@' => {
                let digits: String = chars[i..]
                    .iter()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                let index = digits
                    .parse()
                    .map_err(|_| ScriptError::MissingCursorIndex { offset: i - 1 })?;
                i += digits.len();
                Keystroke::MoveTo(index)
            }
            '[' => {
                let close = chars[i..]
                    .iter()
                    .position(|&c| c == ']')
                    .ok_or(ScriptError::UnterminatedPaste { offset: i - 1 })?;
                let text: String = chars[i..i + close].iter().collect();
                i += close + 1;
                Keystroke::Paste(text)
            }
            other => Keystroke::Type(other),
        };
        keys.push(key);
    }

    Ok(keys)
}

impl MaskedField {
    /// Run one keystroke. Cursor moves are not edit cycles and return `Ok(None)`.
    pub fn press(&mut self, key: &Keystroke) -> Result<Option<Reconciled>, MaskError> {
        match key {
            Keystroke::Type(ch) => self.type_char(*ch),
            Keystroke::Backspace => self.backspace(),
            Keystroke::DeleteForward => self.delete_forward(),
            Keystroke::SelectAllDelete => self.select_all_delete(),
            Keystroke::MoveTo(index) => {
                self.move_cursor(*index);
                Ok(None)
            }
            Keystroke::Paste(text) => self.paste(text),
        }
    }
}
