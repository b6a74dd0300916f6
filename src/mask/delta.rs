//! Structured description of the native edit the host applied.
//!
//! Computed once per cycle from the pre-edit and post-edit text so the
//! classifier never re-derives it from string lengths.

use super::snapshot::Snapshot;

/// A single native edit, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDelta {
    /// One character `ch` inserted at `position`
    Insert { position: usize, ch: char },
    /// `count` characters removed starting at `position`
    Delete { position: usize, count: usize },
    /// Anything else: a paste, or a selection replaced in place
    Replace {
        position: usize,
        removed: usize,
        inserted: usize,
    },
}

impl EditDelta {
    /// Diff the pre-edit and post-edit text.
    ///
    /// `cursor_before` locates an insertion (hosts insert at the cursor),
    /// `cursor_after` locates a deletion (hosts leave the cursor at the gap).
    pub fn between(before: &str, after: &str, cursor_before: usize, cursor_after: usize) -> Self {
        let before_len = before.chars().count();
        let after_len = after.chars().count();

        if after_len == before_len + 1 {
            let position = cursor_before.min(before_len);
            if let Some(ch) = after.chars().nth(position) {
                return Self::Insert { position, ch };
            }
        } else if after_len < before_len {
            return Self::Delete {
                position: cursor_after.min(after_len),
                count: before_len - after_len,
            };
        }

        let prefix = before
            .chars()
            .zip(after.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = before_len.min(after_len) - prefix;
        let suffix = before
            .chars()
            .rev()
            .zip(after.chars().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Self::Replace {
            position: prefix,
            removed: before_len - prefix - suffix,
            inserted: after_len - prefix - suffix,
        }
    }

    /// Infer the delta when only the raw text is known, assuming the host
    /// moved the cursor the way typing and backspace do.
    pub fn infer(snapshot: &Snapshot, raw: &str) -> Self {
        let p = snapshot.cursor_before;
        let raw_len = raw.chars().count();
        let before_len = snapshot.text.chars().count();
        let cursor_after = if raw_len > before_len {
            p + 1
        } else if raw_len + 1 == before_len {
            p.saturating_sub(1)
        } else {
            0
        };
        Self::between(&snapshot.text, raw, p, cursor_after)
    }
}
