//! One-step-back buffer captured before the host applies a native edit.

use super::error::MaskError;

/// Buffer text and cursor immediately before a native edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub cursor_before: usize,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, cursor_before: usize) -> Self {
        Self {
            text: text.into(),
            cursor_before,
        }
    }
}

/// Holds at most one snapshot, scoped to a single edit cycle.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    slot: Option<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Record the pre-edit state. A leftover snapshot from an unfinished
    /// cycle is replaced.
    pub fn capture(&mut self, text: &str, cursor: usize) -> &Snapshot {
        if let Some(stale) = &self.slot {
            tracing::warn!(
                stale_cursor = stale.cursor_before,
                "Replacing snapshot from an unfinished edit cycle"
            );
        }
        self.slot.insert(Snapshot::new(text, cursor))
    }

    /// Consume the snapshot for this cycle
    pub fn take(&mut self) -> Result<Snapshot, MaskError> {
        self.slot.take().ok_or(MaskError::NoSnapshot)
    }

    /// Whether a snapshot is waiting to be consumed
    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_then_take() {
        let mut store = SnapshotStore::new();
        store.capture("+1 (XXX)", 4);
        assert!(store.is_armed());

        let snap = store.take().unwrap();
        assert_eq!(snap, Snapshot::new("+1 (XXX)", 4));
        assert!(!store.is_armed());
    }

    #[test]
    fn test_take_twice_fails() {
        let mut store = SnapshotStore::new();
        store.capture("abc", 1);
        assert!(store.take().is_ok());
        assert_eq!(store.take(), Err(MaskError::NoSnapshot));
    }

    #[test]
    fn test_take_without_capture_fails() {
        let mut store = SnapshotStore::new();
        assert_eq!(store.take(), Err(MaskError::NoSnapshot));
    }

    #[test]
    fn test_recapture_replaces() {
        let mut store = SnapshotStore::new();
        store.capture("first", 0);
        store.capture("second", 3);
        assert_eq!(store.take().unwrap().text, "second");
    }
}
