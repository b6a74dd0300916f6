//! Edit classification: which reconciliation rule applies to a native edit.

use super::delta::EditDelta;
use super::snapshot::Snapshot;
use super::template::Template;

/// The reconciliation rule for one edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCase {
    /// `ch` typed into a mutable slot
    GrowWithinSlot { ch: char },
    /// `ch` typed on the separator right after a group; it belongs to the next group
    GrowAtGroupBoundary { ch: char },
    /// Typed on a literal position
    GrowOnLiteral,
    /// Typed at a writable position but refused by the slot filter
    GrowRejected { ch: char },
    /// More than one character deleted at once
    ShrinkEntireSelection,
    /// A mutable slot at `at` lost its character
    ShrinkMutableChar { at: usize },
    /// Backspace from the first slot of a group
    ShrinkAtGroupStart,
    /// Deletion of a literal with nothing to clear
    ShrinkElsewhere,
    /// Paste or same-length selection replace
    BulkReplace,
}

impl EditCase {
    /// Cases that restore the snapshot verbatim
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::GrowOnLiteral
                | Self::GrowRejected { .. }
                | Self::ShrinkEntireSelection
                | Self::ShrinkElsewhere
                | Self::BulkReplace
        )
    }
}

/// Classify from the raw post-edit text, inferring the delta as typing or backspace
pub fn classify(template: &Template, snapshot: &Snapshot, raw: &str) -> EditCase {
    classify_delta(template, snapshot, &EditDelta::infer(snapshot, raw))
}

/// Classify a structured delta. Conditions are checked in order; first match wins.
pub fn classify_delta(template: &Template, snapshot: &Snapshot, delta: &EditDelta) -> EditCase {
    let p = snapshot.cursor_before;

    match *delta {
        EditDelta::Insert { ch, .. } => {
            let writable = template.is_mutable(p);
            let boundary = !writable
                && template.group_ending_at(p).is_some()
                && template.next_group_after(p).is_some();

            if !writable && !boundary {
                EditCase::GrowOnLiteral
            } else if !template.accepts(ch) {
                EditCase::GrowRejected { ch }
            } else if writable {
                EditCase::GrowWithinSlot { ch }
            } else {
                EditCase::GrowAtGroupBoundary { ch }
            }
        }
        EditDelta::Delete { count, .. } if count > 1 => EditCase::ShrinkEntireSelection,
        EditDelta::Delete { position: r, .. } => {
            if template.is_mutable(r) {
                EditCase::ShrinkMutableChar { at: r }
            } else if r + 1 == p
                && template.group_starting_at(p).is_some()
                && template.prev_mutable_index(p).is_some()
            {
                EditCase::ShrinkAtGroupStart
            } else {
                EditCase::ShrinkElsewhere
            }
        }
        EditDelta::Replace { .. } => EditCase::BulkReplace,
    }
}
