//! Mutation engine: turns a classified edit into the corrected buffer and cursor.

use serde::{Deserialize, Serialize};

use super::buffer::MaskBuffer;
use super::classify::EditCase;
use super::error::MaskError;
use super::snapshot::Snapshot;
use super::template::Template;

/// Where the cursor goes after the last slot is filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// Jump back to the first slot
    #[default]
    WrapToFirst,
    /// Keep the cursor on the slot just written
    Stay,
}

/// Corrected buffer and cursor for one edit cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub text: String,
    pub cursor: usize,
}

impl Reconciled {
    fn restore(snapshot: &Snapshot, cursor: usize) -> Self {
        Self {
            text: snapshot.text.clone(),
            cursor,
        }
    }
}

/// Apply `case` with the default advance policy
pub fn apply(
    template: &Template,
    case: &EditCase,
    snapshot: &Snapshot,
    raw: &str,
) -> Result<Reconciled, MaskError> {
    apply_with_policy(template, case, snapshot, raw, AdvancePolicy::default())
}

/// Compute the corrected buffer and cursor.
///
/// Only fails when `case` could not have come from the classifier for this
/// template, snapshot and raw text.
pub fn apply_with_policy(
    template: &Template,
    case: &EditCase,
    snapshot: &Snapshot,
    raw: &str,
    policy: AdvancePolicy,
) -> Result<Reconciled, MaskError> {
    let p = snapshot.cursor_before;
    let first = template.first_mutable_index();

    let result = match *case {
        EditCase::GrowWithinSlot { ch } => {
            if !template.is_mutable(p) {
                return Err(MaskError::invariant(format!(
                    "slot insert at non-mutable index {}",
                    p
                )));
            }
            let raw = MaskBuffer::from_text(raw);
            let raw_len = raw.len_chars();
            if raw_len != template.capacity() {
                return Err(MaskError::invariant(format!(
                    "slot insert expects {} characters, got {}",
                    template.capacity(),
                    raw_len
                )));
            }
            // Drop the old character the native insert pushed to p + 1
            let mut text = raw.slice(0..p);
            text.push(ch);
            text.push_str(&raw.slice(p + 2..raw_len));
            Reconciled {
                text,
                cursor: advance(template, p, policy),
            }
        }
        EditCase::GrowAtGroupBoundary { ch } => {
            let next = template
                .group_ending_at(p)
                .and_then(|_| template.next_group_after(p))
                .ok_or_else(|| {
                    MaskError::invariant(format!("no group follows boundary index {}", p))
                })?;
            let mut buffer = MaskBuffer::from_text(&snapshot.text);
            if !buffer.set_char(next.start, ch) {
                return Err(MaskError::invariant(format!(
                    "snapshot too short for group starting at {}",
                    next.start
                )));
            }
            Reconciled {
                text: buffer.into_string(),
                cursor: advance(template, next.start, policy),
            }
        }
        EditCase::GrowOnLiteral | EditCase::ShrinkEntireSelection | EditCase::BulkReplace => {
            Reconciled::restore(snapshot, first)
        }
        EditCase::GrowRejected { .. } => Reconciled::restore(snapshot, p),
        EditCase::ShrinkMutableChar { at } => {
            if !template.is_mutable(at) {
                return Err(MaskError::invariant(format!(
                    "placeholder restore at non-mutable index {}",
                    at
                )));
            }
            let mut buffer = MaskBuffer::from_text(raw);
            buffer.insert_char(at, template.placeholder());
            Reconciled {
                text: buffer.into_string(),
                cursor: at,
            }
        }
        EditCase::ShrinkAtGroupStart => {
            let prev = template.prev_mutable_index(p).ok_or_else(|| {
                MaskError::invariant(format!("no mutable slot before group start {}", p))
            })?;
            let mut buffer = MaskBuffer::from_text(&snapshot.text);
            buffer.set_char(prev, template.placeholder());
            Reconciled {
                text: buffer.into_string(),
                cursor: prev,
            }
        }
        EditCase::ShrinkElsewhere => Reconciled::restore(snapshot, p.min(template.len())),
    };

    if !template.conforms(&result.text) {
        return Err(MaskError::invariant(format!(
            "{:?} produced non-conforming buffer {:?}",
            case, result.text
        )));
    }

    Ok(result)
}

fn advance(template: &Template, from: usize, policy: AdvancePolicy) -> usize {
    template
        .next_mutable_index(from)
        .unwrap_or(match policy {
            AdvancePolicy::WrapToFirst => template.first_mutable_index(),
            AdvancePolicy::Stay => from,
        })
}
