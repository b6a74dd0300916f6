//! The edit-cycle controller.
//!
//! A host drives one cycle per keystroke:
//!
//! 1. `on_before_change` captures a snapshot of the pre-edit text and cursor.
//! 2. The host applies the raw single-character edit itself.
//! 3. `on_after_native_change` classifies the edit, runs the mutation engine
//!    and writes the corrected text and cursor back into the host.
//!
//! While the corrected state is written back the controller's listener is
//! detached, so callbacks triggered by its own `set_text` are ignored.

use super::classify::classify_delta;
use super::delta::EditDelta;
use super::engine::{apply_with_policy, AdvancePolicy, Reconciled};
use super::error::MaskError;
use super::host::TextHost;
use super::snapshot::SnapshotStore;
use super::template::Template;

/// Whether host callbacks are currently processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    Attached,
    Detached,
}

#[derive(Debug, Clone)]
pub struct MaskController {
    template: Template,
    policy: AdvancePolicy,
    snapshots: SnapshotStore,
    listener: Listener,
    /// Last buffer and cursor written to the host
    committed: Reconciled,
}

impl MaskController {
    pub fn new(template: Template) -> Self {
        let committed = Reconciled {
            text: template.blank(),
            cursor: template.first_mutable_index(),
        };
        Self {
            template,
            policy: AdvancePolicy::default(),
            snapshots: SnapshotStore::new(),
            listener: Listener::Attached,
            committed,
        }
    }

    pub fn with_policy(mut self, policy: AdvancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    pub fn listener(&self) -> Listener {
        self.listener
    }

    pub fn is_listening(&self) -> bool {
        self.listener == Listener::Attached
    }

    /// Last known-good buffer and cursor
    pub fn committed(&self) -> &Reconciled {
        &self.committed
    }

    /// Stop processing host callbacks
    pub fn detach(&mut self) {
        self.listener = Listener::Detached;
    }

    /// Resume processing host callbacks
    pub fn reattach(&mut self) {
        self.listener = Listener::Attached;
    }

    /// Bind to a host: keep a buffer that fits the mask and its slot filter,
    /// replace anything else with the blank mask, and put the cursor on the
    /// first slot.
    pub fn attach<H: TextHost + ?Sized>(&mut self, host: &mut H) -> Reconciled {
        let current = host.text();
        let text = if self.template.fits(&current) {
            current
        } else {
            tracing::debug!(
                text = %current,
                "Host text does not fit the mask, resetting to blank"
            );
            self.template.blank()
        };
        self.snapshots.clear();
        self.commit(
            host,
            Reconciled {
                text,
                cursor: self.template.first_mutable_index(),
            },
        )
    }

    /// Phase one: capture the pre-edit state
    pub fn on_before_change<H: TextHost + ?Sized>(&mut self, host: &H) {
        if !self.is_listening() {
            tracing::trace!("Ignoring before-change callback while detached");
            return;
        }
        self.snapshots.capture(&host.text(), host.cursor());
    }

    /// Drop the pending snapshot when the host decided not to apply an edit
    pub fn abandon_cycle(&mut self) {
        self.snapshots.clear();
    }

    /// Phase three: reconcile the host's raw text.
    ///
    /// Returns `Ok(None)` when the listener is detached. On a protocol error
    /// the host is restored to the last committed state.
    pub fn on_after_native_change<H: TextHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<Reconciled>, MaskError> {
        if !self.is_listening() {
            tracing::trace!("Ignoring after-change callback while detached");
            return Ok(None);
        }

        let snapshot = match self.snapshots.take() {
            Ok(snapshot) => snapshot,
            Err(e) => return Err(self.abort(host, e)),
        };

        let raw = host.text();
        let delta = EditDelta::between(&snapshot.text, &raw, snapshot.cursor_before, host.cursor());
        let case = classify_delta(&self.template, &snapshot, &delta);

        match apply_with_policy(&self.template, &case, &snapshot, &raw, self.policy) {
            Ok(result) => {
                tracing::debug!(
                    ?case,
                    ?delta,
                    rejected = case.is_rejection(),
                    cursor_before = snapshot.cursor_before,
                    cursor_after = result.cursor,
                    "Reconciled edit"
                );
                Ok(Some(self.commit(host, result)))
            }
            Err(e) => Err(self.abort(host, e)),
        }
    }

    /// Programmatic assignment: lay `raw` into the mask and commit it
    pub fn set_value<H: TextHost + ?Sized>(&mut self, host: &mut H, raw: &str) -> Reconciled {
        let text = self.template.format(raw);
        let cursor = self.first_empty_slot(&text);
        self.snapshots.clear();
        self.commit(host, Reconciled { text, cursor })
    }

    /// Characters entered into slots, placeholders skipped
    pub fn value<H: TextHost + ?Sized>(&self, host: &H) -> String {
        self.template.extract(&host.text())
    }

    fn first_empty_slot(&self, text: &str) -> usize {
        let placeholder = self.template.placeholder();
        let chars: Vec<char> = text.chars().collect();
        self.template
            .mutable_indices()
            .iter()
            .copied()
            .find(|&i| chars.get(i) == Some(&placeholder))
            .unwrap_or_else(|| self.template.first_mutable_index())
    }

    fn commit<H: TextHost + ?Sized>(&mut self, host: &mut H, result: Reconciled) -> Reconciled {
        self.detach();
        host.set_text(&result.text);
        host.set_cursor(result.cursor);
        self.reattach();
        self.committed = result.clone();
        result
    }

    fn abort<H: TextHost + ?Sized>(&mut self, host: &mut H, err: MaskError) -> MaskError {
        tracing::error!(error = %err, "Aborting edit cycle, restoring last committed buffer");
        self.snapshots.clear();
        let restore = self.committed.clone();
        self.commit(host, restore);
        err
    }
}
