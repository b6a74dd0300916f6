//! Input-mask engine for fixed-template single-line fields.
//!
//! A template such as `+1 (XXX) XXX-XXXX` mixes literal characters with
//! mutable slots. The host widget applies each keystroke natively; the engine
//! then reconciles the raw result so the buffer keeps the template's length
//! and literals, and moves the cursor to where the next character belongs.
//!
//! # Architecture
//!
//! - [`Template`]: parsed mask with slot and group lookups
//! - [`MaskBuffer`]: character-indexed string used for splicing
//! - [`SnapshotStore`]: one-step-back buffer for the current cycle
//! - [`EditDelta`]: the native edit as a structured value
//! - [`classify`] / [`classify_delta`]: pick the [`EditCase`]
//! - [`apply`] / [`apply_with_policy`]: corrected buffer and cursor
//! - [`MaskController`]: before/after callbacks, listener guard, recovery
//! - [`TextHost`] / [`MemoryField`] / [`MaskedField`]: the widget side
//!
//! # Example
//!
//! ```ignore
//! use maskedit::mask::{MaskController, MaskedField, Template};
//!
//! let template = Template::build("+1 (XXX) XXX-XXXX")?.digits_only();
//! let mut field = MaskedField::new(MaskController::new(template));
//!
//! for ch in "6135550123".chars() {
//!     field.type_char(ch)?;
//! }
//!
//! assert_eq!(field.text(), "+1 (613) 555-0123");
//! ```

mod buffer;
mod classify;
mod controller;
mod delta;
mod engine;
mod error;
mod field;
mod host;
mod snapshot;
mod template;

pub use buffer::MaskBuffer;
pub use classify::{classify, classify_delta, EditCase};
pub use controller::{Listener, MaskController};
pub use delta::EditDelta;
pub use engine::{apply, apply_with_policy, AdvancePolicy, Reconciled};
pub use error::MaskError;
pub use field::MaskedField;
pub use host::{MemoryField, TextHost};
pub use snapshot::{Snapshot, SnapshotStore};
pub use template::{
    Group, SlotFilter, SlotKind, Template, DEFAULT_PLACEHOLDER, DEFAULT_SLOT_MARKER,
};
