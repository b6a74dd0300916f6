//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskedit::mask::{AdvancePolicy, MaskController, MaskedField, SlotKind, Template};

pub const PHONE: &str = "+1 (XXX) XXX-XXXX";
pub const FULL: &str = "+1 (123) 456-7890";

pub fn phone_template() -> Template {
    Template::build(PHONE).unwrap().digits_only()
}

/// Blank phone field with the cursor on the first slot
pub fn phone_field() -> MaskedField {
    MaskedField::new(MaskController::new(phone_template()))
}

pub fn phone_field_with_policy(policy: AdvancePolicy) -> MaskedField {
    MaskedField::new(MaskController::new(phone_template()).with_policy(policy))
}

/// Phone field holding `text` with the cursor at `cursor`
pub fn field_with(text: &str, cursor: usize) -> MaskedField {
    let mut field = MaskedField::with_text(MaskController::new(phone_template()), text);
    assert_eq!(field.text(), text, "test text must fit the mask");
    field.move_cursor(cursor);
    field
}

/// Length, literal and cursor-bound invariants
pub fn assert_invariants(template: &Template, text: &str, cursor: usize) {
    assert_eq!(
        text.chars().count(),
        template.len(),
        "length changed: {:?}",
        text
    );
    for (i, (slot, ch)) in template.slots().iter().zip(text.chars()).enumerate() {
        if let SlotKind::Literal(expected) = slot {
            assert_eq!(ch, *expected, "literal at {} overwritten in {:?}", i, text);
        }
    }
    assert!(cursor <= template.len(), "cursor {} out of bounds", cursor);
}
