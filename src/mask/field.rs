//! A masked single-line field: a `MemoryField` wired to a `MaskController`.
//!
//! Each editing method runs one full cycle in the order a native widget
//! fires its callbacks.

use super::controller::MaskController;
use super::engine::Reconciled;
use super::error::MaskError;
use super::host::{MemoryField, TextHost};

#[derive(Debug, Clone)]
pub struct MaskedField {
    controller: MaskController,
    field: MemoryField,
}

impl MaskedField {
    pub fn new(mut controller: MaskController) -> Self {
        let mut field = MemoryField::new().with_max_len(controller.template().capacity());
        controller.attach(&mut field);
        Self { controller, field }
    }

    /// Start from existing text (reset to blank if it does not fit the mask)
    pub fn with_text(mut controller: MaskController, text: &str) -> Self {
        let mut field =
            MemoryField::from_text(text).with_max_len(controller.template().capacity());
        controller.attach(&mut field);
        Self { controller, field }
    }

    pub fn controller(&self) -> &MaskController {
        &self.controller
    }

    pub fn text(&self) -> &str {
        self.field.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.field.cursor()
    }

    /// Characters entered so far
    pub fn value(&self) -> String {
        self.controller.value(&self.field)
    }

    pub fn is_complete(&self) -> bool {
        self.controller.template().is_complete(self.field.as_str())
    }

    /// Move the cursor without editing
    pub fn move_cursor(&mut self, cursor: usize) {
        self.field.set_cursor(cursor);
    }

    pub fn type_char(&mut self, ch: char) -> Result<Option<Reconciled>, MaskError> {
        self.cycle(|field| field.native_insert(ch))
    }

    pub fn backspace(&mut self) -> Result<Option<Reconciled>, MaskError> {
        self.cycle(MemoryField::native_backspace)
    }

    pub fn delete_forward(&mut self) -> Result<Option<Reconciled>, MaskError> {
        self.cycle(MemoryField::native_delete_forward)
    }

    pub fn select_all_delete(&mut self) -> Result<Option<Reconciled>, MaskError> {
        self.cycle(MemoryField::native_clear)
    }

    pub fn paste(&mut self, text: &str) -> Result<Option<Reconciled>, MaskError> {
        self.cycle(|field| field.native_paste(text))
    }

    /// Programmatic assignment of raw input
    pub fn set_value(&mut self, raw: &str) -> Reconciled {
        self.controller.set_value(&mut self.field, raw)
    }

    fn cycle(
        &mut self,
        native: impl FnOnce(&mut MemoryField) -> bool,
    ) -> Result<Option<Reconciled>, MaskError> {
        self.controller.on_before_change(&self.field);
        if !native(&mut self.field) {
            self.controller.abandon_cycle();
            return Ok(None);
        }
        self.controller.on_after_native_change(&mut self.field)
    }
}
