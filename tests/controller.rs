//! Controller protocol tests against a host that records every write

mod common;

use common::{phone_template, FULL};
use maskedit::mask::{Listener, MaskController, MaskError, TextHost};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Write {
    Text(String),
    Cursor(usize),
}

/// Host that keeps its text as chars and logs programmatic writes
#[derive(Default)]
struct RecordingHost {
    chars: Vec<char>,
    cursor: usize,
    writes: Vec<Write>,
}

impl RecordingHost {
    fn with_text(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
            writes: Vec::new(),
        }
    }

    fn type_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl TextHost for RecordingHost {
    fn text(&self) -> String {
        self.as_string()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.writes.push(Write::Text(text.to_string()));
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.chars.len());
        self.writes.push(Write::Cursor(cursor));
    }
}

fn attached(text: &str) -> (MaskController, RecordingHost) {
    let mut controller = MaskController::new(phone_template());
    let mut host = RecordingHost::with_text(text);
    controller.attach(&mut host);
    host.writes.clear();
    (controller, host)
}

// ========================================================================
// Write-back
// ========================================================================

#[test]
fn test_text_is_written_before_cursor() {
    let (mut controller, mut host) = attached("+1 (XXX) XXX-XXXX");

    controller.on_before_change(&host);
    host.type_char('4');
    controller.on_after_native_change(&mut host).unwrap();

    assert_eq!(
        host.writes,
        vec![
            Write::Text("+1 (4XX) XXX-XXXX".to_string()),
            Write::Cursor(5),
        ]
    );
    assert_eq!(controller.listener(), Listener::Attached);
}

#[test]
fn test_rejected_edit_still_writes_back() {
    let (mut controller, mut host) = attached(FULL);
    host.cursor = 2;

    controller.on_before_change(&host);
    host.type_char('9');
    controller.on_after_native_change(&mut host).unwrap();

    assert_eq!(host.as_string(), FULL);
    assert_eq!(host.cursor, 4);
    assert_eq!(host.writes.len(), 2);
}

#[test]
fn test_backspace_cycle_through_host() {
    let (mut controller, mut host) = attached(FULL);
    host.cursor = 13;

    controller.on_before_change(&host);
    host.backspace();
    let out = controller.on_after_native_change(&mut host).unwrap().unwrap();

    assert_eq!(out.text, "+1 (123) 45X-7890");
    assert_eq!(host.cursor, 11);
    assert_eq!(controller.value(&host), "123457890");
}

// ========================================================================
// Protocol Errors
// ========================================================================

#[test]
fn test_after_change_without_snapshot_restores_committed() {
    let (mut controller, mut host) = attached(FULL);

    host.type_char('1');
    let err = controller.on_after_native_change(&mut host).unwrap_err();

    assert_eq!(err, MaskError::NoSnapshot);
    assert!(err.is_protocol_misuse());
    assert_eq!(host.as_string(), FULL);
    assert_eq!(host.cursor, 4);
}

#[test]
fn test_external_write_is_rolled_back() {
    let (mut controller, mut host) = attached(FULL);

    // Bypass the controller entirely, then edit on top of it
    host.chars = "hello".chars().collect();
    host.cursor = 5;
    controller.on_before_change(&host);
    host.type_char('5');
    let err = controller.on_after_native_change(&mut host).unwrap_err();

    assert!(matches!(err, MaskError::InvariantViolation(_)));
    assert_eq!(host.as_string(), FULL);
    assert_eq!(controller.committed().text, FULL);
}

#[test]
fn test_cycle_after_error_works_again() {
    let (mut controller, mut host) = attached("+1 (XXX) XXX-XXXX");

    host.type_char('1');
    assert!(controller.on_after_native_change(&mut host).is_err());

    controller.on_before_change(&host);
    host.type_char('1');
    let out = controller.on_after_native_change(&mut host).unwrap().unwrap();
    assert_eq!(out.text, "+1 (1XX) XXX-XXXX");
    assert_eq!(out.cursor, 5);
}

// ========================================================================
// Listener
// ========================================================================

#[test]
fn test_detached_controller_leaves_host_alone() {
    let (mut controller, mut host) = attached("+1 (XXX) XXX-XXXX");
    host.cursor = 4;

    controller.detach();
    controller.on_before_change(&host);
    host.type_char('1');
    assert_eq!(controller.on_after_native_change(&mut host), Ok(None));

    assert_eq!(host.as_string(), "+1 (1XXX) XXX-XXXX");
    assert!(host.writes.is_empty());
    assert!(!controller.is_listening());
}

#[test]
fn test_set_value_through_host() {
    let (mut controller, mut host) = attached("+1 (XXX) XXX-XXXX");

    let out = controller.set_value(&mut host, "(613) 555-0123");
    assert_eq!(out.text, "+1 (613) 555-0123");
    assert_eq!(host.writes.first(), Some(&Write::Text(out.text.clone())));
    assert_eq!(controller.value(&host), "6135550123");
}

#[test]
fn test_set_value_refuses_letters_in_conforming_text() {
    let (mut controller, mut host) = attached(FULL);

    let out = controller.set_value(&mut host, "+1 (abc) def-ghij");
    assert_eq!(out.text, "+1 (XXX) XXX-XXXX");
    assert_eq!(host.as_string(), "+1 (XXX) XXX-XXXX");
    assert_eq!(controller.value(&host), "");
}

#[test]
fn test_attach_resets_letters_already_in_host() {
    let mut controller = MaskController::new(phone_template());
    let mut host = RecordingHost::with_text("+1 (abc) def-ghij");
    let out = controller.attach(&mut host);

    assert_eq!(out.text, "+1 (XXX) XXX-XXXX");
    assert_eq!(host.as_string(), "+1 (XXX) XXX-XXXX");
}
