use super::{ClipboardBackend, ClipboardError, set_clipboard_text, set_clipboard_text_with};

/// Cooperative test double: accepts every write and remembers the last.
#[derive(Default)]
struct RecordingClipboard {
    contents: Option<String>,
}

impl ClipboardBackend for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Test double for a session with no clipboard at all.
struct UnavailableClipboard;

impl ClipboardBackend for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display server".into()))
    }
}

/// Test double for a clipboard that refuses writes.
struct RejectingClipboard;

impl ClipboardBackend for RejectingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("denied by session policy".into()))
    }
}

#[test]
fn write_succeeds_and_stores_text() {
    let mut clipboard = RecordingClipboard::default();
    assert!(set_clipboard_text_with(&mut clipboard, "hello world"));
    assert_eq!(clipboard.contents.as_deref(), Some("hello world"));
}

#[test]
fn last_write_wins() {
    let mut clipboard = RecordingClipboard::default();
    assert!(set_clipboard_text_with(&mut clipboard, "first"));
    assert!(set_clipboard_text_with(&mut clipboard, "second"));
    assert_eq!(clipboard.contents.as_deref(), Some("second"));
}

#[test]
fn empty_string_is_a_valid_write() {
    let mut clipboard = RecordingClipboard::default();
    assert!(set_clipboard_text_with(&mut clipboard, ""));
    assert_eq!(clipboard.contents.as_deref(), Some(""));
}

#[test]
fn unavailable_clipboard_collapses_to_false() {
    let mut clipboard = UnavailableClipboard;
    assert!(!set_clipboard_text_with(&mut clipboard, "hello"));
    assert!(!set_clipboard_text_with(&mut clipboard, ""));
}

#[test]
fn rejected_write_collapses_to_false() {
    let mut clipboard = RejectingClipboard;
    assert!(!set_clipboard_text_with(&mut clipboard, "hello"));
}

#[test]
fn error_display() {
    let err = ClipboardError::Unavailable("no display server".into());
    assert_eq!(format!("{err}"), "clipboard unavailable: no display server");

    let err = ClipboardError::Write("denied".into());
    assert_eq!(format!("{err}"), "clipboard write failed: denied");
}

#[test]
fn os_clipboard_write_returns_bool_without_panicking() {
    // Headless CI has no clipboard, so success here is environmental.
    // The contract under test is bool-out, no panic.
    let _ = set_clipboard_text("hello world");
    let _ = set_clipboard_text("");
}
