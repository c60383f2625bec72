//! System clipboard access.
//!
//! A single write-only operation: put text on the OS clipboard and
//! report success as a bool. Each call is a stateless round trip to the
//! OS, nothing is cached, and concurrent writers resolve to
//! last-writer-wins at the OS level. Reading the clipboard back is
//! deliberately not exposed.
//!
//! On Windows, uses `clipboard-win`; elsewhere, `arboard`
//! (X11/Wayland/macOS).

use std::error::Error;
use std::fmt;

/// Why a clipboard write failed.
///
/// Backends report this across the [`ClipboardBackend`] seam; the
/// boolean surface logs it and collapses it to `false`.
#[derive(Debug)]
pub enum ClipboardError {
    /// The clipboard could not be opened (headless session, no display
    /// server, or held by another process).
    Unavailable(String),
    /// The clipboard was reachable but rejected the write.
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "clipboard unavailable: {reason}"),
            Self::Write(reason) => write!(f, "clipboard write failed: {reason}"),
        }
    }
}

impl Error for ClipboardError {}

/// Writes text to a clipboard.
///
/// [`SystemClipboard`] is the real implementation; tests and embedders
/// that own their platform layer substitute their own.
pub trait ClipboardBackend {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Put `text` on the system clipboard. Returns `true` on success.
///
/// Any native failure collapses to `false`; the cause is logged at
/// `warn` and otherwise discarded. Never panics.
pub fn set_clipboard_text(text: &str) -> bool {
    set_clipboard_text_with(&mut SystemClipboard, text)
}

/// [`set_clipboard_text`] against a caller-supplied backend.
pub fn set_clipboard_text_with(backend: &mut dyn ClipboardBackend, text: &str) -> bool {
    match backend.set_text(text) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("clipboard write dropped: {err}");
            false
        }
    }
}

/// The OS clipboard.
///
/// Zero-state: every write opens the clipboard anew, so no connection
/// is held between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[cfg(not(windows))]
impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(windows)]
impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        clipboard_win::set_clipboard_string(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests;
