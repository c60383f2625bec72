//! Platform glue for the Ember 2D framework.
//!
//! Two small, unrelated facets of the host platform: mouse button
//! identifiers pinned to the native SDL-style button indices, and
//! write-only access to the system clipboard. It contains no event
//! loop, rendering, or window management code.

#![deny(unsafe_code)]

pub mod mouse;
pub mod system;

pub use mouse::{MouseButton, MouseButtonMask};
pub use system::{
    ClipboardBackend, ClipboardError, SystemClipboard, set_clipboard_text, set_clipboard_text_with,
};
