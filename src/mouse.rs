//! Mouse button identifiers.
//!
//! Discriminants are pinned to the native button indices (1 = left,
//! 2 = middle, 3 = right, 4 and 5 = the side buttons) and must never
//! drift: the input-event layer dispatches on that numeric identity.
//! [`MouseButton::from_raw`] is the single point where a native index
//! enters the type system.

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical mouse button.
///
/// `Unknown` is reserved for "no button" and for indices the native
/// layer does not define.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MouseButton {
    /// No button, or an unrecognized index.
    #[default]
    Unknown = 0,
    /// The left (primary) button.
    Left = 1,
    /// The middle button (wheel click).
    Middle = 2,
    /// The right (secondary) button.
    Right = 3,
    /// The first side button, typically "back".
    X1 = 4,
    /// The second side button, typically "forward".
    X2 = 5,
}

bitflags! {
    /// Button bits as they appear in the native button-state bitmask,
    /// where a button with index `n` occupies bit `1 << (n - 1)`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtonMask: u32 {
        const LEFT   = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT  = 1 << 2;
        const X1     = 1 << 3;
        const X2     = 1 << 4;
    }
}

impl MouseButton {
    /// Map a native button index onto a button.
    ///
    /// Total: indices outside the known set collapse to `Unknown`, so a
    /// new button added by the native layer surfaces here instead of
    /// propagating an unchecked value into dispatch.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::X1,
            5 => Self::X2,
            _ => Self::Unknown,
        }
    }

    /// The native button index this button is pinned to.
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// The bit this button occupies in the native button-state bitmask.
    /// `Unknown` has no bit and maps to the empty mask.
    pub fn mask(self) -> MouseButtonMask {
        match self {
            Self::Unknown => MouseButtonMask::empty(),
            Self::Left => MouseButtonMask::LEFT,
            Self::Middle => MouseButtonMask::MIDDLE,
            Self::Right => MouseButtonMask::RIGHT,
            Self::X1 => MouseButtonMask::X1,
            Self::X2 => MouseButtonMask::X2,
        }
    }
}

impl From<u8> for MouseButton {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MouseButton> for u8 {
    fn from(button: MouseButton) -> Self {
        button.raw()
    }
}
