//! Input events for widgets.
//!
//! Only mouse input is modelled; touch, pen and keyboard input are not
//! handled by the slider widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
}

impl Event {
    /// Get the pointer position carried by the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => *position,
        }
    }

    /// Check if this is a press of the primary button.
    #[must_use]
    pub const fn is_primary_press(&self) -> bool {
        matches!(
            self,
            Self::MouseDown {
                button: MouseButton::Left,
                ..
            }
        )
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}
