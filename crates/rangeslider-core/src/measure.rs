//! Live element measurements handed to a widget right after it is attached.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Capability supplied by the presentation shell to measure attached elements.
///
/// Implementations must report the values as laid out at the moment of the
/// call; the widgets read them once, immediately after mount.
pub trait ElementMeasure {
    /// Border box of the track in page coordinates.
    fn track_bounds(&self) -> Rect;

    /// Content width of the track, border excluded.
    fn track_client_width(&self) -> f32;

    /// Rendered size of a thumb element.
    fn thumb_size(&self) -> Size;
}

/// Headless measurements: a track rectangle, its border width and the thumb size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountedElements {
    /// Track border box
    pub track: Rect,
    /// Border width on each side of the track
    pub border: f32,
    /// Thumb box size
    pub thumb: Size,
}

impl MountedElements {
    /// Create measurements for a track and thumb.
    #[must_use]
    pub const fn new(track: Rect, border: f32, thumb: Size) -> Self {
        Self {
            track,
            border,
            thumb,
        }
    }

    /// Content box of the track, where thumbs are positioned.
    #[must_use]
    pub fn content_box(&self) -> Rect {
        self.track.inset(self.border)
    }
}

impl ElementMeasure for MountedElements {
    fn track_bounds(&self) -> Rect {
        self.track
    }

    fn track_client_width(&self) -> f32 {
        self.content_box().width
    }

    fn thumb_size(&self) -> Size {
        self.thumb
    }
}
