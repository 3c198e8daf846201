//! One-time track measurement after mount.
//!
//! ## Usage
//!
//! 1) Attach the track and thumb elements.
//! 2) Call [`GeometryProbe::probe`] with their live measurements. The first
//!    call stores a [`TrackGeometry`] and returns `true`: re-render once so the
//!    thumb becomes visible.
//! 3) Every later call is ignored and returns `false`; the geometry never
//!    changes for the lifetime of the widget.

use rangeslider_core::ElementMeasure;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use tracing::debug;

/// Measured track geometry, fixed once probed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Largest left offset of a thumb (track content width minus thumb size)
    pub max_x: f32,
    /// Thumb size, kept by the dual-thumb variant to stop thumbs overlapping
    pub size: Option<f32>,
}

impl TrackGeometry {
    /// Geometry of a single-thumb track.
    #[must_use]
    pub const fn single(max_x: f32) -> Self {
        Self { max_x, size: None }
    }

    /// Geometry of a dual-thumb track.
    #[must_use]
    pub const fn dual(max_x: f32, size: f32) -> Self {
        Self {
            max_x,
            size: Some(size),
        }
    }

    /// Whether a thumb has room to move.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.max_x.is_finite() && self.max_x > 0.0
    }
}

/// Which thumb dimension is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThumbAxis {
    /// Rendered width; single-thumb slider
    Width,
    /// Rendered height, standing in for both sides of a square thumb; range slider
    Height,
}

/// Write-once holder of the track geometry.
#[derive(Debug, Clone)]
pub struct GeometryProbe {
    axis: ThumbAxis,
    slot: OnceCell<TrackGeometry>,
}

impl GeometryProbe {
    /// Create an unmeasured probe.
    #[must_use]
    pub const fn new(axis: ThumbAxis) -> Self {
        Self {
            axis,
            slot: OnceCell::new(),
        }
    }

    /// Measure the attached elements.
    ///
    /// Returns `true` only for the call that stored the geometry.
    pub fn probe(&self, elements: &impl ElementMeasure) -> bool {
        if self.slot.get().is_some() {
            debug!("track already measured; probe ignored");
            return false;
        }

        let thumb = elements.thumb_size();
        let thumb_size = match self.axis {
            ThumbAxis::Width => thumb.width,
            ThumbAxis::Height => thumb.height,
        };
        let max_x = (elements.track_client_width() - thumb_size).max(0.0);
        let geometry = match self.axis {
            ThumbAxis::Width => TrackGeometry::single(max_x),
            ThumbAxis::Height => TrackGeometry::dual(max_x, thumb_size),
        };

        let stored = self.slot.set(geometry).is_ok();
        if stored {
            debug!(max_x, size = ?geometry.size, "track measured");
        }
        stored
    }

    /// The measured geometry, `None` until probed.
    #[must_use]
    pub fn geometry(&self) -> Option<&TrackGeometry> {
        self.slot.get()
    }

    /// Whether the track has been measured.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Which thumb dimension this probe reads.
    #[must_use]
    pub const fn axis(&self) -> ThumbAxis {
        self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeslider_core::{MountedElements, Rect, Size};

    fn elements(track_width: f32, border: f32, thumb: Size) -> MountedElements {
        MountedElements::new(
            Rect::new(0.0, 0.0, 2.0f32.mul_add(border, track_width), 32.0),
            border,
            thumb,
        )
    }

    #[test]
    fn test_new_probe_is_unmeasured() {
        let probe = GeometryProbe::new(ThumbAxis::Width);
        assert!(!probe.is_initialized());
        assert!(probe.geometry().is_none());
    }

    #[test]
    fn test_probe_single_uses_thumb_width() {
        let probe = GeometryProbe::new(ThumbAxis::Width);
        assert!(probe.probe(&elements(320.0, 1.0, Size::new(32.0, 20.0))));
        assert_eq!(probe.geometry(), Some(&TrackGeometry::single(288.0)));
        assert!(probe.is_initialized());
    }

    #[test]
    fn test_probe_dual_uses_thumb_height_as_size() {
        let probe = GeometryProbe::new(ThumbAxis::Height);
        assert!(probe.probe(&elements(432.0, 0.0, Size::new(10.0, 32.0))));
        assert_eq!(probe.geometry(), Some(&TrackGeometry::dual(400.0, 32.0)));
    }

    #[test]
    fn test_probe_runs_once() {
        let probe = GeometryProbe::new(ThumbAxis::Width);
        assert!(probe.probe(&elements(320.0, 0.0, Size::square(32.0))));
        assert!(!probe.probe(&elements(640.0, 0.0, Size::square(32.0))));
        assert_eq!(probe.geometry().map(|g| g.max_x), Some(288.0));
    }

    #[test]
    fn test_probe_floors_negative_track_at_zero() {
        let probe = GeometryProbe::new(ThumbAxis::Width);
        probe.probe(&elements(20.0, 0.0, Size::square(32.0)));
        let geometry = probe.geometry().copied().unwrap();
        assert_eq!(geometry.max_x, 0.0);
        assert!(!geometry.is_draggable());
    }

    #[test]
    fn test_track_geometry_draggable() {
        assert!(TrackGeometry::single(1.0).is_draggable());
        assert!(!TrackGeometry::dual(0.0, 32.0).is_draggable());
    }
}
