//! Dual-thumb range slider widget.

use crate::drag::{DragController, Grab, Limits};
use crate::mapper::{thumb_view, value_to_pixel, ThumbView};
use crate::probe::{GeometryProbe, ThumbAxis, TrackGeometry};
use rangeslider_core::{
    ElementMeasure, EndIndex, EndsStore, Event, InputSurface, Point, Rect,
};
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Message emitted when a drag commits a new value for one end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChanged {
    /// End that moved
    pub index: EndIndex,
    /// Its new value
    pub value: i64,
    /// The pair after the change
    pub ends: [i64; 2],
}

/// Range slider selecting a `(low, high)` pair of an [`EndsStore`].
///
/// Each thumb is confined so that it stays at least one thumb width away
/// from the other; the thumbs never cross or overlap while dragged.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    probe: GeometryProbe,
    content: OnceCell<Rect>,
    drag: DragController<EndIndex>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSlider {
    /// Create an unmounted range slider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probe: GeometryProbe::new(ThumbAxis::Height),
            content: OnceCell::new(),
            drag: DragController::new(),
            test_id_value: None,
            accessible_name_value: None,
        }
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get test ID.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    /// Get accessible name.
    #[must_use]
    pub fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    /// Measure the attached track and thumbs. `true` once, on first success.
    pub fn mount(&mut self, elements: &impl ElementMeasure) -> bool {
        let measured = self.probe.probe(elements);
        if measured {
            let track = elements.track_bounds();
            let stored = self
                .content
                .set(track.inset((track.width - elements.track_client_width()) / 2.0))
                .is_ok();
            debug_assert!(stored, "content box recorded before the first measure");
        }
        measured
    }

    /// Whether the track has been measured.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.probe.is_initialized()
    }

    /// Measured geometry, `None` before mount.
    #[must_use]
    pub fn geometry(&self) -> Option<&TrackGeometry> {
        self.probe.geometry()
    }

    fn thumb_size(&self) -> f32 {
        self.geometry().and_then(|g| g.size).unwrap_or(0.0)
    }

    /// Placement of one thumb.
    #[must_use]
    pub fn thumb(&self, store: &impl EndsStore, index: EndIndex) -> ThumbView {
        thumb_view(store.end(index), self.geometry(), store.range())
    }

    /// Placement of both thumbs, low first.
    #[must_use]
    pub fn thumbs(&self, store: &impl EndsStore) -> [ThumbView; 2] {
        EndIndex::ALL.map(|index| self.thumb(store, index))
    }

    /// Page-space bounds of one thumb, `None` before mount.
    #[must_use]
    pub fn thumb_bounds(&self, store: &impl EndsStore, index: EndIndex) -> Option<Rect> {
        let content = self.content.get()?;
        let size = self.thumb_size();
        let view = self.thumb(store, index);
        Some(Rect::new(content.x + view.left, content.y, size, size))
    }

    /// Thumb under a page point.
    ///
    /// The high thumb is drawn last, so it wins where both overlap.
    #[must_use]
    pub fn hit_test(&self, store: &impl EndsStore, point: &Point) -> Option<EndIndex> {
        [EndIndex::High, EndIndex::Low].into_iter().find(|&index| {
            self.thumb_bounds(store, index)
                .is_some_and(|bounds| bounds.contains_point(point))
        })
    }

    /// Pointer-down on thumb `index` at page x `pointer_x`.
    ///
    /// Returns `false` when unmeasured or on a track with no room to move.
    pub fn start_drag(
        &mut self,
        index: EndIndex,
        pointer_x: f32,
        store: &impl EndsStore,
        surface: &mut impl InputSurface,
    ) -> bool {
        let Some(geometry) = self.geometry().copied() else {
            debug!("pointer-down before mount ignored");
            return false;
        };
        if !geometry.is_draggable() {
            warn!(max_x = geometry.max_x, "zero-length track; drag refused");
            return false;
        }

        let range = store.range();
        let size = geometry.size.unwrap_or(0.0);
        let other_left = value_to_pixel(store.end(index.other()), geometry.max_x, range);
        let limits = match index {
            EndIndex::Low => Limits::before(other_left, size, geometry.max_x),
            EndIndex::High => Limits::after(other_left, size, geometry.max_x),
        };
        let left = value_to_pixel(store.end(index), geometry.max_x, range);
        self.drag.begin(
            Grab::new(index, pointer_x, left, store.end(index), limits),
            surface,
        );
        true
    }

    /// Pointer-move anywhere on the surface while dragging.
    ///
    /// Writes the grabbed end to the store only when its value changes.
    pub fn drag(&mut self, pointer_x: f32, store: &mut impl EndsStore) -> Option<RangeChanged> {
        let max_x = self.geometry()?.max_x;
        let commit = self.drag.track(pointer_x, max_x, store.range())?;
        store.set_end(commit.value, commit.target);
        Some(RangeChanged {
            index: commit.target,
            value: commit.value,
            ends: store.ends(),
        })
    }

    /// Pointer-up or explicit drop. Safe to call without a drag in progress.
    pub fn end_drag(&mut self, surface: &mut impl InputSurface) -> Option<i64> {
        self.drag.end(surface)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The thumb being dragged.
    #[must_use]
    pub fn dragging_thumb(&self) -> Option<EndIndex> {
        self.drag.session().map(|session| session.target())
    }

    /// Route a mouse event; see [`crate::Slider::event`].
    pub fn event(
        &mut self,
        event: &Event,
        store: &mut impl EndsStore,
        surface: &mut impl InputSurface,
    ) -> Option<RangeChanged> {
        match event {
            Event::MouseDown { position, .. } if event.is_primary_press() => {
                if let Some(index) = self.hit_test(&*store, position) {
                    self.start_drag(index, position.x, &*store, surface);
                }
                None
            }
            Event::MouseMove { position } if self.is_dragging() => self.drag(position.x, store),
            Event::MouseUp { .. } => {
                self.end_drag(surface);
                None
            }
            _ => None,
        }
    }
}
