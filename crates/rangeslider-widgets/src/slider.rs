//! Single-thumb slider widget.

use crate::drag::{DragController, Grab, Limits};
use crate::mapper::{thumb_view, ThumbView};
use crate::probe::{GeometryProbe, ThumbAxis, TrackGeometry};
use rangeslider_core::{ElementMeasure, Event, InputSurface, Rect, Size, ValueStore};
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Message emitted when a drag commits a new slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderChanged {
    /// The new value
    pub value: i64,
}

/// Where the track content box and thumb were found at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    content: Rect,
    thumb: Size,
}

/// Slider selecting one integer in `[0, max_value]` of a [`ValueStore`].
///
/// The value lives in the store; the slider only maps it to a thumb offset
/// and turns drags back into store writes.
#[derive(Debug, Clone)]
pub struct Slider {
    probe: GeometryProbe,
    placement: OnceCell<Placement>,
    drag: DragController<()>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    /// Create an unmounted slider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probe: GeometryProbe::new(ThumbAxis::Width),
            placement: OnceCell::new(),
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

    /// Measure the attached track and thumb.
    ///
    /// Returns `true` once, on the call that made the thumb visible; the shell
    /// re-renders then.
    pub fn mount(&mut self, elements: &impl ElementMeasure) -> bool {
        let measured = self.probe.probe(elements);
        if measured {
            let content = elements.track_bounds().inset(
                (elements.track_bounds().width - elements.track_client_width()) / 2.0,
            );
            let stored = self
                .placement
                .set(Placement {
                    content,
                    thumb: elements.thumb_size(),
                })
                .is_ok();
            debug_assert!(stored, "placement recorded before the first measure");
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

    /// Thumb placement for the store's current value.
    #[must_use]
    pub fn thumb(&self, store: &impl ValueStore) -> ThumbView {
        thumb_view(store.value(), self.geometry(), store.range())
    }

    /// Page-space bounds of the thumb, `None` before mount.
    #[must_use]
    pub fn thumb_bounds(&self, store: &impl ValueStore) -> Option<Rect> {
        let placement = self.placement.get()?;
        let view = self.thumb(store);
        Some(Rect::new(
            placement.content.x + view.left,
            placement.content.y,
            placement.thumb.width,
            placement.thumb.height,
        ))
    }

    /// Pointer-down on the thumb at page x `pointer_x`.
    ///
    /// Returns `false` when the slider is not interactive: unmeasured, or on
    /// a track with no room to move.
    pub fn start_drag(
        &mut self,
        pointer_x: f32,
        store: &impl ValueStore,
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

        let left = self.thumb(store).left;
        let grab = Grab::new(
            (),
            pointer_x,
            left,
            store.value(),
            Limits::track(geometry.max_x),
        );
        self.drag.begin(grab, surface);
        true
    }

    /// Pointer-move anywhere on the surface while dragging.
    ///
    /// Writes to the store only when the value changes.
    pub fn drag(&mut self, pointer_x: f32, store: &mut impl ValueStore) -> Option<SliderChanged> {
        let max_x = self.geometry()?.max_x;
        let commit = self.drag.track(pointer_x, max_x, store.range())?;
        store.set_value(commit.value);
        Some(SliderChanged {
            value: commit.value,
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

    /// Route a mouse event.
    ///
    /// A primary press inside the thumb starts a drag, moves follow it and any
    /// release ends it.
    pub fn event(
        &mut self,
        event: &Event,
        store: &mut impl ValueStore,
        surface: &mut impl InputSurface,
    ) -> Option<SliderChanged> {
        match event {
            Event::MouseDown { position, .. } if event.is_primary_press() => {
                let hit = self
                    .thumb_bounds(&*store)
                    .is_some_and(|bounds| bounds.contains_point(position));
                if hit {
                    self.start_drag(position.x, &*store, surface);
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

#[cfg(test)]
mod tests {
    use super::*;
    use rangeslider_core::{
        ListenerRegistry, MouseButton, MountedElements, Point, PointerPhase, SliderState, Store,
    };

    fn elements() -> MountedElements {
        // 320px content, 1px border, 32px thumb: max_x = 288
        MountedElements::new(Rect::new(10.0, 20.0, 322.0, 34.0), 1.0, Size::square(32.0))
    }

    fn mounted() -> Slider {
        let mut slider = Slider::new();
        assert!(slider.mount(&elements()));
        slider
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_slider_new() {
        let slider = Slider::new();
        assert!(!slider.is_initialized());
        assert!(!slider.is_dragging());
        assert!(slider.geometry().is_none());
    }

    #[test]
    fn test_slider_builder() {
        let slider = Slider::default()
            .with_test_id("volume")
            .with_accessible_name("Volume");
        assert_eq!(slider.test_id(), Some("volume"));
        assert_eq!(slider.accessible_name(), Some("Volume"));
    }

    // =========================================================================
    // Mount Tests
    // =========================================================================

    #[test]
    fn test_slider_mount_measures_once() {
        let mut slider = Slider::new();
        assert!(slider.mount(&elements()));
        assert!(!slider.mount(&elements()));
        assert_eq!(slider.geometry(), Some(&TrackGeometry::single(288.0)));
    }

    #[test]
    fn test_slider_second_mount_keeps_placement() {
        let mut slider = mounted();
        assert!(!slider.mount(&MountedElements::new(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            0.0,
            Size::square(20.0),
        )));
        let store = Store::new(SliderState::new(100, 50).unwrap());
        assert_eq!(
            slider.thumb_bounds(&store),
            Some(Rect::new(155.0, 21.0, 32.0, 32.0))
        );
    }

    #[test]
    fn test_slider_thumb_hidden_before_mount() {
        let slider = Slider::new();
        let store = Store::new(SliderState::new(100, 80).unwrap());
        assert_eq!(slider.thumb(&store), ThumbView::HIDDEN);
        assert!(slider.thumb_bounds(&store).is_none());
    }

    #[test]
    fn test_slider_thumb_after_mount() {
        let slider = mounted();
        let store = Store::new(SliderState::new(100, 50).unwrap());
        let view = slider.thumb(&store);
        assert!(view.visible);
        assert_eq!(view.left, 144.0);
        assert_eq!(
            slider.thumb_bounds(&store),
            Some(Rect::new(155.0, 21.0, 32.0, 32.0))
        );
    }

    // =========================================================================
    // Drag Tests
    // =========================================================================

    #[test]
    fn test_slider_start_drag_before_mount_refused() {
        let mut slider = Slider::new();
        let store = Store::new(SliderState::default());
        let mut surface = ListenerRegistry::new();
        assert!(!slider.start_drag(0.0, &store, &mut surface));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_slider_zero_track_refuses_drag() {
        let mut slider = Slider::new();
        slider.mount(&MountedElements::new(
            Rect::new(0.0, 0.0, 32.0, 32.0),
            0.0,
            Size::square(32.0),
        ));
        let store = Store::new(SliderState::default());
        let mut surface = ListenerRegistry::new();

        assert!(slider.is_initialized());
        assert_eq!(slider.thumb(&store).left, 0.0);
        assert!(!slider.start_drag(0.0, &store, &mut surface));
        assert!(!slider.is_dragging());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_slider_drag_writes_store() {
        let mut slider = mounted();
        let mut store = Store::new(SliderState::new(100, 50).unwrap());
        let mut surface = ListenerRegistry::new();

        assert!(slider.start_drag(170.0, &store, &mut surface));
        // +28.8px is ten units on a 288px track
        assert_eq!(
            slider.drag(198.8, &mut store),
            Some(SliderChanged { value: 60 })
        );
        assert_eq!(store.value(), 60);
        assert!(slider.drag(199.0, &mut store).is_none());
        assert_eq!(store.revision(), 1);

        assert_eq!(slider.end_drag(&mut surface), Some(60));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_slider_drag_without_press_does_nothing() {
        let mut slider = mounted();
        let mut store = Store::new(SliderState::default());
        assert!(slider.drag(250.0, &mut store).is_none());
        assert_eq!(store.revision(), 0);
    }

    // =========================================================================
    // Event Routing Tests
    // =========================================================================

    fn down(x: f32, y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_slider_event_press_on_thumb_starts_drag() {
        let mut slider = mounted();
        let mut store = Store::new(SliderState::default());
        let mut surface = ListenerRegistry::new();

        slider.event(&down(160.0, 30.0), &mut store, &mut surface);
        assert!(slider.is_dragging());
        assert_eq!(surface.active_count(PointerPhase::Move), 1);
    }

    #[test]
    fn test_slider_event_press_off_thumb_ignored() {
        let mut slider = mounted();
        let mut store = Store::new(SliderState::default());
        let mut surface = ListenerRegistry::new();

        slider.event(&down(20.0, 30.0), &mut store, &mut surface);
        assert!(!slider.is_dragging());

        let right_click = Event::MouseDown {
            position: Point::new(160.0, 30.0),
            button: MouseButton::Right,
        };
        slider.event(&right_click, &mut store, &mut surface);
        assert!(!slider.is_dragging());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_slider_event_full_gesture() {
        let mut slider = mounted();
        let mut store = Store::new(SliderState::default());
        let mut surface = ListenerRegistry::new();

        slider.event(&down(160.0, 30.0), &mut store, &mut surface);
        let changed = slider.event(
            &Event::MouseMove {
                position: Point::new(1_000.0, 400.0),
            },
            &mut store,
            &mut surface,
        );
        assert_eq!(changed, Some(SliderChanged { value: 100 }));

        slider.event(
            &Event::MouseUp {
                position: Point::new(1_000.0, 400.0),
                button: MouseButton::Left,
            },
            &mut store,
            &mut surface,
        );
        assert!(!slider.is_dragging());
        assert!(surface.is_empty());
        assert_eq!(store.value(), 100);
    }
}
