//! Gesture harnesses for the slider widgets.

use crate::recorder::{Recorded, StoreWrite};
use rangeslider_core::{
    EndIndex, EndsStore, Event, ListenerRegistry, MouseButton, MountedElements, PointerPhase,
    RangeState, SliderState, Store, ValueStore,
};
use rangeslider_widgets::{RangeChanged, RangeSlider, Slider, SliderChanged, ThumbView};

/// Fire `phase` on the surface; `true` when some listener heard it.
fn fire(surface: &mut ListenerRegistry, phase: PointerPhase) -> bool {
    !surface.dispatch(phase).is_empty()
}

/// Evenly spaced pointer positions after `from`, ending exactly at `to`.
fn steps_between(from: f32, to: f32, steps: u16) -> impl Iterator<Item = f32> {
    let steps = steps.max(1);
    (1..=steps).map(move |i| {
        if i == steps {
            to
        } else {
            (to - from).mul_add(f32::from(i) / f32::from(steps), from)
        }
    })
}

/// Test harness for a single-thumb [`Slider`].
pub struct SliderHarness {
    slider: Slider,
    store: Recorded<Store<SliderState>>,
    elements: MountedElements,
    surface: ListenerRegistry,
    changes: Vec<SliderChanged>,
}

impl SliderHarness {
    /// Create a harness over `store`, to be mounted on `elements`.
    pub fn new(store: Store<SliderState>, elements: MountedElements) -> Self {
        Self {
            slider: Slider::new(),
            store: Recorded::new(store),
            elements,
            surface: ListenerRegistry::new(),
            changes: Vec::new(),
        }
    }

    /// Replace the widget under test.
    #[must_use]
    pub fn with_slider(mut self, slider: Slider) -> Self {
        self.slider = slider;
        self
    }

    // === Gesture Simulation ===

    /// Measure the track, as the shell does after attaching the elements.
    pub fn mount(&mut self) -> &mut Self {
        self.slider.mount(&self.elements);
        self
    }

    /// Pointer-down on the thumb at page x `x`.
    pub fn press(&mut self, x: f32) -> &mut Self {
        self.slider.start_drag(x, self.store.inner(), &mut self.surface);
        self
    }

    /// Primary press at the center of the thumb, routed as a mouse event.
    pub fn press_thumb(&mut self) -> &mut Self {
        if let Some(bounds) = self.slider.thumb_bounds(self.store.inner()) {
            let event = Event::MouseDown {
                position: bounds.center(),
                button: MouseButton::Left,
            };
            self.slider
                .event(&event, &mut self.store, &mut self.surface);
        }
        self
    }

    /// Pointer-move anywhere on the page.
    pub fn move_to(&mut self, x: f32) -> &mut Self {
        if fire(&mut self.surface, PointerPhase::Move) {
            if let Some(changed) = self.slider.drag(x, &mut self.store) {
                self.changes.push(changed);
            }
        }
        self
    }

    /// Pointer-up anywhere on the page.
    pub fn release(&mut self) -> &mut Self {
        if fire(&mut self.surface, PointerPhase::Up) {
            self.slider.end_drag(&mut self.surface);
        }
        self
    }

    /// Drop the gesture without a pointer-up, e.g. on unmount.
    pub fn drop_drag(&mut self) -> &mut Self {
        self.slider.end_drag(&mut self.surface);
        self
    }

    /// Press at `from`, move to `to` in `steps` equal moves, release.
    pub fn drag(&mut self, from: f32, to: f32, steps: u16) -> &mut Self {
        self.press(from);
        for x in steps_between(from, to, steps) {
            self.move_to(x);
        }
        self.release()
    }

    // === Queries ===

    /// The widget under test.
    #[must_use]
    pub const fn slider(&self) -> &Slider {
        &self.slider
    }

    /// The shared store.
    #[must_use]
    pub const fn store(&self) -> &Store<SliderState> {
        self.store.inner()
    }

    /// The listener surface.
    #[must_use]
    pub const fn surface(&self) -> &ListenerRegistry {
        &self.surface
    }

    /// Every value written to the store, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<i64> {
        self.store.values()
    }

    /// Change messages from the drags so far.
    #[must_use]
    pub fn changes(&self) -> &[SliderChanged] {
        &self.changes
    }

    /// Current thumb placement.
    #[must_use]
    pub fn thumb(&self) -> ThumbView {
        self.slider.thumb(self.store.inner())
    }

    // === Assertions ===

    /// Assert the store value.
    ///
    /// # Panics
    ///
    /// Panics if the value differs.
    pub fn assert_value(&self, expected: i64) -> &Self {
        let actual = self.store.value();
        assert_eq!(actual, expected, "expected value {expected}, got {actual}");
        self
    }

    /// Assert the exact sequence of store writes.
    ///
    /// # Panics
    ///
    /// Panics if the writes differ.
    pub fn assert_writes(&self, expected: &[i64]) -> &Self {
        assert_eq!(self.writes(), expected, "store writes differ");
        self
    }

    /// Assert no two consecutive writes carry the same value.
    ///
    /// # Panics
    ///
    /// Panics on a repeated write.
    pub fn assert_distinct_writes(&self) -> &Self {
        let writes = self.writes();
        for pair in writes.windows(2) {
            assert_ne!(pair[0], pair[1], "repeated write in {writes:?}");
        }
        self
    }

    /// Assert the thumb placement.
    ///
    /// # Panics
    ///
    /// Panics if the thumb is hidden or placed elsewhere.
    pub fn assert_thumb_left(&self, expected: f32) -> &Self {
        let thumb = self.thumb();
        assert!(thumb.visible, "thumb is hidden");
        assert!(
            (thumb.left - expected).abs() < 1e-3,
            "expected thumb at {expected}, got {}",
            thumb.left
        );
        self
    }

    /// Assert the thumb is hidden at offset 0.
    ///
    /// # Panics
    ///
    /// Panics if the thumb is visible.
    pub fn assert_hidden(&self) -> &Self {
        assert_eq!(self.thumb(), ThumbView::HIDDEN, "thumb is visible");
        self
    }

    /// Assert a drag is in progress.
    ///
    /// # Panics
    ///
    /// Panics if no drag is open.
    pub fn assert_dragging(&self) -> &Self {
        assert!(self.slider.is_dragging(), "expected a drag in progress");
        self
    }

    /// Assert no drag is open and no listeners remain.
    ///
    /// # Panics
    ///
    /// Panics if a drag or listener survives.
    pub fn assert_idle(&self) -> &Self {
        assert!(!self.slider.is_dragging(), "drag still in progress");
        assert!(
            self.surface.is_empty(),
            "{} listener(s) still registered",
            self.surface.len()
        );
        self
    }
}

/// Test harness for a dual-thumb [`RangeSlider`].
pub struct RangeHarness {
    slider: RangeSlider,
    store: Recorded<Store<RangeState>>,
    elements: MountedElements,
    surface: ListenerRegistry,
    changes: Vec<RangeChanged>,
}

impl RangeHarness {
    /// Create a harness over `store`, to be mounted on `elements`.
    pub fn new(store: Store<RangeState>, elements: MountedElements) -> Self {
        Self {
            slider: RangeSlider::new(),
            store: Recorded::new(store),
            elements,
            surface: ListenerRegistry::new(),
            changes: Vec::new(),
        }
    }

    /// Replace the widget under test.
    #[must_use]
    pub fn with_slider(mut self, slider: RangeSlider) -> Self {
        self.slider = slider;
        self
    }

    // === Gesture Simulation ===

    /// Measure the track.
    pub fn mount(&mut self) -> &mut Self {
        self.slider.mount(&self.elements);
        self
    }

    /// Pointer-down on thumb `index` at page x `x`.
    pub fn press(&mut self, index: EndIndex, x: f32) -> &mut Self {
        self.slider
            .start_drag(index, x, self.store.inner(), &mut self.surface);
        self
    }

    /// Primary press at the center of thumb `index`, routed as a mouse event.
    pub fn press_thumb(&mut self, index: EndIndex) -> &mut Self {
        if let Some(bounds) = self.slider.thumb_bounds(self.store.inner(), index) {
            let event = Event::MouseDown {
                position: bounds.center(),
                button: MouseButton::Left,
            };
            self.slider
                .event(&event, &mut self.store, &mut self.surface);
        }
        self
    }

    /// Pointer-move anywhere on the page.
    pub fn move_to(&mut self, x: f32) -> &mut Self {
        if fire(&mut self.surface, PointerPhase::Move) {
            if let Some(changed) = self.slider.drag(x, &mut self.store) {
                self.changes.push(changed);
            }
        }
        self
    }

    /// Pointer-up anywhere on the page.
    pub fn release(&mut self) -> &mut Self {
        if fire(&mut self.surface, PointerPhase::Up) {
            self.slider.end_drag(&mut self.surface);
        }
        self
    }

    /// Drop the gesture without a pointer-up.
    pub fn drop_drag(&mut self) -> &mut Self {
        self.slider.end_drag(&mut self.surface);
        self
    }

    /// Press thumb `index` at `from`, move to `to` in `steps` moves, release.
    pub fn drag(&mut self, index: EndIndex, from: f32, to: f32, steps: u16) -> &mut Self {
        self.press(index, from);
        for x in steps_between(from, to, steps) {
            self.move_to(x);
        }
        self.release()
    }

    // === Queries ===

    /// The widget under test.
    #[must_use]
    pub const fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    /// The shared store.
    #[must_use]
    pub const fn store(&self) -> &Store<RangeState> {
        self.store.inner()
    }

    /// The listener surface.
    #[must_use]
    pub const fn surface(&self) -> &ListenerRegistry {
        &self.surface
    }

    /// Every write to the store, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[StoreWrite] {
        self.store.writes()
    }

    /// Change messages from the drags so far.
    #[must_use]
    pub fn changes(&self) -> &[RangeChanged] {
        &self.changes
    }

    /// Current placement of thumb `index`.
    #[must_use]
    pub fn thumb(&self, index: EndIndex) -> ThumbView {
        self.slider.thumb(self.store.inner(), index)
    }

    // === Assertions ===

    /// Assert the store ends.
    ///
    /// # Panics
    ///
    /// Panics if the ends differ.
    pub fn assert_ends(&self, expected: [i64; 2]) -> &Self {
        let actual = self.store.ends();
        assert_eq!(actual, expected, "expected ends {expected:?}, got {actual:?}");
        self
    }

    /// Assert the formatted display value.
    ///
    /// # Panics
    ///
    /// Panics if the display value differs.
    pub fn assert_display(&self, expected: &str) -> &Self {
        assert_eq!(self.store().state().value, expected);
        self
    }

    /// Assert the exact sequence of store writes.
    ///
    /// # Panics
    ///
    /// Panics if the writes differ.
    pub fn assert_writes(&self, expected: &[StoreWrite]) -> &Self {
        assert_eq!(self.writes(), expected, "store writes differ");
        self
    }

    /// Assert no two consecutive writes to the same end carry the same value.
    ///
    /// # Panics
    ///
    /// Panics on a repeated write.
    pub fn assert_distinct_writes(&self) -> &Self {
        for pair in self.writes().windows(2) {
            assert_ne!(pair[0], pair[1], "repeated write in {:?}", self.writes());
        }
        self
    }

    /// Assert the thumbs sit at least one thumb width apart.
    ///
    /// # Panics
    ///
    /// Panics if the thumbs overlap.
    pub fn assert_no_overlap(&self) -> &Self {
        let size = self
            .slider
            .geometry()
            .and_then(|g| g.size)
            .unwrap_or_default();
        let low = self.thumb(EndIndex::Low).left;
        let high = self.thumb(EndIndex::High).left;
        assert!(
            low + size <= high,
            "thumbs overlap: low at {low}, high at {high}, size {size}"
        );
        self
    }

    /// Assert the placement of thumb `index`.
    ///
    /// # Panics
    ///
    /// Panics if the thumb is hidden or placed elsewhere.
    pub fn assert_thumb_left(&self, index: EndIndex, expected: f32) -> &Self {
        let thumb = self.thumb(index);
        assert!(thumb.visible, "{index:?} thumb is hidden");
        assert!(
            (thumb.left - expected).abs() < 1e-3,
            "expected {index:?} thumb at {expected}, got {}",
            thumb.left
        );
        self
    }

    /// Assert no drag is open and no listeners remain.
    ///
    /// # Panics
    ///
    /// Panics if a drag or listener survives.
    pub fn assert_idle(&self) -> &Self {
        assert!(!self.slider.is_dragging(), "drag still in progress");
        assert!(
            self.surface.is_empty(),
            "{} listener(s) still registered",
            self.surface.len()
        );
        self
    }
}
