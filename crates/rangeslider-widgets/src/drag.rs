//! Per-gesture drag state machine shared by both slider variants.
//!
//! ## Usage
//!
//! 1) On pointer-down over a thumb, call [`DragController::begin`] with a
//!    [`Grab`]. The controller opens a [`DragSession`] and registers one
//!    move listener and one once-only up listener on the input surface.
//! 2) On each surface-wide pointer-move, call [`DragController::track`]. It
//!    returns a [`Commit`] only when the value under the thumb differs from
//!    the last committed one; write exactly that to the store.
//! 3) On pointer-up (or an explicit drop), call [`DragController::end`]. The
//!    move listener is released; ending without a session does nothing.
//!
//! ## Minimal example
//!
//! ```
//! use rangeslider_core::{ListenerRegistry, PointerPhase, ValueRange};
//! use rangeslider_widgets::drag::{DragController, Grab, Limits};
//!
//! let mut surface = ListenerRegistry::new();
//! let mut drag = DragController::new();
//! let range = ValueRange::up_to(100);
//!
//! drag.begin(Grab::new((), 10.0, 0.0, 0, Limits::track(300.0)), &mut surface);
//! assert_eq!(surface.active_count(PointerPhase::Move), 1);
//!
//! // Pointer moves 3px right of the grab point: one unit on a 300px track
//! let commit = drag.track(13.0, 300.0, range).unwrap();
//! assert_eq!(commit.value, 1);
//! // Sub-unit movement commits nothing
//! assert!(drag.track(13.5, 300.0, range).is_none());
//!
//! assert_eq!(drag.end(&mut surface), Some(1));
//! assert!(surface.is_empty());
//! ```

use crate::mapper::{pixel_to_value, value_bounds};
use rangeslider_core::{InputSurface, ListenerId, PointerPhase, ValueRange};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// Pixel interval a thumb's left edge may occupy during one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Smallest allowed left offset
    pub min: f32,
    /// Largest allowed left offset
    pub max: f32,
}

impl Limits {
    /// The whole track, `[0, max_x]`.
    #[must_use]
    pub fn track(max_x: f32) -> Self {
        Self::bounded(0.0, max_x, max_x)
    }

    /// Left thumb limits: stop one thumb width before the right thumb.
    #[must_use]
    pub fn before(other_left: f32, size: f32, max_x: f32) -> Self {
        Self::bounded(0.0, other_left - size, max_x)
    }

    /// Right thumb limits: stay one thumb width after the left thumb.
    #[must_use]
    pub fn after(other_left: f32, size: f32, max_x: f32) -> Self {
        Self::bounded(other_left + size, max_x, max_x)
    }

    fn bounded(min: f32, max: f32, max_x: f32) -> Self {
        let max_x = max_x.max(0.0);
        Self {
            min: min.clamp(0.0, max_x),
            max: max.clamp(0.0, max_x),
        }
    }

    /// Clamp a left offset into the limits.
    ///
    /// When the thumbs start closer than one thumb width the interval is
    /// inverted; the lower bound wins so the thumb stays put.
    #[must_use]
    pub fn clamp(&self, pixel: f32) -> f32 {
        pixel.min(self.max).max(self.min)
    }

    /// Whole values whose thumb renders inside the limits, as `(low, high)`.
    #[must_use]
    pub fn values(&self, max_x: f32, range: ValueRange) -> (i64, i64) {
        value_bounds(self.min, self.max, max_x, range)
    }
}

/// Everything captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab<K> {
    /// Which thumb was grabbed
    pub target: K,
    /// Pointer page x at pointer-down
    pub pointer_x: f32,
    /// Thumb left offset at pointer-down
    pub thumb_left: f32,
    /// Store value of the grabbed thumb at pointer-down
    pub value: i64,
    /// Movement limits of the grabbed thumb
    pub limits: Limits,
}

impl<K> Grab<K> {
    /// Describe a grab.
    pub const fn new(target: K, pointer_x: f32, thumb_left: f32, value: i64, limits: Limits) -> Self {
        Self {
            target,
            pointer_x,
            thumb_left,
            value,
            limits,
        }
    }
}

/// A value change to push to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit<K> {
    /// Thumb whose value changed
    pub target: K,
    /// New value
    pub value: i64,
}

/// State of one drag gesture, alive from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession<K> {
    target: K,
    offset: f32,
    last_committed: i64,
    limits: Limits,
    on_move: ListenerId,
    on_up: ListenerId,
}

impl<K: Copy> DragSession<K> {
    /// Grabbed thumb.
    pub const fn target(&self) -> K {
        self.target
    }

    /// Thumb left offset minus pointer x, constant for the gesture.
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Last value pushed to the store (or read from it at pointer-down).
    pub const fn last_committed(&self) -> i64 {
        self.last_committed
    }

    /// Movement limits of the grabbed thumb.
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// Move listener owned by this gesture.
    pub const fn move_listener(&self) -> ListenerId {
        self.on_move
    }

    /// Once-only up listener owned by this gesture.
    pub const fn up_listener(&self) -> ListenerId {
        self.on_up
    }
}

/// Drag state machine: `Idle` without a session, `Dragging` with one.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController<K> {
    session: Option<DragSession<K>>,
}

impl<K> Default for DragController<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K: Copy + Debug> DragController<K> {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Open a session for `grab` and register its listeners.
    ///
    /// A session still open from an earlier gesture is released first.
    pub fn begin(&mut self, grab: Grab<K>, surface: &mut impl InputSurface) {
        if let Some(stale) = self.session.take() {
            warn!(thumb = ?stale.target, "drag started while another was open; releasing it");
            Self::release(&stale, surface);
        }

        let session = DragSession {
            target: grab.target,
            offset: grab.thumb_left - grab.pointer_x,
            last_committed: grab.value,
            limits: grab.limits,
            on_move: surface.listen(PointerPhase::Move),
            on_up: surface.listen_once(PointerPhase::Up),
        };
        debug!(
            thumb = ?session.target,
            offset = session.offset,
            min = session.limits.min,
            max = session.limits.max,
            "drag started"
        );
        self.session = Some(session);
    }

    /// Follow the pointer to `pointer_x`.
    ///
    /// Returns a commit only when the value under the thumb changed. The
    /// value is kept inside [`Limits::values`], so the rendered thumb never
    /// leaves the pixel limits after rounding.
    pub fn track(&mut self, pointer_x: f32, max_x: f32, range: ValueRange) -> Option<Commit<K>> {
        let session = self.session.as_mut()?;
        let left = session.limits.clamp(pointer_x + session.offset);
        let (low, high) = session.limits.values(max_x, range);
        let value = pixel_to_value(left, max_x, range).min(high).max(low);
        if value == session.last_committed {
            return None;
        }
        session.last_committed = value;
        trace!(thumb = ?session.target, value, "value committed");
        Some(Commit {
            target: session.target,
            value,
        })
    }

    /// Close the session and release its listeners.
    ///
    /// Returns the final value, or `None` when no drag was open.
    pub fn end(&mut self, surface: &mut impl InputSurface) -> Option<i64> {
        let session = self.session.take()?;
        Self::release(&session, surface);
        debug!(thumb = ?session.target, value = session.last_committed, "drag ended");
        Some(session.last_committed)
    }

    fn release(session: &DragSession<K>, surface: &mut impl InputSurface) {
        surface.unlisten(session.on_move);
        // Already gone if the up listener fired.
        surface.unlisten(session.on_up);
    }

    /// Whether a gesture is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub const fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }
}
