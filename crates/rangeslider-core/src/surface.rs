//! Surface-wide pointer listener registration.
//!
//! A drag keeps tracking the pointer after it leaves the track, so the
//! widgets register their move/up listeners on an input surface owned by the
//! shell instead of on the thumb itself. [`ListenerRegistry`] is the in-process
//! implementation used by the harness and the CLI.

use serde::{Deserialize, Serialize};

/// Handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Pointer phase a listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pointer moved anywhere on the surface
    Move,
    /// Pointer released anywhere on the surface
    Up,
}

/// Listener registration capability of an input surface.
pub trait InputSurface {
    /// Register a listener that stays active until removed.
    fn listen(&mut self, phase: PointerPhase) -> ListenerId;

    /// Register a listener that is removed after it fires once.
    fn listen_once(&mut self, phase: PointerPhase) -> ListenerId;

    /// Remove a listener. Returns `false` if it was not registered.
    fn unlisten(&mut self, id: ListenerId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registration {
    id: ListenerId,
    phase: PointerPhase,
    once: bool,
}

/// In-process input surface that tracks active listeners.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: Vec<Registration>,
    removed: u64,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, phase: PointerPhase, once: bool) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.active.push(Registration { id, phase, once });
        id
    }

    /// Fire the listeners for a phase.
    ///
    /// Returns the IDs that fired; once-only listeners are removed.
    pub fn dispatch(&mut self, phase: PointerPhase) -> Vec<ListenerId> {
        let fired: Vec<ListenerId> = self
            .active
            .iter()
            .filter(|r| r.phase == phase)
            .map(|r| r.id)
            .collect();
        let before = self.active.len();
        self.active.retain(|r| !(r.phase == phase && r.once));
        self.removed += (before - self.active.len()) as u64;
        fired
    }

    /// Check if a listener is currently registered.
    #[must_use]
    pub fn is_active(&self, id: ListenerId) -> bool {
        self.active.iter().any(|r| r.id == id)
    }

    /// Number of active listeners for a phase.
    #[must_use]
    pub fn active_count(&self, phase: PointerPhase) -> usize {
        self.active.iter().filter(|r| r.phase == phase).count()
    }

    /// Total number of active listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Check if no listener is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of listeners removed so far, by `unlisten` or after firing once.
    #[must_use]
    pub const fn removed_count(&self) -> u64 {
        self.removed
    }
}

impl InputSurface for ListenerRegistry {
    fn listen(&mut self, phase: PointerPhase) -> ListenerId {
        self.register(phase, false)
    }

    fn listen_once(&mut self, phase: PointerPhase) -> ListenerId {
        self.register(phase, true)
    }

    fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|r| r.id != id);
        let removed = before != self.active.len();
        if removed {
            self.removed += 1;
        }
        removed
    }
}
