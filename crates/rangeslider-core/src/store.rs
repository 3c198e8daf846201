//! Shared value stores consumed by the slider widgets.
//!
//! The widgets never own their value. They read it from a store at gesture
//! start and write through the store's setters, so any number of consumers
//! (a header, a label, another panel) can subscribe to the same state.
//!
//! # Examples
//!
//! ```
//! use rangeslider_core::{SliderState, Store, ValueStore};
//! use std::sync::{Arc, Mutex};
//!
//! let mut store = Store::new(SliderState::new(100, 50).unwrap());
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! store.subscribe(move |state: &SliderState| sink.lock().unwrap().push(state.value));
//!
//! store.set_value(60);
//! store.set_value(60); // unchanged, not broadcast
//! assert_eq!(*seen.lock().unwrap(), vec![60]);
//! ```

use crate::error::SliderError;
use crate::range::ValueRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store of a single slider value.
pub trait ValueStore {
    /// Upper bound of the value domain.
    fn max_value(&self) -> i64;

    /// Current value.
    fn value(&self) -> i64;

    /// Replace the current value.
    fn set_value(&mut self, value: i64);

    /// Value domain `[0, max_value]`.
    fn range(&self) -> ValueRange {
        ValueRange::up_to(self.max_value())
    }
}

/// Store of a `(low, high)` pair of slider values.
pub trait EndsStore {
    /// Upper bound of the value domain.
    fn max_value(&self) -> i64;

    /// Current pair, indexed by [`EndIndex`].
    fn ends(&self) -> [i64; 2];

    /// Replace one element of the pair.
    fn set_end(&mut self, value: i64, index: EndIndex);

    /// Value of one element of the pair.
    fn end(&self, index: EndIndex) -> i64 {
        self.ends()[index.index()]
    }

    /// Value domain `[0, max_value]`.
    fn range(&self) -> ValueRange {
        ValueRange::up_to(self.max_value())
    }
}

/// Which element of an end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndIndex {
    /// Left thumb, index 0
    Low,
    /// Right thumb, index 1
    High,
}

impl EndIndex {
    /// Both ends, in index order.
    pub const ALL: [Self; 2] = [Self::Low, Self::High];

    /// Position in the pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// The opposite end.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// State behind a single-thumb slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderState {
    /// Upper bound of the value domain
    pub max_value: i64,
    /// Current value
    pub value: i64,
}

impl SliderState {
    /// Create a validated state.
    pub fn new(max_value: i64, value: i64) -> Result<Self, SliderError> {
        let range = ValueRange::new(0, max_value)?;
        range.check(value)?;
        Ok(Self { max_value, value })
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            max_value: 100,
            value: 50,
        }
    }
}

/// State behind a dual-thumb range slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeState {
    /// Upper bound of the value domain
    pub max_value: i64,
    /// Current `(low, high)` pair
    pub ends: [i64; 2],
    /// Display value derived from `ends`
    pub value: String,
}

impl RangeState {
    /// Create a validated state.
    pub fn new(max_value: i64, ends: [i64; 2]) -> Result<Self, SliderError> {
        let range = ValueRange::new(0, max_value)?;
        let [low, high] = ends;
        range.check(low)?;
        range.check(high)?;
        if low > high {
            return Err(SliderError::EndsOutOfOrder { low, high });
        }
        Ok(Self {
            max_value,
            ends,
            value: Self::display(ends),
        })
    }

    /// Display value shown for a pair.
    #[must_use]
    pub fn display(ends: [i64; 2]) -> String {
        format!("{} - {}", ends[0], ends[1])
    }

    fn replace(&mut self, value: i64, index: EndIndex) -> bool {
        if self.ends[index.index()] == value {
            return false;
        }
        self.ends[index.index()] = value;
        self.value = Self::display(self.ends);
        true
    }
}

impl Default for RangeState {
    fn default() -> Self {
        let ends = [25, 75];
        Self {
            max_value: 100,
            ends,
            value: Self::display(ends),
        }
    }
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Store holds slider state and broadcasts each accepted change.
///
/// Writes that leave the state unchanged are not accepted: they neither bump
/// the revision nor notify subscribers.
pub struct Store<S> {
    state: S,
    revision: u64,
    subscribers: Vec<Subscriber<S>>,
}

impl<S> Store<S> {
    /// Create a new store with initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Get current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Number of accepted mutations so far.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply a mutation; `apply` returns whether the state changed.
    fn commit(&mut self, apply: impl FnOnce(&mut S) -> bool) {
        if apply(&mut self.state) {
            self.revision += 1;
            self.notify_subscribers();
        }
    }

    fn notify_subscribers(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ValueStore for Store<SliderState> {
    fn max_value(&self) -> i64 {
        self.state.max_value
    }

    fn value(&self) -> i64 {
        self.state.value
    }

    fn set_value(&mut self, value: i64) {
        let value = ValueRange::up_to(self.state.max_value).clamp(value);
        self.commit(|state| {
            let changed = state.value != value;
            state.value = value;
            changed
        });
    }
}

impl EndsStore for Store<RangeState> {
    fn max_value(&self) -> i64 {
        self.state.max_value
    }

    fn ends(&self) -> [i64; 2] {
        self.state.ends
    }

    fn set_end(&mut self, value: i64, index: EndIndex) {
        let value = ValueRange::up_to(self.state.max_value).clamp(value);
        self.commit(|state| state.replace(value, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // EndIndex Tests
    // =========================================================================

    #[test]
    fn test_end_index_positions() {
        assert_eq!(EndIndex::Low.index(), 0);
        assert_eq!(EndIndex::High.index(), 1);
        assert_eq!(EndIndex::Low.other(), EndIndex::High);
        assert_eq!(EndIndex::High.other(), EndIndex::Low);
        assert_eq!(EndIndex::ALL, [EndIndex::Low, EndIndex::High]);
    }

    // =========================================================================
    // SliderState Tests
    // =========================================================================

    #[test]
    fn test_slider_state_default() {
        let state = SliderState::default();
        assert_eq!(state.max_value, 100);
        assert_eq!(state.value, 50);
    }

    #[test]
    fn test_slider_state_validation() {
        assert!(SliderState::new(100, 0).is_ok());
        assert!(SliderState::new(100, 100).is_ok());
        assert_eq!(
            SliderState::new(0, 0),
            Err(SliderError::EmptyRange { min: 0, max: 0 })
        );
        assert_eq!(
            SliderState::new(100, 101),
            Err(SliderError::ValueOutOfRange {
                value: 101,
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn test_value_store_set_value_notifies() {
        let mut store = Store::new(SliderState::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &SliderState| sink.lock().unwrap().push(state.value));

        store.set_value(70);
        store.set_value(71);

        assert_eq!(store.value(), 71);
        assert_eq!(store.revision(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![70, 71]);
    }

    #[test]
    fn test_value_store_unchanged_write_not_accepted() {
        let mut store = Store::new(SliderState::default());
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.set_value(50);

        assert_eq!(store.revision(), 0);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_value_store_clamps_into_range() {
        let mut store = Store::new(SliderState::default());
        store.set_value(250);
        assert_eq!(store.value(), 100);
        store.set_value(-3);
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_value_store_range() {
        let store = Store::new(SliderState::new(40, 10).unwrap());
        assert_eq!(store.range(), ValueRange::up_to(40));
    }

    // =========================================================================
    // RangeState Tests
    // =========================================================================

    #[test]
    fn test_range_state_validation() {
        assert!(RangeState::new(100, [0, 50]).is_ok());
        assert!(RangeState::new(100, [30, 30]).is_ok());
        assert_eq!(
            RangeState::new(100, [60, 40]),
            Err(SliderError::EndsOutOfOrder { low: 60, high: 40 })
        );
        assert!(RangeState::new(100, [0, 120]).is_err());
        assert!(RangeState::new(-1, [0, 0]).is_err());
    }

    #[test]
    fn test_range_state_display_value() {
        let state = RangeState::new(100, [10, 90]).unwrap();
        assert_eq!(state.value, "10 - 90");
    }

    #[test]
    fn test_ends_store_set_end_recomputes_display() {
        let mut store = Store::new(RangeState::new(100, [0, 50]).unwrap());
        store.set_end(20, EndIndex::Low);
        assert_eq!(store.ends(), [20, 50]);
        assert_eq!(store.state().value, "20 - 50");

        store.set_end(80, EndIndex::High);
        assert_eq!(store.end(EndIndex::High), 80);
        assert_eq!(store.state().value, "20 - 80");
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_ends_store_unchanged_end_not_broadcast() {
        let mut store = Store::new(RangeState::default());
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.set_end(25, EndIndex::Low);

        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_store_debug_hides_callbacks() {
        let store = Store::new(SliderState::default());
        let text = format!("{store:?}");
        assert!(text.contains("revision: 0"));
        assert!(text.contains("subscribers: 0"));
    }
}
