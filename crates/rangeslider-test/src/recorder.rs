//! Store wrapper that records every write a widget makes.

use rangeslider_core::{EndIndex, EndsStore, ValueStore};

/// One write pushed by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreWrite {
    /// `set_value` on a single-value store
    Value(i64),
    /// `set_end` on an ends store
    End(EndIndex, i64),
}

impl StoreWrite {
    /// The written value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            Self::Value(value) | Self::End(_, value) => *value,
        }
    }
}

/// Wraps a store and logs writes before forwarding them.
#[derive(Debug, Default)]
pub struct Recorded<S> {
    inner: S,
    writes: Vec<StoreWrite>,
}

impl<S> Recorded<S> {
    /// Start recording writes to `inner`.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }

    /// The wrapped store.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Writes so far, oldest first.
    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    /// Written values so far, oldest first.
    pub fn values(&self) -> Vec<i64> {
        self.writes.iter().map(StoreWrite::value).collect()
    }

    /// Forget recorded writes.
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl<S: ValueStore> ValueStore for Recorded<S> {
    fn max_value(&self) -> i64 {
        self.inner.max_value()
    }

    fn value(&self) -> i64 {
        self.inner.value()
    }

    fn set_value(&mut self, value: i64) {
        self.writes.push(StoreWrite::Value(value));
        self.inner.set_value(value);
    }
}

impl<S: EndsStore> EndsStore for Recorded<S> {
    fn max_value(&self) -> i64 {
        self.inner.max_value()
    }

    fn ends(&self) -> [i64; 2] {
        self.inner.ends()
    }

    fn set_end(&mut self, value: i64, index: EndIndex) {
        self.writes.push(StoreWrite::End(index, value));
        self.inner.set_end(value, index);
    }
}
