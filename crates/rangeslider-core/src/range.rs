//! The logical value domain of a slider.

use crate::error::SliderError;
use serde::{Deserialize, Serialize};

/// Inclusive integer range `[min, max]` a slider selects from.
///
/// Built through [`ValueRange::new`], which rejects `min >= max`. The widgets
/// still guard against an empty span when mapping, so a hand-built range can
/// never cause a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound
    pub min: i64,
    /// Upper bound
    pub max: i64,
}

impl ValueRange {
    /// Create a validated range.
    pub const fn new(min: i64, max: i64) -> Result<Self, SliderError> {
        if min < max {
            Ok(Self { min, max })
        } else {
            Err(SliderError::EmptyRange { min, max })
        }
    }

    /// Range `[0, max]`, the shape every store exposes.
    ///
    /// Not validated; stores check `max > 0` when they are built.
    #[must_use]
    pub const fn up_to(max: i64) -> Self {
        Self { min: 0, max }
    }

    /// Width of the range (`max - min`).
    #[must_use]
    pub const fn span(&self) -> i64 {
        self.max - self.min
    }

    /// Check if a value lies in the range (inclusive).
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.max(self.min).min(self.max)
    }

    /// Validate that a value lies in the range.
    pub const fn check(&self, value: i64) -> Result<i64, SliderError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SliderError::ValueOutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::up_to(100)
    }
}
