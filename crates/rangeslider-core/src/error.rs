//! Validation errors for slider values and ranges.

use thiserror::Error;

/// Error raised when a store or range is built from inconsistent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The range does not satisfy `min < max`.
    #[error("empty value range: min {min} must be below max {max}")]
    EmptyRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// A value lies outside its range.
    #[error("value {value} outside range {min}..={max}")]
    ValueOutOfRange {
        /// Offending value
        value: i64,
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// The low end of a pair exceeds the high end.
    #[error("ends out of order: low {low} exceeds high {high}")]
    EndsOutOfOrder {
        /// Low end
        low: i64,
        /// High end
        high: i64,
    },
}
