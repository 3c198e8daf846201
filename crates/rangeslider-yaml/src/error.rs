//! Error types for manifest loading.

use crate::manifest::SliderKind;
use rangeslider_core::SliderError;
use thiserror::Error;

/// Error type for manifest loading and validation.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Geometry value out of bounds
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
    /// Field set for the other slider kind
    #[error("'{field}' does not apply to a {kind} slider")]
    VariantMismatch {
        /// Declared kind
        kind: SliderKind,
        /// Offending field
        field: &'static str,
    },
    /// Value domain rejected
    #[error(transparent)]
    Slider(#[from] SliderError),
}
