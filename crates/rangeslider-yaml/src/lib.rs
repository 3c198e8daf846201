//! YAML slider manifests.
//!
//! A manifest describes one slider: its kind, value domain, initial value(s)
//! and the geometry of the track and thumb it is mounted on. It is the
//! configuration surface of the replay tool and the test harness.

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{SliderConfig, SliderKind, SliderManifest, ThumbConfig, TrackConfig};
