//! YAML manifest types for slider fixtures.

use crate::error::ManifestError;
use rangeslider_core::{MountedElements, RangeState, Rect, SliderState, Size, Store};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which widget a manifest describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderKind {
    /// One thumb, one value
    #[default]
    Single,
    /// Two thumbs, a `(low, high)` pair
    Range,
}

impl fmt::Display for SliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Range => write!(f, "range"),
        }
    }
}

/// Slider manifest loaded from a `.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderManifest {
    /// Value domain and initial value(s)
    #[serde(default)]
    pub slider: SliderConfig,
    /// Track geometry
    #[serde(default)]
    pub track: TrackConfig,
    /// Thumb geometry
    #[serde(default)]
    pub thumb: ThumbConfig,
}

/// Slider value configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Widget kind
    #[serde(default)]
    pub kind: SliderKind,
    /// Upper bound of the value domain; the lower bound is 0
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Initial value of a single slider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Initial `[low, high]` of a range slider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends: Option<[i64; 2]>,
}

fn default_max_value() -> i64 {
    100
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            kind: SliderKind::default(),
            max_value: default_max_value(),
            value: None,
            ends: None,
        }
    }
}

/// Track geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Content width, excluding the border
    #[serde(default = "default_track_width")]
    pub width: f32,
    /// Border width on each side
    #[serde(default = "default_border")]
    pub border: f32,
}

fn default_track_width() -> f32 {
    320.0
}

fn default_border() -> f32 {
    1.0
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            width: default_track_width(),
            border: default_border(),
        }
    }
}

/// Thumb geometry in pixels; thumbs are square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbConfig {
    /// Side length
    #[serde(default = "default_thumb_size")]
    pub size: f32,
}

fn default_thumb_size() -> f32 {
    32.0
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            size: default_thumb_size(),
        }
    }
}

impl SliderManifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Read, parse and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails [`SliderManifest::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let yaml = std::fs::read_to_string(path)?;
        let manifest = Self::from_yaml(&yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the value domain and geometry.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty range, initial values outside it,
    /// crossed ends, a field of the other kind, or non-positive sizes.
    pub fn validate(&self) -> Result<(), ManifestError> {
        match self.slider.kind {
            SliderKind::Single => {
                self.single_state()?;
            }
            SliderKind::Range => {
                self.range_state()?;
            }
        }

        let track = self.track;
        positive("track.width", track.width)?;
        if !(track.border.is_finite() && track.border >= 0.0) {
            return Err(ManifestError::InvalidValue {
                field: "track.border",
                message: format!("must be zero or positive, got {}", track.border),
            });
        }
        positive("thumb.size", self.thumb.size)
    }

    fn single_state(&self) -> Result<SliderState, ManifestError> {
        if self.slider.ends.is_some() {
            return Err(self.mismatch("ends"));
        }
        let value = self
            .slider
            .value
            .unwrap_or_else(|| SliderState::default().value);
        Ok(SliderState::new(self.slider.max_value, value)?)
    }

    fn range_state(&self) -> Result<RangeState, ManifestError> {
        if self.slider.value.is_some() {
            return Err(self.mismatch("value"));
        }
        let ends = self
            .slider
            .ends
            .unwrap_or_else(|| RangeState::default().ends);
        Ok(RangeState::new(self.slider.max_value, ends)?)
    }

    const fn mismatch(&self, field: &'static str) -> ManifestError {
        ManifestError::VariantMismatch {
            kind: self.slider.kind,
            field,
        }
    }

    /// Store seeded for a single slider.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest describes a range slider or its
    /// value is invalid.
    pub fn single_store(&self) -> Result<Store<SliderState>, ManifestError> {
        if self.slider.kind != SliderKind::Single {
            return Err(self.mismatch("value"));
        }
        Ok(Store::new(self.single_state()?))
    }

    /// Store seeded for a range slider.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest describes a single slider or its
    /// ends are invalid.
    pub fn range_store(&self) -> Result<Store<RangeState>, ManifestError> {
        if self.slider.kind != SliderKind::Range {
            return Err(self.mismatch("ends"));
        }
        Ok(Store::new(self.range_state()?))
    }

    /// Headless measurements of the track and thumb, track at the page origin.
    #[must_use]
    pub fn elements(&self) -> MountedElements {
        let TrackConfig { width, border } = self.track;
        let size = self.thumb.size;
        let outer = 2.0f32.mul_add(border, width);
        let height = 2.0f32.mul_add(border, size);
        MountedElements::new(Rect::new(0.0, 0.0, outer, height), border, Size::square(size))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ManifestError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ManifestError::InvalidValue {
            field,
            message: format!("must be positive, got {value}"),
        })
    }
}
