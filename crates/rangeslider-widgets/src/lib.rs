//! Slider widgets for the rangeslider toolkit.
//!
//! [`Slider`] edits a single value; [`RangeSlider`] edits a `(low, high)`
//! pair with two thumbs that never cross. Both are built from the same parts:
//! - [`mapper`]: value and pixel conversion along the track
//! - [`probe`]: one-time track measurement after mount
//! - [`drag`]: the per-gesture drag state machine

pub mod drag;
pub mod mapper;
pub mod probe;
pub mod range_slider;
pub mod slider;

pub use drag::{Commit, DragController, DragSession, Grab, Limits};
pub use mapper::{pixel_to_value, thumb_view, value_bounds, value_to_pixel, ThumbView};
pub use probe::{GeometryProbe, ThumbAxis, TrackGeometry};
pub use range_slider::{RangeChanged, RangeSlider};
pub use slider::{Slider, SliderChanged};
