//! Value ↔ pixel conversion along a measured track.
//!
//! `max_x` is the largest left offset a thumb can take (track content width
//! minus thumb size). Values are integers; pixels are `f32` like the rest of
//! the geometry, with the arithmetic carried out in `f64`.
//!
//! A zero-length track (`max_x <= 0`) or an empty range never divides: pixels
//! map to `0.0` and every pixel maps back to `range.min`.

use crate::probe::TrackGeometry;
use rangeslider_core::ValueRange;
use serde::{Deserialize, Serialize};

fn is_degenerate(max_x: f32, range: ValueRange) -> bool {
    !(max_x.is_finite() && max_x > 0.0) || range.span() <= 0
}

/// Left pixel offset of a thumb showing `value`.
#[must_use]
pub fn value_to_pixel(value: i64, max_x: f32, range: ValueRange) -> f32 {
    if is_degenerate(max_x, range) {
        return 0.0;
    }
    let fraction = (value - range.min) as f64 / range.span() as f64;
    (f64::from(max_x) * fraction) as f32
}

/// Value under a thumb whose left edge sits at `pixel`, rounded to the nearest integer.
#[must_use]
pub fn pixel_to_value(pixel: f32, max_x: f32, range: ValueRange) -> i64 {
    if is_degenerate(max_x, range) {
        return range.min;
    }
    scaled(pixel, max_x, range).round() as i64 + range.min
}

fn scaled(pixel: f32, max_x: f32, range: ValueRange) -> f64 {
    f64::from(pixel) * range.span() as f64 / f64::from(max_x)
}

/// Smallest and largest whole values whose thumb stays inside `[min_px, max_px]`.
///
/// The lower bound rounds up and the upper bound rounds down, so
/// `value_to_pixel` of either never lands outside the pixel interval.
#[must_use]
pub fn value_bounds(min_px: f32, max_px: f32, max_x: f32, range: ValueRange) -> (i64, i64) {
    if is_degenerate(max_x, range) {
        return (range.min, range.min);
    }
    (
        scaled(min_px, max_x, range).ceil() as i64 + range.min,
        scaled(max_px, max_x, range).floor() as i64 + range.min,
    )
}

/// What the shell needs to render one thumb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbView {
    /// Left offset of the thumb inside the track content box
    pub left: f32,
    /// Whether the thumb is shown; false until the track is measured
    pub visible: bool,
}

impl ThumbView {
    /// View of a thumb before the track has been measured.
    pub const HIDDEN: Self = Self {
        left: 0.0,
        visible: false,
    };

    /// Opacity the thumb renders with.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}

/// Place a thumb for `value`, hidden at offset 0 while `geometry` is unknown.
#[must_use]
pub fn thumb_view(value: i64, geometry: Option<&TrackGeometry>, range: ValueRange) -> ThumbView {
    geometry.map_or(ThumbView::HIDDEN, |g| ThumbView {
        left: value_to_pixel(value, g.max_x, range),
        visible: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn percent() -> ValueRange {
        ValueRange::up_to(100)
    }

    // =========================================================================
    // value_to_pixel Tests
    // =========================================================================

    #[test]
    fn test_value_to_pixel_endpoints() {
        assert_eq!(value_to_pixel(0, 300.0, percent()), 0.0);
        assert_eq!(value_to_pixel(100, 300.0, percent()), 300.0);
        assert_eq!(value_to_pixel(50, 300.0, percent()), 150.0);
    }

    #[test]
    fn test_value_to_pixel_offset_range() {
        let range = ValueRange::new(-50, 50).unwrap();
        assert_eq!(value_to_pixel(-50, 200.0, range), 0.0);
        assert_eq!(value_to_pixel(0, 200.0, range), 100.0);
    }

    #[test]
    fn test_value_to_pixel_zero_track() {
        assert_eq!(value_to_pixel(80, 0.0, percent()), 0.0);
        assert_eq!(value_to_pixel(80, -12.0, percent()), 0.0);
        assert_eq!(value_to_pixel(80, f32::NAN, percent()), 0.0);
    }

    // =========================================================================
    // pixel_to_value Tests
    // =========================================================================

    #[test]
    fn test_pixel_to_value_rounds_to_nearest() {
        // 300px over 100 units: 3px per unit
        assert_eq!(pixel_to_value(150.0, 300.0, percent()), 50);
        assert_eq!(pixel_to_value(151.4, 300.0, percent()), 50);
        assert_eq!(pixel_to_value(151.6, 300.0, percent()), 51);
        assert_eq!(pixel_to_value(1.5, 300.0, percent()), 1);
    }

    #[test]
    fn test_pixel_to_value_adds_range_min() {
        let range = ValueRange::new(10, 20).unwrap();
        assert_eq!(pixel_to_value(0.0, 100.0, range), 10);
        assert_eq!(pixel_to_value(100.0, 100.0, range), 20);
    }

    #[test]
    fn test_pixel_to_value_zero_track_reports_minimum() {
        let range = ValueRange::new(5, 9).unwrap();
        assert_eq!(pixel_to_value(42.0, 0.0, range), 5);
    }

    #[test]
    fn test_pixel_to_value_empty_range_reports_minimum() {
        let range = ValueRange { min: 7, max: 7 };
        assert_eq!(pixel_to_value(42.0, 100.0, range), 7);
        assert_eq!(value_to_pixel(7, 100.0, range), 0.0);
    }

    // =========================================================================
    // value_bounds Tests
    // =========================================================================

    #[test]
    fn test_value_bounds_round_inward() {
        // 288px over 100 units: 112px sits at 38.9 units
        assert_eq!(value_bounds(0.0, 112.0, 288.0, percent()), (0, 38));
        assert!(value_to_pixel(38, 288.0, percent()) <= 112.0);
        // 176px sits at 61.1 units
        assert_eq!(value_bounds(176.0, 288.0, 288.0, percent()), (62, 100));
        assert!(value_to_pixel(62, 288.0, percent()) >= 176.0);
    }

    #[test]
    fn test_value_bounds_exact_units_are_kept() {
        assert_eq!(value_bounds(32.0, 168.0, 400.0, percent()), (8, 42));
        assert_eq!(value_bounds(0.0, 300.0, 300.0, percent()), (0, 100));
    }

    #[test]
    fn test_value_bounds_coarse_range() {
        // 100px per unit: 68px is not enough room for one unit
        let range = ValueRange::up_to(4);
        assert_eq!(value_bounds(0.0, 68.0, 400.0, range), (0, 0));
        assert_eq!(value_bounds(32.0, 400.0, 400.0, range), (1, 4));
    }

    #[test]
    fn test_value_bounds_degenerate_track() {
        let range = ValueRange::new(5, 9).unwrap();
        assert_eq!(value_bounds(0.0, 10.0, 0.0, range), (5, 5));
    }

    // =========================================================================
    // ThumbView Tests
    // =========================================================================

    #[test]
    fn test_thumb_view_hidden_before_measure() {
        for value in [0, 50, 100] {
            let view = thumb_view(value, None, percent());
            assert_eq!(view, ThumbView::HIDDEN);
            assert_eq!(view.opacity(), 0.0);
        }
    }

    #[test]
    fn test_thumb_view_positioned_after_measure() {
        let geometry = TrackGeometry::single(288.0);
        let view = thumb_view(50, Some(&geometry), percent());
        assert!(view.visible);
        assert_eq!(view.left, 144.0);
        assert_eq!(view.opacity(), 1.0);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #[test]
        fn prop_round_trip_within_one(
            min in -1_000i64..1_000,
            span in 1i64..10_000,
            offset in 0.0f64..=1.0,
            max_x in 1.0f32..4_000.0,
        ) {
            let range = ValueRange::new(min, min + span).unwrap();
            let value = min + (offset * span as f64) as i64;
            let back = pixel_to_value(value_to_pixel(value, max_x, range), max_x, range);
            prop_assert!((back - value).abs() <= 1, "value {} came back as {}", value, back);
        }

        #[test]
        fn prop_pixel_in_track_maps_into_range(pixel in 0.0f32..=500.0, max in 1i64..1_000) {
            let range = ValueRange::up_to(max);
            let value = pixel_to_value(pixel, 500.0, range);
            prop_assert!(range.contains(value));
        }

        #[test]
        fn prop_value_bounds_render_inside_pixels(
            max in 1i64..500,
            max_x in 1.0f32..1_000.0,
            a in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
        ) {
            let range = ValueRange::up_to(max);
            let (min_px, max_px) = (a.min(b) * max_x, a.max(b) * max_x);
            let (low, high) = value_bounds(min_px, max_px, max_x, range);
            if low <= high {
                prop_assert!(value_to_pixel(low, max_x, range) >= min_px);
                prop_assert!(value_to_pixel(high, max_x, range) <= max_px);
            }
        }
    }
}
