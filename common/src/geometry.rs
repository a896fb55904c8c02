//! Segment polygon construction.
//!
//! Every segment is a fixed offset pattern relative to the digit origin,
//! parameterized by the digit size `w × h`, the segment thickness `t` and the
//! half height `hh = h / 2`. Horizontal and vertical bars are trapezoids whose
//! long edge lies on the digit's bounding box; the middle bar is a hexagon.
//!
//! ```text
//!   (1,0)┌───────────────┐(w-1,0)
//! (0,1)   \(t+1,t)  (w-t-1,t)/   (w,1)
//!   │ ┐                      ┌ │
//!   │ │                      │ │
//!   │ ┘(t,hh-t-1)            └ │
//! (0,hh-1)                (w,hh-1)
//!  (1,hh) <──── middle ────> (w-1,hh)
//! ```
//!
//! The `SEGMENT_GAP` offset at every corner keeps neighbouring segments from
//! touching, so each one reads as a separate bar.

use embedded_graphics::geometry::{Point, Size};
use heapless::Vec;

use crate::config::SEGMENT_GAP;
use crate::segments::Segment;

/// Most vertices any segment polygon has (the middle hexagon).
pub const MAX_POLYGON_POINTS: usize = 6;

/// Closed polygon outline; the last point connects back to the first.
pub type Polygon = Vec<Point, MAX_POLYGON_POINTS>;

/// Size-derived parameters shared by all segments of a digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitMetrics {
    pub width: i32,
    pub height: i32,
    pub half_height: i32,
    pub thickness: i32,
}

impl DigitMetrics {
    pub const fn new(
        digit_size: Size,
        thickness: u32,
    ) -> Self {
        Self {
            width: digit_size.width as i32,
            height: digit_size.height as i32,
            half_height: digit_size.height as i32 / 2,
            thickness: thickness as i32,
        }
    }
}

/// Top-left corner of the digit in slot `index`.
#[inline]
pub const fn digit_origin(
    index: usize,
    digit_size: Size,
    digit_spacing: u32,
) -> Point {
    let spacing = digit_spacing as i32;
    Point::new(spacing + (digit_size.width as i32 + spacing) * index as i32, spacing)
}

impl Segment {
    /// Vertices of this segment for a digit at `origin`.
    pub fn polygon(
        self,
        origin: Point,
        metrics: DigitMetrics,
    ) -> Polygon {
        let DigitMetrics {
            width: w,
            height: h,
            half_height: hh,
            thickness: t,
        } = metrics;
        let g = SEGMENT_GAP;

        let offsets: &[(i32, i32)] = match self {
            Self::Top => &[(g, 0), (w - g, 0), (w - t - g, t), (t + g, t)],
            Self::TopLeft => &[(0, g), (0, hh - g), (t, hh - t - g), (t, t + g)],
            Self::TopRight => &[(w, g), (w, hh - g), (w - t, hh - t - g), (w - t, t + g)],
            Self::Middle => &[
                (g, hh),
                (t + g, hh - t + g),
                (w - t - g, hh - t + g),
                (w - g, hh),
                (w - t - g, hh + t - g),
                (t + g, hh + t - g),
            ],
            Self::BottomLeft => &[(0, hh + g), (0, h - g), (t, h - t - g), (t, hh + t + g)],
            Self::BottomRight => &[(w, hh + g), (w, h - g), (w - t, h - t - g), (w - t, hh + t + g)],
            Self::Bottom => &[(g, h), (w - g, h), (w - t - g, h - t), (t + g, h - t)],
        };

        offsets
            .iter()
            .map(|&(dx, dy)| origin + Point::new(dx, dy))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DIGIT_SIZE, DEFAULT_DIGIT_SPACING, DEFAULT_SEGMENT_THICKNESS};

    fn default_metrics() -> DigitMetrics { DigitMetrics::new(DEFAULT_DIGIT_SIZE, DEFAULT_SEGMENT_THICKNESS) }

    #[test]
    fn test_digit_origins_step_by_width_plus_spacing() {
        assert_eq!(digit_origin(0, DEFAULT_DIGIT_SIZE, DEFAULT_DIGIT_SPACING), Point::new(5, 5));
        assert_eq!(digit_origin(1, DEFAULT_DIGIT_SIZE, DEFAULT_DIGIT_SPACING), Point::new(30, 5));
        assert_eq!(digit_origin(2, DEFAULT_DIGIT_SIZE, DEFAULT_DIGIT_SPACING), Point::new(55, 5));
    }

    #[test]
    fn test_half_height_rounds_down() {
        let metrics = DigitMetrics::new(Size::new(10, 21), 2);
        assert_eq!(metrics.half_height, 10);
    }

    #[test]
    fn test_top_segment_default_style() {
        let polygon = Segment::Top.polygon(Point::new(5, 5), default_metrics());
        assert_eq!(
            polygon.as_slice(),
            &[Point::new(6, 5), Point::new(24, 5), Point::new(21, 8), Point::new(9, 8)]
        );
    }

    #[test]
    fn test_middle_segment_is_hexagon() {
        let polygon = Segment::Middle.polygon(Point::zero(), default_metrics());
        assert_eq!(polygon.len(), 6);
        assert_eq!(polygon[0], Point::new(1, 20));
        assert_eq!(polygon[3], Point::new(19, 20));
        assert_eq!(polygon[1], Point::new(4, 18));
        assert_eq!(polygon[4], Point::new(16, 22));
    }

    #[test]
    fn test_bar_segments_are_quadrilaterals() {
        for segment in Segment::ALL.into_iter().filter(|s| *s != Segment::Middle) {
            let polygon = segment.polygon(Point::zero(), default_metrics());
            assert_eq!(polygon.len(), 4, "{segment:?} should have 4 vertices");
        }
    }

    #[test]
    fn test_polygons_stay_inside_digit_box() {
        let metrics = default_metrics();
        let origin = Point::new(30, 5);
        for segment in Segment::ALL {
            for point in segment.polygon(origin, metrics) {
                let local = point - origin;
                assert!(
                    (0..=metrics.width).contains(&local.x) && (0..=metrics.height).contains(&local.y),
                    "{segment:?} vertex {point:?} escapes the digit box"
                );
            }
        }
    }

    #[test]
    fn test_segments_span_corner_to_corner() {
        let metrics = default_metrics();
        let all: Vec<Point, 42> = Segment::ALL
            .into_iter()
            .flat_map(|s| s.polygon(Point::zero(), metrics))
            .collect();

        assert_eq!(all.iter().map(|p| p.x).min(), Some(0));
        assert_eq!(all.iter().map(|p| p.x).max(), Some(metrics.width));
        assert_eq!(all.iter().map(|p| p.y).min(), Some(0));
        assert_eq!(all.iter().map(|p| p.y).max(), Some(metrics.height));
    }

    #[test]
    fn test_corner_gap_between_top_and_sides() {
        let metrics = default_metrics();
        let top = Segment::Top.polygon(Point::zero(), metrics);
        let left = Segment::TopLeft.polygon(Point::zero(), metrics);
        // Top starts one unit right of the corner, the side one unit below it
        assert_eq!(top[0], Point::new(1, 0));
        assert_eq!(left[0], Point::new(0, 1));
        assert!(top.iter().all(|p| !left.contains(p)), "Top and top-left must not share vertices");
    }
}
