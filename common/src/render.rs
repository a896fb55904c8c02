//! Frame construction and polygon rasterization.
//!
//! A [`Frame`] is the complete, host-independent output of one render pass:
//! the background fill for the control area followed by `7 × digit_count`
//! colored segment polygons. It is rebuilt from the style on every paint; there
//! is no incremental diffing.
//!
//! # Polygon Painting
//!
//! Each polygon is painted as a filled triangle fan plus a 1-unit outline in
//! the same color. All segment shapes are convex, so the fan covers the
//! interior exactly, and the outline keeps thin bars from losing their edges.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, Triangle};
use heapless::Vec;

use crate::colors::adjust_lightness;
use crate::config::{MAX_DIGIT_COUNT, UNLIT_LIGHTNESS};
use crate::digits::{GlyphRow, format_digits};
use crate::geometry::{DigitMetrics, Polygon, digit_origin};
use crate::segments::Segment;
use crate::style::DisplayStyle;

/// Capacity of a frame's shape list.
pub const MAX_FRAME_SHAPES: usize = Segment::COUNT * MAX_DIGIT_COUNT;

// =============================================================================
// Segment Shape
// =============================================================================

/// One segment polygon with its resolved fill color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentShape {
    /// Digit slot, counted from the left.
    pub slot: usize,
    pub segment: Segment,
    pub lit: bool,
    pub polygon: Polygon,
    pub color: Rgb888,
}

impl Drawable for SegmentShape {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill_polygon(target, &self.polygon, self.color)
    }
}

/// Fill and outline a convex polygon.
pub fn fill_polygon<D>(
    target: &mut D,
    points: &[Point],
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let Some((&first, rest)) = points.split_first() else {
        return Ok(());
    };

    let fill = PrimitiveStyle::with_fill(color);
    for pair in rest.windows(2) {
        Triangle::new(first, pair[0], pair[1])
            .into_styled(fill)
            .draw(target)?;
    }

    let stroke = PrimitiveStyle::with_stroke(color, 1);
    let mut previous = first;
    for &point in rest.iter().chain(core::iter::once(&first)) {
        Line::new(previous, point).into_styled(stroke).draw(target)?;
        previous = point;
    }

    Ok(())
}

// =============================================================================
// Frame
// =============================================================================

/// Everything needed to paint a display once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Control area, at the control's own origin.
    pub bounds: Rectangle,
    pub background: Rgb888,
    /// Glyph shown in each slot.
    pub glyphs: GlyphRow,
    /// Segment polygons, slot by slot in [`Segment::ALL`] order.
    pub shapes: Vec<SegmentShape, MAX_FRAME_SHAPES>,
}

impl Frame {
    /// Build the frame for `style`.
    ///
    /// `style` is expected to be valid; digit slots beyond `MAX_DIGIT_COUNT`
    /// are not rendered.
    pub fn build(style: &DisplayStyle) -> Self {
        let glyphs = format_digits(style.value, style.digit_count, style.leading_zeros_visible);
        let metrics = DigitMetrics::new(style.digit_size, style.segment_thickness);
        let lit_color = style.foreground;
        let unlit_color = adjust_lightness(style.foreground, UNLIT_LIGHTNESS);

        let mut shapes = Vec::new();
        for (slot, glyph) in glyphs.iter().enumerate() {
            let origin = digit_origin(slot, style.digit_size, style.digit_spacing);
            let active = glyph.segments();

            for segment in Segment::ALL {
                let lit = active.contains(segment);
                let shape = SegmentShape {
                    slot,
                    segment,
                    lit,
                    polygon: segment.polygon(origin, metrics),
                    color: if lit { lit_color } else { unlit_color },
                };
                // Capacity covers MAX_DIGIT_COUNT full digits
                shapes.push(shape).ok();
            }
        }

        Self {
            bounds: Rectangle::new(Point::zero(), style.required_size()),
            background: style.background,
            glyphs,
            shapes,
        }
    }

    /// Number of segments drawn in the foreground color.
    pub fn lit_count(&self) -> usize { self.shapes.iter().filter(|s| s.lit).count() }
}

impl Drawable for Frame {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.fill_solid(&self.bounds, self.background)?;
        for shape in &self.shapes {
            shape.draw(target)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
