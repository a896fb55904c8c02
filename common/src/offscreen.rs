//! Off-screen paint buffer for flicker-free compositing.
//!
//! A paint pass never draws straight onto the host surface. It acquires an
//! [`OffscreenBuffer`] covering the paint region, draws the whole frame into
//! it, then hands the finished pixels to the surface in a single
//! `fill_contiguous` call. The surface never sees a half-painted digit.
//!
//! The buffer is scoped to one paint call. Its pixel storage is released when
//! the value is dropped, which happens on every exit path, including an error
//! from the surface during [`present`](OffscreenBuffer::present).

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Pixel buffer covering one paint region, in control coordinates.
pub struct OffscreenBuffer {
    /// Region of the control this buffer stands in for.
    area: Rectangle,
    /// Row-major pixels of `area`.
    pixels: Vec<Rgb888>,
}

impl OffscreenBuffer {
    /// Acquire a buffer for `area`, pre-filled with `fill`.
    pub fn acquire(
        area: Rectangle,
        fill: Rgb888,
    ) -> Self {
        let len = area.size.width as usize * area.size.height as usize;
        log::trace!("acquired {}x{} off-screen buffer", area.size.width, area.size.height);
        Self {
            area,
            pixels: vec![fill; len],
        }
    }

    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Color at `point` (control coordinates), or `None` outside the buffer.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        self.index_of(point).map(|idx| self.pixels[idx])
    }

    /// Transfer the finished pixels to `surface` in one operation.
    ///
    /// `surface` uses the same coordinates as the control.
    pub fn present<D>(
        self,
        surface: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        surface.fill_contiguous(&self.area, self.pixels.iter().copied())
    }

    #[inline]
    fn index_of(
        &self,
        point: Point,
    ) -> Option<usize> {
        if !self.area.contains(point) {
            return None;
        }
        let local = point - self.area.top_left;
        Some(local.y as usize * self.area.size.width as usize + local.x as usize)
    }
}

impl Drop for OffscreenBuffer {
    fn drop(&mut self) {
        log::trace!("released off-screen buffer of {} pixels", self.pixels.len());
    }
}

impl Dimensions for OffscreenBuffer {
    fn bounding_box(&self) -> Rectangle { self.area }
}

impl DrawTarget for OffscreenBuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index_of(point) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.area);
        if drawable_area.is_zero_sized() {
            return Ok(());
        }

        let stride = self.area.size.width as usize;
        let x_start = (drawable_area.top_left.x - self.area.top_left.x) as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y - self.area.top_left.y) as usize * stride;
            self.pixels[row_start + x_start..row_start + x_start + width].fill(color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{BLACK, RED, YELLOW};

    fn region() -> Rectangle { Rectangle::new(Point::new(2, 3), Size::new(4, 5)) }

    #[test]
    fn test_acquire_fills_region() {
        let buffer = OffscreenBuffer::acquire(region(), YELLOW);
        assert_eq!(buffer.area(), region());
        assert_eq!(buffer.pixel(Point::new(2, 3)), Some(YELLOW));
        assert_eq!(buffer.pixel(Point::new(5, 7)), Some(YELLOW));
        assert_eq!(buffer.pixel(Point::new(1, 3)), None, "Left of region");
        assert_eq!(buffer.pixel(Point::new(6, 3)), None, "Right of region");
    }

    #[test]
    fn test_drawing_outside_region_is_clipped() {
        let mut buffer = OffscreenBuffer::acquire(region(), BLACK);
        let pixels = [Pixel(Point::new(0, 0), RED), Pixel(Point::new(3, 4), RED)];
        let Ok(()) = buffer.draw_iter(pixels);

        assert_eq!(buffer.pixel(Point::new(3, 4)), Some(RED));
        assert_eq!(buffer.pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_fill_solid_intersects_region() {
        let mut buffer = OffscreenBuffer::acquire(region(), BLACK);
        let Ok(()) = buffer.fill_solid(&Rectangle::new(Point::zero(), Size::new(4, 5)), RED);

        // Overlap is x 2..4, y 3..5
        assert_eq!(buffer.pixel(Point::new(2, 3)), Some(RED));
        assert_eq!(buffer.pixel(Point::new(3, 4)), Some(RED));
        assert_eq!(buffer.pixel(Point::new(4, 3)), Some(BLACK));
        assert_eq!(buffer.pixel(Point::new(2, 5)), Some(BLACK));
    }

    #[test]
    fn test_present_copies_whole_region_once() {
        let mut buffer = OffscreenBuffer::acquire(region(), BLACK);
        let Ok(()) = buffer.draw_iter([Pixel(Point::new(4, 6), RED)]);

        let mut surface: MockDisplay<Rgb888> = MockDisplay::new();
        buffer.present(&mut surface).unwrap();

        assert_eq!(surface.affected_area(), region());
        assert_eq!(surface.get_pixel(Point::new(4, 6)), Some(RED));
        assert_eq!(surface.get_pixel(Point::new(2, 3)), Some(BLACK));
    }
}
