//! The seven-segment display widget.
//!
//! [`SevenSegmentDisplay`] owns one validated [`DisplayStyle`]. It builds a
//! [`Frame`] from that style on demand and paints it through an
//! [`OffscreenBuffer`] when the host sends a paint notification.
//!
//! # Repaint Contract
//!
//! The display never asks for a repaint itself. [`set_value`] and
//! [`set_style`] report whether anything visible changed; the host is expected
//! to invalidate the widget when they do.
//!
//! [`set_value`]: SevenSegmentDisplay::set_value
//! [`set_style`]: SevenSegmentDisplay::set_style

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::digits::{format_digits, row_to_string};
use crate::error::StyleError;
use crate::offscreen::OffscreenBuffer;
use crate::render::Frame;
use crate::style::DisplayStyle;
use crate::widget::Widget;

/// A multi-digit seven-segment display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SevenSegmentDisplay {
    style: DisplayStyle,
    /// Client size last reported by the host, if any.
    client_size: Option<Size>,
}

impl SevenSegmentDisplay {
    /// Create a display, rejecting styles that cannot be rendered.
    pub const fn new(style: DisplayStyle) -> Result<Self, StyleError> {
        match style.validate() {
            Ok(()) => Ok(Self {
                style,
                client_size: None,
            }),
            Err(e) => Err(e),
        }
    }

    #[inline]
    pub const fn style(&self) -> &DisplayStyle { &self.style }

    #[inline]
    pub const fn value(&self) -> u32 { self.style.value }

    /// Store a new value.
    ///
    /// Returns `true` when the displayed digits changed and a repaint is due.
    /// Values that differ only in truncated high digits do not count.
    pub fn set_value(
        &mut self,
        value: u32,
    ) -> bool {
        let style = &self.style;
        let before = format_digits(style.value, style.digit_count, style.leading_zeros_visible);
        let after = format_digits(value, style.digit_count, style.leading_zeros_visible);
        self.style.value = value;
        before != after
    }

    /// Replace the whole style, keeping the current one if `style` is invalid.
    ///
    /// Returns the new required size; the host must resize the widget to it.
    pub fn set_style(
        &mut self,
        style: DisplayStyle,
    ) -> Result<Size, StyleError> {
        style.validate()?;
        self.style = style;
        log::debug!(
            "display style reset: {} digits, required size {:?}",
            style.digit_count,
            style.required_size()
        );
        Ok(style.required_size())
    }

    /// Client size needed to show every digit unclipped.
    #[inline]
    pub const fn required_size(&self) -> Size { self.style.required_size() }

    /// Control area at the widget's own origin.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { Rectangle::new(Point::zero(), self.required_size()) }

    #[inline]
    pub const fn client_size(&self) -> Option<Size> { self.client_size }

    /// Build the polygons and colors for the current state.
    pub fn render(&self) -> Frame { Frame::build(&self.style) }
}

impl Default for SevenSegmentDisplay {
    fn default() -> Self {
        Self {
            style: DisplayStyle::new(),
            client_size: None,
        }
    }
}

impl Widget for SevenSegmentDisplay {
    fn on_create(&mut self) -> Size {
        let size = self.required_size();
        log::debug!("display created, requesting {}x{}", size.width, size.height);
        size
    }

    fn on_resize(
        &mut self,
        size: Size,
    ) {
        let required = self.required_size();
        if size != required {
            log::warn!(
                "display resized to {}x{} but needs {}x{}; output will be clipped",
                size.width,
                size.height,
                required.width,
                required.height
            );
        }
        self.client_size = Some(size);
    }

    fn on_paint<D>(
        &self,
        surface: &mut D,
        region: Rectangle,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let region = region.intersection(&self.bounds());
        if region.is_zero_sized() {
            return Ok(());
        }

        let frame = self.render();
        log::trace!(
            "painting \"{}\" ({} shapes, {} lit) into {:?}",
            row_to_string(&frame.glyphs).as_str(),
            frame.shapes.len(),
            frame.lit_count(),
            region
        );

        let mut buffer = OffscreenBuffer::acquire(region, frame.background);
        let Ok(()) = frame.draw(&mut buffer);
        buffer.present(surface)
    }

    fn on_destroy(&mut self) {
        log::debug!("display destroyed at value {}", self.style.value);
        self.client_size = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
