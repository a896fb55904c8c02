//! Notification interface between a host window system and a widget.
//!
//! The host owns windows, message dispatch and layout. It calls into the
//! widget when something happens to the widget's area, and the widget never
//! calls back. Keeping dispatch on the host side means widgets can be driven
//! and tested without a running window system.
//!
//! # Notification Order
//!
//! ```text
//! on_create → (on_resize | on_paint)* → on_destroy
//! ```

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics::primitives::Rectangle;

/// Host → widget notifications.
pub trait Widget {
    /// The widget has been placed in a host window.
    ///
    /// Returns the client size the host must give it.
    fn on_create(&mut self) -> Size;

    /// The host changed the widget's client size.
    fn on_resize(
        &mut self,
        size: Size,
    );

    /// Paint `region` (widget coordinates) onto `surface`.
    ///
    /// `surface` must use widget coordinates, e.g. a host display cropped to
    /// the widget's bounds.
    fn on_paint<D>(
        &self,
        surface: &mut D,
        region: Rectangle,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>;

    /// The widget is being removed; release anything it holds.
    fn on_destroy(&mut self);
}
