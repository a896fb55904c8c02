//! The host window's side of the widget contract.
//!
//! [`Host`] owns the [`DisplayRegistry`], places both displays and the button
//! with a [`Layout`], and tracks which of them need a repaint. Painting goes
//! through a cropped draw target so each display sees its own client
//! coordinates.

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use sevenseg_common::colors::BUTTON_FACE;
use sevenseg_common::{DisplayHandle, DisplayRegistry, DisplayStyle, Widget};

use crate::button::Button;
use crate::game::Game;
use crate::layout::{BUTTON_SIZE, Layout};

/// A display placed in the window.
#[derive(Clone, Copy, Debug)]
struct Placed {
    handle: DisplayHandle,
    area: Rectangle,
    dirty: bool,
}

pub struct Host {
    registry: DisplayRegistry,
    style: DisplayStyle,
    mines: Placed,
    timer: Placed,
    button: Button,
    button_dirty: bool,
    /// Window chrome has not been drawn yet.
    first_frame: bool,
    window: Size,
}

impl Host {
    /// Create both displays with `style` and lay out the window around them.
    pub fn new(style: DisplayStyle) -> Result<Self> {
        let mut registry = DisplayRegistry::new();
        let (mines, size) = registry.create(style).context("failed to create mines display")?;
        let (timer, _) = registry.create(style).context("failed to create timer display")?;

        let layout = Layout::compute(size, BUTTON_SIZE);
        for handle in [mines, timer] {
            registry.get_mut(handle)?.on_resize(size);
        }
        log::info!(
            "window {}x{}, displays {}x{} at {:?} and {:?}",
            layout.window.width,
            layout.window.height,
            size.width,
            size.height,
            layout.mines.top_left,
            layout.timer.top_left
        );

        Ok(Self {
            registry,
            style,
            mines: Placed {
                handle: mines,
                area: layout.mines,
                dirty: true,
            },
            timer: Placed {
                handle: timer,
                area: layout.timer,
                dirty: true,
            },
            button: Button::new(layout.button),
            button_dirty: true,
            first_frame: true,
            window: layout.window,
        })
    }

    #[inline]
    pub const fn window_size(&self) -> Size { self.window }

    #[inline]
    pub const fn button(&self) -> &Button { &self.button }

    pub fn set_button_pressed(
        &mut self,
        pressed: bool,
    ) {
        self.button_dirty |= self.button.set_pressed(pressed);
    }

    /// Push the game counters into the displays, invalidating what changed.
    pub fn show(
        &mut self,
        game: &Game,
    ) -> Result<()> {
        self.mines.dirty |= self.registry.set_value(self.mines.handle, game.mines_left())?;
        self.timer.dirty |= self.registry.set_value(self.timer.handle, game.elapsed_secs())?;
        Ok(())
    }

    /// Flip leading-zero visibility on both displays.
    pub fn toggle_leading_zeros(&mut self) -> Result<bool> {
        let visible = !self.style.leading_zeros_visible;
        self.style = self.style.with_leading_zeros(visible);

        for placed in [&mut self.mines, &mut self.timer] {
            let value = self.registry.value(placed.handle)?;
            let size = self.registry.set_style(placed.handle, self.style.with_value(value))?;
            self.registry.get_mut(placed.handle)?.on_resize(size);
            placed.dirty = true;
        }
        log::info!("leading zeros {}", if visible { "shown" } else { "hidden" });
        Ok(visible)
    }

    /// Whether anything is waiting to be painted.
    pub const fn needs_paint(&self) -> bool {
        self.first_frame || self.button_dirty || self.mines.dirty || self.timer.dirty
    }

    /// Paint every invalidated element. Returns how many displays were painted.
    pub fn paint<D>(
        &mut self,
        surface: &mut D,
    ) -> Result<usize>
    where
        D: DrawTarget<Color = Rgb888>,
        D::Error: std::error::Error + Send + Sync + 'static,
    {
        if self.first_frame {
            surface.clear(BUTTON_FACE)?;
            self.first_frame = false;
        }
        if self.button_dirty {
            self.button.draw(surface)?;
            self.button_dirty = false;
            log::trace!("button repainted at {:?}", self.button.area().top_left);
        }

        let mut painted = 0;
        for placed in [&mut self.mines, &mut self.timer] {
            if !placed.dirty {
                continue;
            }
            let display = self.registry.get(placed.handle)?;
            let mut client = surface.cropped(&placed.area);
            display.on_paint(&mut client, display.bounds())?;
            placed.dirty = false;
            painted += 1;
        }
        Ok(painted)
    }

    /// Destroy both displays.
    pub fn shutdown(mut self) -> Result<()> {
        for handle in [self.mines.handle, self.timer.handle] {
            self.registry.destroy(handle)?;
        }
        debug_assert!(self.registry.is_empty());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use sevenseg_common::colors::{BLACK, RED};

    use super::*;

    /// Keeps the mines display and the button inside a 64x64 mock display.
    fn tiny_style() -> DisplayStyle {
        DisplayStyle::new()
            .with_digit_count(1)
            .with_digit_size(Size::new(4, 8))
            .with_digit_spacing(1)
            .with_segment_thickness(1)
            .with_colors(BLACK, RED)
    }

    fn mock() -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_window_fits_layout() {
        let host = Host::new(tiny_style()).unwrap();
        // Displays are 7x11: 12 + 7 + 5 + 38 + 5 + 7 + 12 wide, 5 + 38 + 12 high
        assert_eq!(host.window_size(), Size::new(86, 55));
    }

    #[test]
    fn test_first_paint_draws_everything() {
        let mut host = Host::new(tiny_style()).unwrap();
        assert!(host.needs_paint());

        let mut surface = mock();
        // Window is wider than the mock; the timer is clipped away
        let mut clipped = surface.clipped(&Rectangle::new(Point::zero(), Size::new(64, 64)));
        assert_eq!(host.paint(&mut clipped).unwrap(), 2);
        assert!(!host.needs_paint());
    }

    #[test]
    fn test_unchanged_game_paints_nothing() {
        let mut host = Host::new(tiny_style()).unwrap();
        let mut surface = mock();
        let mut clipped = surface.clipped(&Rectangle::new(Point::zero(), Size::new(64, 64)));
        host.paint(&mut clipped).unwrap();

        // Initial value 0 already shown on both
        host.show(&Game::new(0)).unwrap();
        assert!(!host.needs_paint());
    }

    #[test]
    fn test_mines_change_invalidates_one_display() {
        let mut host = Host::new(tiny_style()).unwrap();
        let mut surface = mock();
        let mut clipped = surface.clipped(&Rectangle::new(Point::zero(), Size::new(64, 64)));
        host.paint(&mut clipped).unwrap();

        host.show(&Game::new(7)).unwrap();
        assert_eq!(host.paint(&mut clipped).unwrap(), 1);
    }

    #[test]
    fn test_display_paints_in_its_own_area() {
        let mut host = Host::new(tiny_style().with_value(8)).unwrap();
        let mut surface = mock();
        let mut clipped = surface.clipped(&Rectangle::new(Point::zero(), Size::new(64, 64)));
        host.paint(&mut clipped).unwrap();

        // Mines display at (12, 5); its digit origin is (13, 6)
        assert_eq!(surface.get_pixel(Point::new(12, 5)), Some(BLACK));
        assert_eq!(surface.get_pixel(Point::new(11, 5)), Some(BUTTON_FACE));
        // Top segment edge of a lit 8 runs along y = 6
        assert_eq!(surface.get_pixel(Point::new(15, 6)), Some(RED));
    }

    #[test]
    fn test_toggle_leading_zeros_repaints_both() {
        let mut host = Host::new(tiny_style()).unwrap();
        let mut surface = mock();
        let mut clipped = surface.clipped(&Rectangle::new(Point::zero(), Size::new(64, 64)));
        host.paint(&mut clipped).unwrap();

        assert!(host.toggle_leading_zeros().unwrap());
        assert!(host.needs_paint());
        assert!(!host.toggle_leading_zeros().unwrap());
    }

    #[test]
    fn test_shutdown_destroys_displays() {
        let host = Host::new(tiny_style()).unwrap();
        host.shutdown().unwrap();
    }
}
