//! Window layout: two displays either side of the new-game button.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ 12 ┌─────────┐ 5 ┌─────┐ 5 ┌─────────┐ 12    │ 5 from the top
//! │    │  MINES  │   │ NEW │   │  TIME   │       │
//! │    └─────────┘   └─────┘   └─────────┘       │
//! │                                   12 bottom  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The button is centered horizontally and against the display height, but
//! never rises above the top margin.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Gap between the window edge and the displays on the left and right.
pub const SIDE_MARGIN: u32 = 12;

/// Gap above the displays.
pub const TOP_MARGIN: u32 = 5;

/// Gap below the tallest element.
pub const BOTTOM_MARGIN: u32 = 12;

/// Gap between the button and each display.
pub const BUTTON_GAP: u32 = 5;

/// Face image plus the 12-unit border a push button adds around it.
pub const BUTTON_SIZE: Size = Size::new(26 + 12, 26 + 12);

/// Placement of everything in the window, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub window: Size,
    pub mines: Rectangle,
    pub timer: Rectangle,
    pub button: Rectangle,
}

impl Layout {
    /// Lay out two displays of `display` size around a `button`.
    pub fn compute(
        display: Size,
        button: Size,
    ) -> Self {
        let width = SIDE_MARGIN + display.width + BUTTON_GAP + button.width + BUTTON_GAP + display.width + SIDE_MARGIN;
        let height = TOP_MARGIN + display.height.max(button.height) + BOTTOM_MARGIN;

        let mines = Rectangle::new(Point::new(SIDE_MARGIN as i32, TOP_MARGIN as i32), display);
        let timer = Rectangle::new(
            Point::new((width - display.width - SIDE_MARGIN) as i32, TOP_MARGIN as i32),
            display,
        );
        let button_origin = Point::new(
            width as i32 / 2 - button.width as i32 / 2,
            TOP_MARGIN as i32 + (display.height.saturating_sub(button.height) / 2) as i32,
        );

        Self {
            window: Size::new(width, height),
            mines,
            timer,
            button: Rectangle::new(button_origin, button),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
