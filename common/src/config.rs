//! Default style and engine configuration constants.
//!
//! These are the values a freshly created display starts with. Hosts that
//! want something else build a [`DisplayStyle`](crate::style::DisplayStyle)
//! and have it validated at construction time.

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{BLACK, YELLOW};

// =============================================================================
// Default Display Style
// =============================================================================

/// Width and height of a single digit cell in device units.
pub const DEFAULT_DIGIT_SIZE: Size = Size::new(20, 40);

/// Thickness of each segment, measured along its inward edge.
pub const DEFAULT_SEGMENT_THICKNESS: u32 = 3;

/// Gap between neighbouring digits and between digits and the border.
pub const DEFAULT_DIGIT_SPACING: u32 = 5;

/// Number of digit slots.
pub const DEFAULT_DIGIT_COUNT: usize = 3;

/// Unused leading slots are blank unless explicitly enabled.
pub const DEFAULT_LEADING_ZEROS_VISIBLE: bool = false;

/// Fill behind the digits.
pub const DEFAULT_BACKGROUND: Rgb888 = BLACK;

/// Color of lit segments. Unlit segments derive from it.
pub const DEFAULT_FOREGROUND: Rgb888 = YELLOW;

// =============================================================================
// Engine Limits
// =============================================================================

/// Upper bound on digit slots per display.
///
/// Frames and glyph rows are stack allocated, so the slot count is bounded.
/// `u32::MAX` has ten decimal digits; the rest is room for padding.
pub const MAX_DIGIT_COUNT: usize = 16;

/// Lightness percentage applied to the foreground for unlit segments.
/// 25 keeps a quarter of the brightness: dim, but the ghost digit stays visible.
pub const UNLIT_LIGHTNESS: i32 = 25;

/// Largest control width or height, and largest segment thickness.
///
/// A vertex is at most `extent + thickness + SEGMENT_GAP` from the control
/// origin, which stays inside `i32` at this bound.
pub const MAX_EXTENT: u32 = i32::MAX as u32 / 2;

/// Gap left at segment corners and junctions, in device units.
pub const SEGMENT_GAP: i32 = 1;

const _: () = assert!(DEFAULT_DIGIT_COUNT >= 1 && DEFAULT_DIGIT_COUNT <= MAX_DIGIT_COUNT);
const _: () = assert!(DEFAULT_SEGMENT_THICKNESS >= 1);
const _: () = assert!(UNLIT_LIGHTNESS >= 0 && UNLIT_LIGHTNESS < 100);
