//! Color constants and the lightness transform used for unlit segments.
//!
//! # Rgb888 Color Format
//!
//! The widget works in 8 bits per channel. Hosts with a narrower native format
//! (e.g. RGB565 panels) convert at the draw target.
//!
//! # Lightness Adjustment
//!
//! [`adjust_lightness`] blends a color linearly toward black or white:
//!
//! ```text
//! percent:   0 ........ 100 ........ 200
//! result:  black ... unchanged ... white
//! ```
//!
//! Below 100 the blend target is black and the color keeps `percent / 100` of
//! its channel values. Above 100 the target is white and the color moves
//! `(percent - 100) / 100` of the way there.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Default display background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white (255, 255, 255).
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure yellow (255, 255, 0). Default lit segment color.
pub const YELLOW: Rgb888 = Rgb888::YELLOW;

/// Pure red (255, 0, 0).
pub const RED: Rgb888 = Rgb888::RED;

// =============================================================================
// Custom Colors (host chrome)
// =============================================================================

/// Light gray face used by the host for button surfaces.
pub const BUTTON_FACE: Rgb888 = Rgb888::new(192, 192, 192);

/// Dark gray edge used by the host for button borders.
pub const BUTTON_EDGE: Rgb888 = Rgb888::new(128, 128, 128);

// =============================================================================
// Lightness Transform
// =============================================================================

/// Lowest accepted lightness percentage (fully black).
pub const LIGHTNESS_MIN: i32 = 0;

/// Lightness percentage that leaves a color unchanged.
pub const LIGHTNESS_IDENTITY: i32 = 100;

/// Highest accepted lightness percentage (fully white).
pub const LIGHTNESS_MAX: i32 = 200;

/// Lighten or darken `color` by a percentage.
///
/// `percent` is clamped to `[0, 200]`; 100 returns `color` untouched. Each
/// resulting channel is clamped to `[0, 255]` and truncated.
///
/// # Example
/// ```
/// use embedded_graphics::pixelcolor::Rgb888;
/// use sevenseg_common::colors::adjust_lightness;
///
/// let dimmed = adjust_lightness(Rgb888::new(255, 255, 0), 25);
/// assert_eq!(dimmed, Rgb888::new(63, 63, 0));
/// ```
pub fn adjust_lightness(
    color: Rgb888,
    percent: i32,
) -> Rgb888 {
    if percent == LIGHTNESS_IDENTITY {
        return color;
    }

    let percent = percent.clamp(LIGHTNESS_MIN, LIGHTNESS_MAX);
    let delta = (percent - LIGHTNESS_IDENTITY) as f32 / 100.0;

    // Weight kept by the source color; the rest comes from the target.
    let (target, alpha) = if percent > LIGHTNESS_IDENTITY {
        (255u8, 1.0 - delta)
    } else {
        (0u8, 1.0 + delta)
    };

    Rgb888::new(
        blend_channel(color.r(), target, alpha),
        blend_channel(color.g(), target, alpha),
        blend_channel(color.b(), target, alpha),
    )
}

/// `target + alpha * (source - target)`, clamped and truncated to a channel.
fn blend_channel(
    source: u8,
    target: u8,
    alpha: f32,
) -> u8 {
    let source = f32::from(source);
    let target = f32::from(target);
    let blended = target + alpha * (source - target);
    blended.clamp(0.0, 255.0) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
