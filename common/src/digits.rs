//! Value → digit slot formatting.
//!
//! The value is written out in decimal, cut down to the least significant
//! `digit_count` characters, and left-padded with `'0'` or a blank depending on
//! whether leading zeros are visible.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::MAX_DIGIT_COUNT;
use crate::segments::Glyph;

/// Longest decimal rendering of a `u32`.
const U32_DECIMAL_LEN: usize = 10;

/// One glyph per digit slot, left to right.
pub type GlyphRow = Vec<Glyph, MAX_DIGIT_COUNT>;

/// Format `value` into exactly `digit_count` glyphs.
///
/// `digit_count` is clamped to `MAX_DIGIT_COUNT`; styles are validated before
/// they reach here, so the clamp only guards the fixed-capacity row.
pub fn format_digits(
    value: u32,
    digit_count: usize,
    leading_zeros_visible: bool,
) -> GlyphRow {
    let digit_count = digit_count.min(MAX_DIGIT_COUNT);

    let mut decimal: String<U32_DECIMAL_LEN> = String::new();
    // Cannot overflow: u32::MAX is ten characters
    write!(decimal, "{value}").ok();

    let kept = &decimal[decimal.len().saturating_sub(digit_count)..];
    let pad = if leading_zeros_visible { Glyph::ZERO } else { Glyph::BLANK };

    let mut row = GlyphRow::new();
    for _ in kept.len()..digit_count {
        row.push(pad).ok();
    }
    for ch in kept.chars() {
        if let Some(glyph) = Glyph::from_char(ch) {
            row.push(glyph).ok();
        }
    }
    row
}

/// Render a glyph row back to text, e.g. for logging.
pub fn row_to_string(row: &[Glyph]) -> String<MAX_DIGIT_COUNT> {
    let mut text = String::new();
    for glyph in row {
        text.push(glyph.as_char()).ok();
    }
    text
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(
        value: u32,
        digit_count: usize,
        leading_zeros_visible: bool,
    ) -> String<MAX_DIGIT_COUNT> {
        row_to_string(&format_digits(value, digit_count, leading_zeros_visible))
    }

    #[test]
    fn test_truncates_to_least_significant_digits() {
        assert_eq!(shown(12345, 3, false), "345");
        assert_eq!(shown(12345, 3, true), "345");
    }

    #[test]
    fn test_leading_zeros_visible() {
        assert_eq!(shown(7, 3, true), "007");
    }

    #[test]
    fn test_leading_zeros_hidden() {
        assert_eq!(shown(7, 3, false), "  7");
    }

    #[test]
    fn test_zero_value_keeps_one_digit() {
        assert_eq!(shown(0, 3, false), "  0", "Zero itself is always shown");
        assert_eq!(shown(0, 1, false), "0");
    }

    #[test]
    fn test_exact_width_is_untouched() {
        assert_eq!(shown(999, 3, false), "999");
    }

    #[test]
    fn test_max_value_in_wide_display() {
        assert_eq!(shown(u32::MAX, 12, true), "004294967295");
        assert_eq!(shown(u32::MAX, 12, false), "  4294967295");
    }

    #[test]
    fn test_row_length_matches_digit_count() {
        for digit_count in 1..=MAX_DIGIT_COUNT {
            for value in [0, 5, 42, 1000, 98_765, u32::MAX] {
                let row = format_digits(value, digit_count, false);
                assert_eq!(row.len(), digit_count, "value {value} in {digit_count} slots");
            }
        }
    }
}
