//! Per-instance display style and its validation.

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;

use crate::config::{
    DEFAULT_BACKGROUND,
    DEFAULT_DIGIT_COUNT,
    DEFAULT_DIGIT_SIZE,
    DEFAULT_DIGIT_SPACING,
    DEFAULT_FOREGROUND,
    DEFAULT_LEADING_ZEROS_VISIBLE,
    DEFAULT_SEGMENT_THICKNESS,
    MAX_DIGIT_COUNT,
    MAX_EXTENT,
};
use crate::error::StyleError;

/// Everything that determines what a display paints.
///
/// `digit_count`, `digit_size` and `digit_spacing` together fix the
/// [`required_size`](Self::required_size) of the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayStyle {
    /// Number to show.
    pub value: u32,
    /// Size of a single digit cell.
    pub digit_size: Size,
    pub segment_thickness: u32,
    /// Gap between digits, and between digits and the border.
    pub digit_spacing: u32,
    pub digit_count: usize,
    /// Show `0` in unused leading slots instead of a blank.
    pub leading_zeros_visible: bool,
    pub background: Rgb888,
    pub foreground: Rgb888,
}

impl DisplayStyle {
    /// Default style: three 20×40 digits, 3-unit segments, yellow on black.
    pub const fn new() -> Self {
        Self {
            value: 0,
            digit_size: DEFAULT_DIGIT_SIZE,
            segment_thickness: DEFAULT_SEGMENT_THICKNESS,
            digit_spacing: DEFAULT_DIGIT_SPACING,
            digit_count: DEFAULT_DIGIT_COUNT,
            leading_zeros_visible: DEFAULT_LEADING_ZEROS_VISIBLE,
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
        }
    }

    #[must_use]
    pub const fn with_value(
        mut self,
        value: u32,
    ) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub const fn with_digit_size(
        mut self,
        digit_size: Size,
    ) -> Self {
        self.digit_size = digit_size;
        self
    }

    #[must_use]
    pub const fn with_segment_thickness(
        mut self,
        segment_thickness: u32,
    ) -> Self {
        self.segment_thickness = segment_thickness;
        self
    }

    #[must_use]
    pub const fn with_digit_spacing(
        mut self,
        digit_spacing: u32,
    ) -> Self {
        self.digit_spacing = digit_spacing;
        self
    }

    #[must_use]
    pub const fn with_digit_count(
        mut self,
        digit_count: usize,
    ) -> Self {
        self.digit_count = digit_count;
        self
    }

    #[must_use]
    pub const fn with_leading_zeros(
        mut self,
        visible: bool,
    ) -> Self {
        self.leading_zeros_visible = visible;
        self
    }

    #[must_use]
    pub const fn with_colors(
        mut self,
        background: Rgb888,
        foreground: Rgb888,
    ) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Check the style can be rendered.
    ///
    /// Construction APIs call this; a display never holds a style that fails it.
    pub const fn validate(&self) -> Result<(), StyleError> {
        if self.digit_count == 0 {
            return Err(StyleError::ZeroDigitCount);
        }
        if self.digit_count > MAX_DIGIT_COUNT {
            return Err(StyleError::TooManyDigits {
                requested: self.digit_count,
                max: MAX_DIGIT_COUNT,
            });
        }
        if self.segment_thickness == 0 {
            return Err(StyleError::ZeroThickness);
        }
        if self.digit_size.width == 0 || self.digit_size.height == 0 {
            return Err(StyleError::EmptyDigitSize);
        }
        let size = self.required_size();
        if size.width > MAX_EXTENT || size.height > MAX_EXTENT || self.segment_thickness > MAX_EXTENT {
            return Err(StyleError::TooLarge { max: MAX_EXTENT });
        }
        Ok(())
    }

    /// Client size the host must give the control for nothing to be clipped.
    ///
    /// ```text
    /// width  = spacing + (digit_width + spacing) * digit_count + 1
    /// height = spacing * 2 + digit_height + 1
    /// ```
    ///
    /// Saturates at `u32::MAX` for styles too large to validate.
    pub const fn required_size(&self) -> Size {
        let spacing = self.digit_spacing;
        let count = if self.digit_count > u32::MAX as usize { u32::MAX } else { self.digit_count as u32 };
        let width = spacing
            .saturating_add(self.digit_size.width.saturating_add(spacing).saturating_mul(count))
            .saturating_add(1);
        let height = spacing.saturating_mul(2).saturating_add(self.digit_size.height).saturating_add(1);
        Size::new(width, height)
    }
}

impl Default for DisplayStyle {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
