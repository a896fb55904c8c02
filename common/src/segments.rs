//! Segment identities and the digit → lit-segment lookup table.
//!
//! ```text
//!       TOP
//!     ┌─────┐
//!  TL │     │ TR
//!     ├─MID─┤
//!  BL │     │ BR
//!     └─────┘
//!      BOTTOM
//! ```
//!
//! A [`SegmentSet`] is a 7-bit mask, bit `n` set when the segment with
//! discriminant `n` is lit. The table covers exactly the characters the digit
//! formatter can produce: a blank and `'0'..='9'`.

// =============================================================================
// Segment
// =============================================================================

/// One of the seven polygonal regions of a digit.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Top = 0,
    TopLeft = 1,
    TopRight = 2,
    Middle = 3,
    BottomLeft = 4,
    BottomRight = 5,
    Bottom = 6,
}

impl Segment {
    /// Number of segments per digit.
    pub const COUNT: usize = 7;

    /// All segments in paint order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::Middle,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Bottom,
    ];

    /// Mask bit for this segment.
    #[inline]
    pub const fn bit(self) -> u8 { 1 << self as u8 }
}

// =============================================================================
// Segment Set
// =============================================================================

/// Set of lit segments for one digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SegmentSet(u8);

impl SegmentSet {
    /// No segment lit (blank digit).
    pub const EMPTY: Self = Self(0);

    /// Every segment lit.
    pub const FULL: Self = Self(0b111_1111);

    /// Build a set from a list of segments.
    pub const fn from_segments(segments: &[Segment]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < segments.len() {
            mask |= segments[i].bit();
            i += 1;
        }
        Self(mask)
    }

    #[inline]
    pub const fn contains(
        self,
        segment: Segment,
    ) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments.
    #[inline]
    pub const fn len(self) -> u32 { self.0.count_ones() }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// Raw 7-bit mask.
    #[inline]
    pub const fn mask(self) -> u8 { self.0 }
}

// =============================================================================
// Digit → Segment Table
// =============================================================================

use Segment::{Bottom, BottomLeft, BottomRight, Middle, Top, TopLeft, TopRight};

/// Number of displayable characters.
pub const DIGIT_SEGMENT_ENTRIES: usize = 11;

/// Lit segments for every displayable character.
pub static DIGIT_SEGMENTS: [(char, SegmentSet); DIGIT_SEGMENT_ENTRIES] = [
    (' ', SegmentSet::EMPTY),
    ('0', SegmentSet::from_segments(&[Top, TopLeft, TopRight, BottomLeft, BottomRight, Bottom])),
    ('1', SegmentSet::from_segments(&[TopRight, BottomRight])),
    ('2', SegmentSet::from_segments(&[Top, TopRight, Middle, BottomLeft, Bottom])),
    ('3', SegmentSet::from_segments(&[Top, TopRight, Middle, BottomRight, Bottom])),
    ('4', SegmentSet::from_segments(&[TopLeft, TopRight, Middle, BottomRight])),
    ('5', SegmentSet::from_segments(&[Top, TopLeft, Middle, BottomRight, Bottom])),
    ('6', SegmentSet::from_segments(&[Top, TopLeft, Middle, BottomLeft, BottomRight, Bottom])),
    ('7', SegmentSet::from_segments(&[Top, TopRight, BottomRight])),
    ('8', SegmentSet::FULL),
    ('9', SegmentSet::from_segments(&[Top, TopLeft, TopRight, Middle, BottomRight, Bottom])),
];

/// Look up the lit segments for a character.
///
/// Returns `None` for anything outside the table.
pub fn segments_for(ch: char) -> Option<SegmentSet> {
    DIGIT_SEGMENTS
        .iter()
        .find(|(entry, _)| *entry == ch)
        .map(|&(_, set)| set)
}

// =============================================================================
// Glyph
// =============================================================================

/// A character that is guaranteed to be in [`DIGIT_SEGMENTS`].
///
/// Holds the table index (0 for blank, `1 + d` for digit `d`). The field is
/// private; glyphs only come from [`Glyph::BLANK`], [`Glyph::digit`] and
/// [`Glyph::from_char`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(u8);

impl Glyph {
    /// Unused leading slot.
    pub const BLANK: Self = Self(0);

    /// Zero, also used for visible leading zeros.
    pub const ZERO: Self = Self(1);

    /// Glyph for decimal digit `d`. `None` unless `d <= 9`.
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 { Some(Self(1 + d)) } else { None }
    }

    /// Convert a display character. `None` if the table has no entry for it.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::BLANK),
            '0'..='9' => Self::digit(ch as u8 - b'0'),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_blank(self) -> bool { self.0 == 0 }

    pub const fn as_char(self) -> char {
        match self.0 {
            0 => ' ',
            i => (b'0' + i - 1) as char,
        }
    }

    /// Lit segments for this glyph.
    pub fn segments(self) -> SegmentSet { DIGIT_SEGMENTS[self.0 as usize].1 }
}

impl core::fmt::Debug for Glyph {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "Glyph({:?})", self.as_char())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_eleven_entries() {
        assert_eq!(DIGIT_SEGMENTS.len(), 11);
        for ch in [' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'] {
            assert!(segments_for(ch).is_some(), "'{ch}' should have an entry");
        }
    }

    #[test]
    fn test_unknown_characters_have_no_entry() {
        for ch in ['-', 'A', '.', '\0'] {
            assert!(segments_for(ch).is_none(), "'{ch}' should not be displayable");
        }
    }

    #[test]
    fn test_zero_lights_all_but_middle() {
        let zero = segments_for('0').unwrap();
        assert_eq!(zero.len(), 6);
        assert!(!zero.contains(Segment::Middle), "'0' must not light MIDDLE");
        for segment in Segment::ALL.into_iter().filter(|s| *s != Segment::Middle) {
            assert!(zero.contains(segment), "'0' should light {segment:?}");
        }
    }

    #[test]
    fn test_one_lights_right_side_only() {
        let one = segments_for('1').unwrap();
        assert_eq!(one, SegmentSet::from_segments(&[Segment::TopRight, Segment::BottomRight]));
        assert_eq!(one.len(), 2);
    }

    #[test]
    fn test_eight_lights_everything() {
        let eight = segments_for('8').unwrap();
        assert_eq!(eight, SegmentSet::FULL);
        assert!(Segment::ALL.iter().all(|s| eight.contains(*s)));
    }

    #[test]
    fn test_blank_lights_nothing() {
        let blank = segments_for(' ').unwrap();
        assert!(blank.is_empty());
        assert!(Segment::ALL.iter().all(|s| !blank.contains(*s)));
    }

    #[test]
    fn test_glyph_segments_match_table() {
        for (ch, set) in DIGIT_SEGMENTS {
            let glyph = Glyph::from_char(ch).unwrap();
            assert_eq!(glyph.as_char(), ch);
            assert_eq!(glyph.segments(), set, "Glyph for '{ch}' disagrees with the table");
        }
        assert_eq!(Glyph::from_char('x'), None);
    }

    #[test]
    fn test_glyph_digit_is_range_checked() {
        for d in 0..=9u8 {
            let glyph = Glyph::digit(d).unwrap();
            assert_eq!(glyph.as_char(), char::from(b'0' + d));
            assert_eq!(Some(glyph.segments()), segments_for(glyph.as_char()));
        }
        assert_eq!(Glyph::digit(10), None, "Only decimal digits are glyphs");
        assert_eq!(Glyph::digit(42), None);
        assert_eq!(Glyph::digit(0), Some(Glyph::ZERO));
        assert!(Glyph::BLANK.is_blank());
        assert!(Glyph::BLANK.segments().is_empty());
    }

    #[test]
    fn test_segment_bits_are_distinct() {
        let combined = Segment::ALL.iter().fold(0u8, |acc, s| {
            assert_eq!(acc & s.bit(), 0, "{s:?} shares a bit");
            acc | s.bit()
        });
        assert_eq!(combined, SegmentSet::FULL.mask());
    }
}
