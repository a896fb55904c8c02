//! Error types for display construction and registry access.

use crate::registry::DisplayHandle;

/// A style that cannot be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("digit count must be at least 1")]
    ZeroDigitCount,

    #[error("digit count {requested} exceeds the maximum of {max}")]
    TooManyDigits { requested: usize, max: usize },

    #[error("segment thickness must be at least 1")]
    ZeroThickness,

    #[error("digit width and height must be non-zero")]
    EmptyDigitSize,

    /// Control size or segment thickness does not fit device coordinates.
    #[error("control size or segment thickness exceeds {max} units")]
    TooLarge { max: u32 },
}

/// Failure of a registry operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The handle was never issued, or its display has been destroyed.
    #[error("unknown or destroyed display {0}")]
    InvalidHandle(DisplayHandle),

    #[error("invalid display style: {0}")]
    Style(#[from] StyleError),
}
