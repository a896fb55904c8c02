//! Seven-segment display widget core.
//!
//! This crate contains everything about the widget that does not depend on a
//! particular window system:
//!
//! - [`colors`]: Color constants and the lightness transform for unlit segments
//! - [`config`]: Default style values and engine limits
//! - [`segments`]: Segment identities and the digit → lit-segment table
//! - [`digits`]: Value → digit slot formatting (truncation and padding)
//! - [`geometry`]: Segment polygon construction
//! - [`style`]: Per-instance style, validation and required size
//! - [`render`]: Frame construction and polygon rasterization
//! - [`offscreen`]: Scoped off-screen paint buffer
//! - [`display`]: The display widget itself
//! - [`widget`]: Host → widget notification trait
//! - [`registry`]: Handle-keyed ownership of display instances
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and only needs `alloc` for the off-screen buffer and
//! the registry. Drawing goes through `embedded_graphics::DrawTarget`, so the
//! same widget paints into a desktop simulator window or a panel framebuffer.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod colors;
pub mod config;
pub mod digits;
pub mod display;
pub mod error;
pub mod geometry;
pub mod offscreen;
pub mod registry;
pub mod render;
pub mod segments;
pub mod style;
pub mod widget;

// Re-export commonly used items
pub use colors::adjust_lightness;
pub use display::SevenSegmentDisplay;
pub use error::{Error, StyleError};
pub use registry::{DisplayHandle, DisplayRegistry};
pub use render::{Frame, SegmentShape};
pub use segments::{Glyph, Segment, SegmentSet};
pub use style::DisplayStyle;
pub use widget::Widget;
