//! Host-side timing.
//!
//! `Duration` lives in `std`, so these stay out of the `no_std` widget crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Period of the elapsed-time counter.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
