//! Counters shown by the two displays.
//!
//! The simulator has no board; it keeps just enough state to drive the mines
//! counter and the elapsed-seconds timer the way a minesweeper window would.

use std::time::Instant;

use crate::timing::TICK_INTERVAL;

/// The timer stops counting here, the largest three-digit value.
pub const MAX_ELAPSED_SECS: u32 = 999;

#[derive(Clone, Copy, Debug)]
pub struct Game {
    initial_mines: u32,
    mines_left: u32,
    elapsed_secs: u32,
    /// Time of the next one-second tick; `None` before the first tick.
    next_tick: Option<Instant>,
}

impl Game {
    pub const fn new(mines: u32) -> Self {
        Self {
            initial_mines: mines,
            mines_left: mines,
            elapsed_secs: 0,
            next_tick: None,
        }
    }

    /// Reset both counters. The timer starts with the next tick.
    pub const fn new_game(&mut self) {
        self.mines_left = self.initial_mines;
        self.elapsed_secs = 0;
        self.next_tick = None;
    }

    #[inline]
    pub const fn mines_left(&self) -> u32 { self.mines_left }

    #[inline]
    pub const fn elapsed_secs(&self) -> u32 { self.elapsed_secs }

    /// One more flag placed. Saturates at zero.
    pub const fn flag(&mut self) { self.mines_left = self.mines_left.saturating_sub(1); }

    /// One flag removed. Never exceeds the mines of a fresh game.
    pub fn unflag(&mut self) { self.mines_left = self.mines_left.saturating_add(1).min(self.initial_mines); }

    /// Advance the timer to `now`. Returns `true` when the seconds changed.
    ///
    /// The first call after a new game only arms the timer, so the counter
    /// reads zero for a full second. Missed ticks (a stalled frame) are
    /// caught up in one call.
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> bool {
        let Some(mut next) = self.next_tick else {
            self.next_tick = Some(now + TICK_INTERVAL);
            return false;
        };

        let before = self.elapsed_secs;
        while now >= next {
            self.elapsed_secs = (self.elapsed_secs + 1).min(MAX_ELAPSED_SECS);
            next += TICK_INTERVAL;
        }
        self.next_tick = Some(next);
        self.elapsed_secs != before
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
