//! Handle-keyed ownership of display instances.
//!
//! A host that addresses widgets by handle (the way window systems address
//! child windows) keeps its displays in a [`DisplayRegistry`]. The registry is
//! an ordinary owned value: whoever owns it serializes access through `&mut`,
//! so no locking is involved.
//!
//! # Handle Reuse
//!
//! Destroyed slots are recycled, but every slot carries a generation counter
//! that is bumped on destroy. A stale handle keeps its old generation and is
//! rejected with [`Error::InvalidHandle`] even after its slot is reused.

use alloc::vec::Vec;
use core::fmt;

use embedded_graphics::geometry::Size;

use crate::display::SevenSegmentDisplay;
use crate::error::Error;
use crate::render::Frame;
use crate::style::DisplayStyle;
use crate::widget::Widget;

/// Opaque reference to a display owned by a [`DisplayRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayHandle {
    index: u32,
    generation: u32,
}

impl fmt::Display for DisplayHandle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

struct Slot {
    generation: u32,
    display: Option<SevenSegmentDisplay>,
}

/// Owns every live display and hands out handles to them.
#[derive(Default)]
pub struct DisplayRegistry {
    slots: Vec<Slot>,
    /// Indices of empty slots, reused last-in first-out.
    free: Vec<u32>,
}

impl DisplayRegistry {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create a display with `style` and send it the create notification.
    ///
    /// Returns its handle and the size the host must give it.
    pub fn create(
        &mut self,
        style: DisplayStyle,
    ) -> Result<(DisplayHandle, Size), Error> {
        let mut display = SevenSegmentDisplay::new(style)?;
        let size = display.on_create();

        let handle = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.display = Some(display);
            DisplayHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                display: Some(display),
            });
            DisplayHandle { index, generation: 0 }
        };

        log::debug!("registered display {handle}");
        Ok((handle, size))
    }

    /// Send the destroy notification and drop the display.
    pub fn destroy(
        &mut self,
        handle: DisplayHandle,
    ) -> Result<(), Error> {
        let slot = self.slot_mut(handle)?;
        if let Some(mut display) = slot.display.take() {
            display.on_destroy();
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);

        log::debug!("unregistered display {handle}");
        Ok(())
    }

    pub fn get(
        &self,
        handle: DisplayHandle,
    ) -> Result<&SevenSegmentDisplay, Error> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.display.as_ref())
            .ok_or(Error::InvalidHandle(handle))
    }

    pub fn get_mut(
        &mut self,
        handle: DisplayHandle,
    ) -> Result<&mut SevenSegmentDisplay, Error> {
        self.slot_mut(handle)?
            .display
            .as_mut()
            .ok_or(Error::InvalidHandle(handle))
    }

    /// See [`SevenSegmentDisplay::set_value`]. `Ok(true)` means repaint.
    pub fn set_value(
        &mut self,
        handle: DisplayHandle,
        value: u32,
    ) -> Result<bool, Error> {
        Ok(self.get_mut(handle)?.set_value(value))
    }

    pub fn value(
        &self,
        handle: DisplayHandle,
    ) -> Result<u32, Error> {
        Ok(self.get(handle)?.value())
    }

    /// Reset a display's style. Returns the new required size.
    pub fn set_style(
        &mut self,
        handle: DisplayHandle,
        style: DisplayStyle,
    ) -> Result<Size, Error> {
        Ok(self.get_mut(handle)?.set_style(style)?)
    }

    pub fn required_size(
        &self,
        handle: DisplayHandle,
    ) -> Result<Size, Error> {
        Ok(self.get(handle)?.required_size())
    }

    pub fn render(
        &self,
        handle: DisplayHandle,
    ) -> Result<Frame, Error> {
        Ok(self.get(handle)?.render())
    }

    /// Number of live displays.
    pub fn len(&self) -> usize { self.slots.iter().filter(|s| s.display.is_some()).count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Handles of all live displays, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = DisplayHandle> + '_ {
        self.slots.iter().enumerate().filter(|(_, s)| s.display.is_some()).map(|(i, s)| DisplayHandle {
            index: i as u32,
            generation: s.generation,
        })
    }

    fn slot_mut(
        &mut self,
        handle: DisplayHandle,
    ) -> Result<&mut Slot, Error> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.display.is_some())
            .ok_or(Error::InvalidHandle(handle))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
