//! An in-memory segment display.
//!
//! [`SegmentBuffer`] keeps what a real segment LCD would be showing: ten character
//! slots, the indicator icons and the hour/minute separator. It also remembers which
//! slots were written since the last [`SegmentBuffer::take_dirty`], so a driver can
//! push only those to the glass (and tests can check that a render touched only what
//! it should).

use heapless::String;

use crate::shared_constants::SLOT_COUNT;
use crate::watch::{Indicator, SegmentDisplay, Separator};

/// Bytes needed to hold every slot as UTF-8, four per character at most.
pub const TEXT_CAPACITY: usize = SLOT_COUNT * 4;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentBuffer {
    slots: [char; SLOT_COUNT],
    indicators: u8,
    separator: Separator,
    dirty: u16,
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [' '; SLOT_COUNT],
            indicators: 0,
            separator: Separator::Blank,
            dirty: 0,
        }
    }

    /// Everything currently shown, one character per slot.
    #[must_use]
    pub fn text(&self) -> String<TEXT_CAPACITY> {
        let mut text = String::new();
        for &character in &self.slots {
            if text.push(character).is_err() {
                break;
            }
        }
        text
    }

    #[must_use]
    pub fn slot(&self, position: u8) -> Option<char> {
        self.slots.get(usize::from(position)).copied()
    }

    #[must_use]
    pub const fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators & indicator_bit(indicator) != 0
    }

    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Slots written since the last call, as a bit mask (bit `n` is slot `n`).
    pub const fn take_dirty(&mut self) -> u16 {
        let dirty = self.dirty;
        self.dirty = 0;
        dirty
    }

    /// The slot positions set in a [`take_dirty`](Self::take_dirty) mask.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "positions are below SLOT_COUNT, which fits the mask and a u8"
    )]
    pub fn dirty_slots(mask: u16) -> impl Iterator<Item = u8> {
        (0..SLOT_COUNT as u8).filter(move |&position| mask & (1 << position) != 0)
    }
}

impl SegmentDisplay for SegmentBuffer {
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "positions are below SLOT_COUNT, which fits the mask"
    )]
    fn write_text(&mut self, text: &str, position: u8) {
        for (offset, character) in text.chars().enumerate() {
            let Some(position) = usize::from(position).checked_add(offset) else {
                break;
            };
            let Some(slot) = self.slots.get_mut(position) else {
                break;
            };
            *slot = character;
            self.dirty |= 1 << position;
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "positions are below SLOT_COUNT, which fits the mask"
    )]
    fn write_char(&mut self, character: char, position: u8) {
        if let Some(slot) = self.slots.get_mut(usize::from(position)) {
            *slot = character;
            self.dirty |= 1 << position;
        }
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        if on {
            self.indicators |= indicator_bit(indicator);
        } else {
            self.indicators &= !indicator_bit(indicator);
        }
    }

    fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
    }
}

#[expect(
    clippy::arithmetic_side_effects,
    reason = "there are fewer indicators than bits in a u8"
)]
const fn indicator_bit(indicator: Indicator) -> u8 {
    1 << indicator as u8
}
