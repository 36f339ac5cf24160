//! Decide how little of the display can be rewritten for a new time.
//!
//! Rewriting segments costs power, so each render only touches the fields that
//! changed since the previous one:
//!
//! | Power mode | Granularity | Rewritten | Battery check |
//! | --- | --- | --- | --- |
//! | Normal | second | the two seconds digits | no |
//! | Normal | minute | minutes and seconds | yes |
//! | Normal | full | the whole line | yes |
//! | Low power | second or minute | minutes, seconds blanked | yes |
//! | Low power | full | the whole line, seconds blanked | yes |

use heapless::String;

use crate::shared_constants::{
    MINUTE_SLOT, SECOND_ONES_SLOT, SECOND_TENS_SLOT, SLOT_COUNT, WEEKDAY_SLOT,
};
use crate::watch::SegmentDisplay;
use crate::watch_date_time::{Granularity, WatchDateTime};
use crate::Result;

/// A fixed-width run of display characters.
pub type Line<const N: usize> = String<N>;

/// How often the host is delivering time updates.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerMode {
    /// Every second; seconds are shown.
    #[default]
    Normal,
    /// Once a minute; seconds are left blank.
    LowPower,
}

/// The display slots to overwrite and their new contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotUpdate {
    /// The seconds tens and ones digits, written one character at a time.
    Seconds([char; 2]),
    /// Four characters starting at the minute slot.
    Minutes(Line<4>),
    /// The entire line.
    Full(Line<SLOT_COUNT>),
}

/// What one render writes, and whether it is a good moment to check the battery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshPlan {
    pub update: SlotUpdate,
    pub check_battery: bool,
}

impl RefreshPlan {
    /// Plan the rewrite from `previous` (`None` right after activation) to `current`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatError`](crate::Error::FormatError) if a line does not fit
    /// its slots.
    pub fn new(
        previous: Option<&WatchDateTime>,
        current: &WatchDateTime,
        power_mode: PowerMode,
    ) -> Result<Self> {
        let granularity = current.granularity_since(previous);
        trace!("Refresh: {} in {}", granularity, power_mode);
        let plan = match (power_mode, granularity) {
            (PowerMode::Normal, Granularity::Second) => Self {
                update: SlotUpdate::Seconds([
                    tens_digit(current.second),
                    ones_digit(current.second),
                ]),
                check_battery: false,
            },
            (PowerMode::Normal, Granularity::Minute) => {
                let mut line = Line::<4>::new();
                push_zero_padded(&mut line, current.minute)?;
                push_zero_padded(&mut line, current.second)?;
                Self::checked(SlotUpdate::Minutes(line))
            }
            (PowerMode::Normal, Granularity::Full) => {
                let mut line = full_line_through_minutes(current)?;
                push_zero_padded(&mut line, current.second)?;
                Self::checked(SlotUpdate::Full(line))
            }
            (PowerMode::LowPower, Granularity::Second | Granularity::Minute) => {
                let mut line = Line::<4>::new();
                push_zero_padded(&mut line, current.minute)?;
                line.push_str("  ")?;
                Self::checked(SlotUpdate::Minutes(line))
            }
            (PowerMode::LowPower, Granularity::Full) => {
                let mut line = full_line_through_minutes(current)?;
                line.push_str("  ")?;
                Self::checked(SlotUpdate::Full(line))
            }
        };
        Ok(plan)
    }

    const fn checked(update: SlotUpdate) -> Self {
        Self {
            update,
            check_battery: true,
        }
    }

    /// Write the planned characters and nothing else.
    pub fn apply(&self, display: &mut impl SegmentDisplay) {
        match &self.update {
            SlotUpdate::Seconds([tens, ones]) => {
                display.write_char(*tens, SECOND_TENS_SLOT);
                display.write_char(*ones, SECOND_ONES_SLOT);
            }
            SlotUpdate::Minutes(line) => display.write_text(line, MINUTE_SLOT),
            SlotUpdate::Full(line) => display.write_text(line, WEEKDAY_SLOT),
        }
    }
}

fn full_line_through_minutes(current: &WatchDateTime) -> Result<Line<SLOT_COUNT>> {
    let mut line = Line::<SLOT_COUNT>::new();
    line.push_str(current.weekday_label())?;
    push_space_padded(&mut line, current.day)?;
    push_space_padded(&mut line, current.hour)?;
    push_zero_padded(&mut line, current.minute)?;
    Ok(line)
}

/// `value` as two digits, leading zero kept.
pub(crate) fn push_zero_padded<const N: usize>(line: &mut Line<N>, value: u8) -> Result<()> {
    line.push(tens_digit(value))?;
    line.push(ones_digit(value))?;
    Ok(())
}

/// `value` as two digits, leading zero shown as a blank.
pub(crate) fn push_space_padded<const N: usize>(line: &mut Line<N>, value: u8) -> Result<()> {
    line.push(if value < 10 { ' ' } else { tens_digit(value) })?;
    line.push(ones_digit(value))?;
    Ok(())
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "Result is a single decimal digit"
)]
const fn tens_digit(value: u8) -> char {
    ((value / 10 % 10) + b'0') as char
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "Result is a single decimal digit"
)]
const fn ones_digit(value: u8) -> char {
    ((value % 10) + b'0') as char
}
