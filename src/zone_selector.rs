//! Browsing the zone table and switching the clock to the chosen zone.

use crate::refresh::{Line, push_space_padded, push_zero_padded};
use crate::shared_constants::SLOT_COUNT;
use crate::time_zone::ZoneIndex;
use crate::watch_date_time::WatchDateTime;
use crate::{Error, Result};

/// The settings screen for `index`, e.g. `"AZ40 -0100"`.
///
/// Shows the first two letters of the zone name, the index, then the offset as a sign
/// and `hhmm`. When `blink_on` is false the index digits are blanked so the field
/// being edited flashes.
///
/// # Errors
///
/// Returns [`Error::FormatError`](crate::Error::FormatError) if the line does not fit.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "splitting minutes into hours and minutes"
)]
pub fn render_preview(index: ZoneIndex, blink_on: bool) -> Result<Line<SLOT_COUNT>> {
    let zone = index.zone();
    let offset = zone.offset_minutes.unsigned_abs();
    // Every offset in the table is below 100 hours.
    let hours = u8::try_from(offset / 60).map_err(|_| Error::FormatError)?;
    let minutes = u8::try_from(offset % 60).map_err(|_| Error::FormatError)?;

    let mut line = Line::<SLOT_COUNT>::new();
    for character in zone.name.chars().chain(core::iter::repeat(' ')).take(2) {
        line.push(character)?;
    }
    if blink_on {
        push_space_padded(&mut line, index.get())?;
    } else {
        line.push_str("  ")?;
    }
    line.push(' ')?;
    line.push(if zone.offset_minutes < 0 { '-' } else { '+' })?;
    push_zero_padded(&mut line, hours)?;
    push_zero_padded(&mut line, minutes)?;
    Ok(line)
}

/// The blink phase for an event raised at `subsecond`: on for even ticks.
#[must_use]
pub const fn blink_on(subsecond: u8) -> bool {
    subsecond & 1 == 0
}

/// Re-express `now`, read under `old_offset_minutes`, in the zone at `index`.
///
/// The instant is unchanged; only its local representation moves.
///
/// # Errors
///
/// Returns [`Error::InvalidDateTime`](crate::Error::InvalidDateTime) if `now` is not a
/// real date-time, or [`Error::DateOutOfRange`](crate::Error::DateOutOfRange) if the
/// new local date cannot be held by the RTC.
pub fn reanchor(
    index: ZoneIndex,
    old_offset_minutes: i16,
    now: &WatchDateTime,
) -> Result<WatchDateTime> {
    let instant = now.to_unix(old_offset_minutes)?;
    WatchDateTime::from_unix(instant, index.zone().offset_minutes)
}
