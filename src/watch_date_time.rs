//! Wall-clock date-time as kept by the watch's real-time clock.
//!
//! The RTC stores a [`WatchDateTime`] packed into one 32-bit register, seconds in the
//! low bits and years in the high bits, so "did anything above the seconds change?"
//! is a single shifted compare on the register. The clock face works on the
//! structured fields instead and asks [`WatchDateTime::granularity_since`], which
//! answers the same question without depending on the bit layout.

use time::{Date, Month, PrimitiveDateTime, Time, Weekday};

use crate::unix_seconds::{UnixSeconds, utc_offset};
use crate::{Error, Result};

/// First year the RTC register can hold; the register stores `year - REFERENCE_YEAR`.
pub const REFERENCE_YEAR: u16 = 2020;
/// Last year the RTC register can hold.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the year field is six bits wide"
)]
pub const LAST_YEAR: u16 = REFERENCE_YEAR + YEAR_MASK as u16;

const SECOND_BITS: u32 = 6;
const MINUTE_BITS: u32 = 6;
const HOUR_BITS: u32 = 5;
const DAY_BITS: u32 = 5;
const MONTH_BITS: u32 = 4;

/// Shift that drops the seconds field from a packed register.
pub const MINUTE_SHIFT: u32 = SECOND_BITS;
/// Shift that drops the minutes and seconds fields from a packed register.
pub const HOUR_SHIFT: u32 = SECOND_BITS + MINUTE_BITS;
const DAY_SHIFT: u32 = HOUR_SHIFT + HOUR_BITS;
const MONTH_SHIFT: u32 = DAY_SHIFT + DAY_BITS;
const YEAR_SHIFT: u32 = MONTH_SHIFT + MONTH_BITS;

const SECOND_MASK: u32 = (1 << SECOND_BITS) - 1;
const MINUTE_MASK: u32 = (1 << MINUTE_BITS) - 1;
const HOUR_MASK: u32 = (1 << HOUR_BITS) - 1;
const DAY_MASK: u32 = (1 << DAY_BITS) - 1;
const MONTH_MASK: u32 = (1 << MONTH_BITS) - 1;
const YEAR_MASK: u32 = (1 << (32 - YEAR_SHIFT)) - 1;

const WEEKDAY_LABELS: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

/// A date and time of day in some (unstated) time zone.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// The coarsest field that changed between two renders.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Granularity {
    /// Nothing above the seconds changed (including nothing at all).
    Second,
    /// The minute changed; hour and everything coarser did not.
    Minute,
    /// The hour, day, month or year changed, or there is no previous render.
    Full,
}

impl WatchDateTime {
    /// Build a validated date-time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if the fields are not a real calendar date and
    /// time of day, and [`Error::DateOutOfRange`] if the year cannot be held by the RTC.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let date_time = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        date_time.to_primitive()?;
        if !(REFERENCE_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::DateOutOfRange);
        }
        Ok(date_time)
    }

    /// Decode the RTC register layout. No validation is done.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        reason = "every field is masked to fit its type"
    )]
    #[must_use]
    pub const fn from_register(register: u32) -> Self {
        Self {
            year: REFERENCE_YEAR + ((register >> YEAR_SHIFT) & YEAR_MASK) as u16,
            month: ((register >> MONTH_SHIFT) & MONTH_MASK) as u8,
            day: ((register >> DAY_SHIFT) & DAY_MASK) as u8,
            hour: ((register >> HOUR_SHIFT) & HOUR_MASK) as u8,
            minute: ((register >> MINUTE_SHIFT) & MINUTE_MASK) as u8,
            second: (register & SECOND_MASK) as u8,
        }
    }

    /// Encode into the RTC register layout. Out-of-range fields are truncated.
    #[must_use]
    pub fn to_register(&self) -> u32 {
        let year = u32::from(self.year.wrapping_sub(REFERENCE_YEAR)) & YEAR_MASK;
        (year << YEAR_SHIFT)
            | ((u32::from(self.month) & MONTH_MASK) << MONTH_SHIFT)
            | ((u32::from(self.day) & DAY_MASK) << DAY_SHIFT)
            | ((u32::from(self.hour) & HOUR_MASK) << HOUR_SHIFT)
            | ((u32::from(self.minute) & MINUTE_MASK) << MINUTE_SHIFT)
            | (u32::from(self.second) & SECOND_MASK)
    }

    /// How much of the display must be rewritten to go from `previous` to `self`.
    ///
    /// `None` stands for "nothing has been rendered since activation" and always
    /// yields [`Granularity::Full`].
    #[must_use]
    pub fn granularity_since(&self, previous: Option<&Self>) -> Granularity {
        let Some(previous) = previous else {
            return Granularity::Full;
        };
        let same_hour = (self.year, self.month, self.day, self.hour)
            == (previous.year, previous.month, previous.day, previous.hour);
        if !same_hour {
            Granularity::Full
        } else if self.minute == previous.minute {
            Granularity::Second
        } else {
            Granularity::Minute
        }
    }

    /// Two-letter weekday, or two blanks if the fields are not a real date.
    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        self.to_primitive().map_or("  ", |date_time| {
            label_for(date_time.date().weekday())
        })
    }

    /// Interpret `self` as local time `offset_minutes` east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if the fields are not a real date-time.
    pub fn to_unix(&self, offset_minutes: i16) -> Result<UnixSeconds> {
        let offset = utc_offset(offset_minutes).ok_or(Error::InvalidDateTime)?;
        Ok(UnixSeconds(
            self.to_primitive()?.assume_offset(offset).unix_timestamp(),
        ))
    }

    /// The local time `offset_minutes` east of UTC at instant `unix_seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateOutOfRange`] if the local date falls outside the years the
    /// RTC can hold.
    pub fn from_unix(unix_seconds: UnixSeconds, offset_minutes: i16) -> Result<Self> {
        let local = unix_seconds
            .to_offset_datetime(offset_minutes)
            .ok_or(Error::DateOutOfRange)?;
        let year = u16::try_from(local.year()).map_err(|_| Error::DateOutOfRange)?;
        if !(REFERENCE_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::DateOutOfRange);
        }
        Ok(Self {
            year,
            month: u8::from(local.month()),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        })
    }

    fn to_primitive(self) -> Result<PrimitiveDateTime> {
        let month = Month::try_from(self.month)?;
        let date = Date::from_calendar_date(i32::from(self.year), month, self.day)?;
        let time = Time::from_hms(self.hour, self.minute, self.second)?;
        Ok(PrimitiveDateTime::new(date, time))
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "number_days_from_monday is always 0..=6"
)]
fn label_for(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[usize::from(weekday.number_days_from_monday())]
}
