//! The fixed table of selectable time zones and a range-checked index into it.

use crate::shared_constants::ZONE_COUNT;
use crate::{Error, Result};

/// One selectable time zone: an abbreviation and its offset east of UTC.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone {
    pub name: &'static str,
    pub offset_minutes: i16,
}

const fn zone(name: &'static str, offset_minutes: i16) -> TimeZone {
    TimeZone {
        name,
        offset_minutes,
    }
}

/// Every zone the user can pick, UTC first, then eastward, then the western offsets.
pub static TIME_ZONES: [TimeZone; ZONE_COUNT] = [
    zone("UTC", 0),
    zone("CET", 60),     // Central European Time
    zone("SAST", 120),   // South African Standard Time
    zone("ARST", 180),   // Arabia Standard Time
    zone("IRST", 210),   // Iran Standard Time
    zone("GET", 240),    // Georgia Standard Time
    zone("AFT", 270),    // Afghanistan Time
    zone("PKT", 300),    // Pakistan Standard Time
    zone("IST", 330),    // Indian Standard Time
    zone("NPT", 345),    // Nepal Time
    zone("KGT", 360),    // Kyrgyzstan Time
    zone("MYST", 390),   // Myanmar Time
    zone("THA", 420),    // Thailand Standard Time
    zone("CST", 480),    // China Standard Time
    zone("ACWS", 525),   // Australian Central Western Standard Time
    zone("JST", 540),    // Japan Standard Time
    zone("ACST", 570),   // Australian Central Standard Time
    zone("AEST", 600),   // Australian Eastern Standard Time
    zone("LHST", 630),   // Lord Howe Standard Time
    zone("SBT", 660),    // Solomon Islands Time
    zone("NZST", 720),   // New Zealand Standard Time
    zone("CHAS", 765),   // Chatham Standard Time
    zone("TOT", 780),    // Tonga Time
    zone("CHAD", 825),   // Chatham Daylight Time
    zone("LINT", 840),   // Line Islands Time
    zone("BIT", -720),   // Baker Island Time
    zone("NUT", -660),   // Niue Time
    zone("HST", -600),   // Hawaii-Aleutian Standard Time
    zone("MART", -570),  // Marquesas Islands Time
    zone("AKST", -540),  // Alaska Standard Time
    zone("PST", -480),   // Pacific Standard Time
    zone("MST", -420),   // Mountain Standard Time
    zone("CST", -360),   // Central Standard Time
    zone("EST", -300),   // Eastern Standard Time
    zone("VET", -270),   // Venezuelan Standard Time
    zone("AST", -240),   // Atlantic Standard Time
    zone("NST", -210),   // Newfoundland Standard Time
    zone("BRT", -180),   // Brasilia Time
    zone("NDT", -150),   // Newfoundland Daylight Time
    zone("FNT", -120),   // Fernando de Noronha Time
    zone("AZOT", -60),   // Azores Standard Time
];

/// Which way a browse button moves through [`TIME_ZONES`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An index into [`TIME_ZONES`]. Always in `0..ZONE_COUNT`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ZoneIndex(u8);

impl ZoneIndex {
    pub const UTC: Self = Self(0);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the table has fewer than 256 entries"
    )]
    pub const LAST: Self = Self(ZONE_COUNT as u8 - 1);

    /// # Errors
    ///
    /// Returns [`Error::ZoneIndexOutOfRange`] if `index` does not name a table entry.
    pub const fn new(index: u8) -> Result<Self> {
        if index <= Self::LAST.0 {
            Ok(Self(index))
        } else {
            Err(Error::ZoneIndexOutOfRange(index))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "ZoneIndex is only ever constructed in range"
    )]
    pub fn zone(self) -> &'static TimeZone {
        &TIME_ZONES[usize::from(self.0)]
    }

    /// Step one entry through the table, wrapping at both ends.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "both steps are guarded by the wraparound checks"
    )]
    pub const fn advance(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => {
                if self.0 >= Self::LAST.0 {
                    Self::UTC
                } else {
                    Self(self.0 + 1)
                }
            }
            Direction::Backward => {
                if self.0 == Self::UTC.0 {
                    Self::LAST
                } else {
                    Self(self.0 - 1)
                }
            }
        }
    }
}

impl TryFrom<u8> for ZoneIndex {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<ZoneIndex> for u8 {
    fn from(index: ZoneIndex) -> Self {
        index.0
    }
}
