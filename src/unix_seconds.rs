//! Unix timestamp type for zone-independent instants

use time::{OffsetDateTime, UtcOffset};

/// Units-safe wrapper for Unix timestamps (seconds since 1970-01-01 00:00:00 UTC)
#[repr(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct UnixSeconds(pub i64);

impl UnixSeconds {
    /// Get the underlying i64 value
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Convert to `OffsetDateTime` as seen from a zone `offset_minutes` east of UTC
    #[must_use]
    pub fn to_offset_datetime(self, offset_minutes: i16) -> Option<OffsetDateTime> {
        let offset = utc_offset(offset_minutes)?;
        OffsetDateTime::from_unix_timestamp(self.as_i64())
            .ok()
            .map(|dt| dt.to_offset(offset))
    }
}

/// `UtcOffset` for a whole number of minutes east of UTC.
pub(crate) fn utc_offset(offset_minutes: i16) -> Option<UtcOffset> {
    UtcOffset::from_whole_seconds(i32::from(offset_minutes).checked_mul(60)?).ok()
}
