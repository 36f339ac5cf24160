use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display("Format error")]
    FormatError,

    #[display("Date-time fields do not form a real calendar date")]
    InvalidDateTime,

    #[display("Date-time is outside the years the watch can represent")]
    DateOutOfRange,

    #[display("Time zone index {_0} is out of range")]
    ZoneIndexOutOfRange(#[error(not(source))] u8),

    #[display("Settings could not be serialized")]
    SettingsSerialize,

    #[display("Settings storage is corrupted")]
    SettingsCorrupted,
}

impl From<()> for Error {
    fn from((): ()) -> Self {
        Self::FormatError
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(_: time::error::ComponentRange) -> Self {
        Self::InvalidDateTime
    }
}
