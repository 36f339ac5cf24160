//! Logging macros that forward to `defmt` on the device and vanish on the host.
//!
//! Host test binaries have no `defmt` global logger to link against, so with the `host`
//! feature (or without `defmt`) the macros only type-check their arguments.
#![macro_use]

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! trace {
    ($($arg:tt)*) => { ::defmt::trace!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! error {
    ($($arg:tt)*) => { ::defmt::error!($($arg)*) };
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $(let _ = &$arg;)* }};
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $(let _ = &$arg;)* }};
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $(let _ = &$arg;)* }};
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $(let _ = &$arg;)* }};
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $(let _ = &$arg;)* }};
}
