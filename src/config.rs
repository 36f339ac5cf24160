//! Runtime configuration for [`ClockFace`](crate::ClockFace).

use crate::shared_constants::{DISPLAY_TICK_HZ, LOW_BATTERY_MILLIVOLTS, SETTINGS_TICK_HZ};

/// Tunables for the clock face.
///
/// The defaults come from compile-time constants; the low-battery threshold can be
/// overridden at build time with `LOW_BATTERY_MILLIVOLTS`.
///
/// # Example
///
/// ```
/// use watch_clock_face::ClockConfig;
///
/// let config = ClockConfig::default().with_low_battery_millivolts(2500);
/// assert_eq!(config.low_battery_millivolts(), 2500);
/// assert_eq!(config.settings_tick_hz(), 4);
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    low_battery_millivolts: u16,
    display_tick_hz: u8,
    settings_tick_hz: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            low_battery_millivolts: LOW_BATTERY_MILLIVOLTS,
            display_tick_hz: DISPLAY_TICK_HZ,
            settings_tick_hz: SETTINGS_TICK_HZ,
        }
    }
}

impl ClockConfig {
    #[must_use]
    pub const fn with_low_battery_millivolts(mut self, millivolts: u16) -> Self {
        self.low_battery_millivolts = millivolts;
        self
    }

    /// Event rate requested while showing the time.
    #[must_use]
    pub const fn with_display_tick_hz(mut self, hz: u8) -> Self {
        self.display_tick_hz = hz;
        self
    }

    /// Event rate requested while browsing zones. Must be fast enough to blink.
    #[must_use]
    pub const fn with_settings_tick_hz(mut self, hz: u8) -> Self {
        self.settings_tick_hz = hz;
        self
    }

    #[must_use]
    pub const fn low_battery_millivolts(&self) -> u16 {
        self.low_battery_millivolts
    }

    #[must_use]
    pub const fn display_tick_hz(&self) -> u8 {
        self.display_tick_hz
    }

    #[must_use]
    pub const fn settings_tick_hz(&self) -> u8 {
        self.settings_tick_hz
    }
}
