//! Once-a-day battery check that drives the low-power indicator.

use crate::watch::{BatterySource, Indicator, SegmentDisplay};

/// Remembers the last battery verdict and the day it was taken.
///
/// Sampling powers up the sense line, so it happens at most once per calendar day no
/// matter how often [`BatteryMonitor::check_if_due`] is called.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryMonitor {
    threshold_millivolts: u16,
    last_check_day: Option<u8>,
    battery_low: bool,
}

impl BatteryMonitor {
    #[must_use]
    pub const fn new(threshold_millivolts: u16) -> Self {
        Self {
            threshold_millivolts,
            last_check_day: None,
            battery_low: false,
        }
    }

    #[must_use]
    pub const fn battery_low(&self) -> bool {
        self.battery_low
    }

    #[must_use]
    pub const fn last_check_day(&self) -> Option<u8> {
        self.last_check_day
    }

    #[must_use]
    pub const fn threshold_millivolts(&self) -> u16 {
        self.threshold_millivolts
    }

    /// Sample the battery unless it was already sampled on day-of-month `today`.
    ///
    /// Returns the new low-battery verdict when a sample was taken, `None` otherwise.
    /// The LAP indicator is updated to match every time a sample is taken.
    pub fn check_if_due<W>(&mut self, today: u8, watch: &mut W) -> Option<bool>
    where
        W: BatterySource + SegmentDisplay,
    {
        if self.last_check_day == Some(today) {
            return None;
        }
        self.last_check_day = Some(today);

        let millivolts = SamplingSession::new(watch).read_millivolts();
        self.battery_low = millivolts < self.threshold_millivolts;
        info!(
            "Battery: {} mV on day {} (low: {})",
            millivolts, today, self.battery_low
        );

        self.indicate(watch);
        Some(self.battery_low)
    }

    /// Mirror the current verdict on the LAP indicator.
    pub fn indicate(&self, display: &mut impl SegmentDisplay) {
        display.set_indicator(Indicator::Lap, self.battery_low);
    }
}

/// Keeps the sense line powered for exactly as long as it is alive.
struct SamplingSession<'a, B: BatterySource> {
    source: &'a mut B,
}

impl<'a, B: BatterySource> SamplingSession<'a, B> {
    fn new(source: &'a mut B) -> Self {
        source.enable_sampling();
        Self { source }
    }

    fn read_millivolts(self) -> u16 {
        self.source.read_voltage_millivolts()
    }
}

impl<B: BatterySource> Drop for SamplingSession<'_, B> {
    fn drop(&mut self) {
        self.source.disable_sampling();
    }
}
