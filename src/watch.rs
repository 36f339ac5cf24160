//! The interfaces between a watch face and the firmware that hosts it.
//!
//! The host owns the hardware and the event loop. It hands a face one [`Event`] at a
//! time, together with a [`Watch`]: a single value that reaches the real-time clock,
//! the segment display, the battery sense line, the scheduler and the settings store.
//! Faces never hold on to the hardware between events.

use crate::WatchDateTime;
use crate::time_zone::ZoneIndex;

/// What happened since the host last called the face.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventType {
    #[default]
    None,
    /// The face just became the visible one.
    Activate,
    /// Regular tick at the requested frequency.
    Tick,
    /// Once-a-minute tick while the watch is in low-energy mode.
    LowEnergyUpdate,
    BackgroundTask,
    /// The host's inactivity timer ran out.
    Timeout,
    LightButtonDown,
    LightButtonUp,
    LightLongPress,
    ModeButtonDown,
    ModeButtonUp,
    ModeLongPress,
    AlarmButtonDown,
    AlarmButtonUp,
    AlarmLongPress,
}

/// An event plus the position within the current second it was raised at.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Event {
    pub event_type: EventType,
    /// Counts ticks within the current second; its low bit drives blinking.
    pub subsecond: u8,
}

impl Event {
    #[must_use]
    pub const fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            subsecond: 0,
        }
    }

    #[must_use]
    pub const fn with_subsecond(mut self, subsecond: u8) -> Self {
        self.subsecond = subsecond;
        self
    }
}

impl From<EventType> for Event {
    fn from(event_type: EventType) -> Self {
        Self::new(event_type)
    }
}

/// The small status icons around the main digits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Hourly chime is enabled.
    Signal,
    Bell,
    Pm,
    H24,
    /// "Low available power": the battery is getting weak.
    Lap,
}

impl Indicator {
    pub const ALL: [Self; 5] = [Self::Signal, Self::Bell, Self::Pm, Self::H24, Self::Lap];
}

/// What is shown between the hour and minute digits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Blank,
    Colon,
}

/// The real-time clock.
pub trait WallClock {
    fn date_time(&self) -> WatchDateTime;
    fn set_date_time(&mut self, date_time: WatchDateTime);
}

/// A single line of character positions plus indicators.
pub trait SegmentDisplay {
    /// Write `text` starting at `position`; characters past the end are dropped.
    fn write_text(&mut self, text: &str, position: u8);
    fn write_char(&mut self, character: char, position: u8);
    fn set_indicator(&mut self, indicator: Indicator, on: bool);
    fn set_separator(&mut self, separator: Separator);
}

/// The supply-voltage sense line. Only powered between `enable` and `disable`.
pub trait BatterySource {
    fn enable_sampling(&mut self);
    fn read_voltage_millivolts(&mut self) -> u16;
    fn disable_sampling(&mut self);
}

/// Services the host's event loop offers to the visible face.
pub trait Scheduler {
    fn request_tick_frequency(&mut self, hz: u8);
    fn move_to_next_face(&mut self);
    /// The host's handling for events a face does not consume itself.
    ///
    /// `true` means handled with nothing more to redraw.
    fn default_loop_handler(&mut self, event: Event) -> bool;
}

/// Settings that survive a power cycle.
pub trait ZoneSettings {
    fn zone_index(&self) -> ZoneIndex;
    fn set_zone_index(&mut self, index: ZoneIndex);
}

/// Everything a face may touch while handling an event.
pub trait Watch: WallClock + SegmentDisplay + BatterySource + Scheduler + ZoneSettings {}

impl<T> Watch for T where T: WallClock + SegmentDisplay + BatterySource + Scheduler + ZoneSettings {}

/// The lifecycle the host drives every face through.
///
/// The host keeps one `Option<Self>` slot per face for the life of the firmware and
/// passes the face back to itself on every call.
pub trait WatchFace<W: Watch>: Sized {
    /// Fill `context` if it is empty. Calling this again leaves existing state alone.
    fn setup<'a>(context: &'a mut Option<Self>, face_index: u8, watch: &W) -> &'a mut Self;

    /// The face is about to become visible.
    fn activate(&mut self, watch: &mut W);

    /// Handle one event. The return value follows [`Scheduler::default_loop_handler`].
    fn handle_event(&mut self, event: Event, watch: &mut W) -> bool;

    /// The face is about to be hidden.
    fn resign(&mut self, watch: &mut W);
}
