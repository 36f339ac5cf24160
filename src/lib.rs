//! A low-power clock face for segment-display watches.
//!
//! The host firmware owns the hardware and the event loop and drives the face through
//! the [`WatchFace`] lifecycle. The face shows the time with the fewest segment
//! rewrites it can, checks the battery once a day, and lets the user re-anchor the
//! clock to another zone from [`TIME_ZONES`] without disturbing the instant it keeps.
#![no_std]

mod fmt;

mod battery;
mod clock_face;
mod config;
mod error;
mod refresh;
mod segment_buffer;
pub mod settings_block;
mod shared_constants;
pub mod time_zone;
mod unix_seconds;
pub mod watch;
mod watch_date_time;
pub mod zone_selector;

// Re-export commonly used items
pub use battery::BatteryMonitor;
pub use clock_face::{ClockFace, Mode};
pub use config::ClockConfig;
pub use error::{Error, Result};
pub use refresh::{Line, PowerMode, RefreshPlan, SlotUpdate};
pub use segment_buffer::{SegmentBuffer, TEXT_CAPACITY};
pub use settings_block::{SettingsBlock, WatchSettings};
pub use shared_constants::*;
pub use time_zone::{Direction, TIME_ZONES, TimeZone, ZoneIndex};
pub use unix_seconds::UnixSeconds;
pub use watch::{
    BatterySource, Event, EventType, Indicator, Scheduler, SegmentDisplay, Separator, WallClock,
    Watch, WatchFace, ZoneSettings,
};
pub use watch_date_time::{
    Granularity, HOUR_SHIFT, LAST_YEAR, MINUTE_SHIFT, REFERENCE_YEAR, WatchDateTime,
};
