// The segment display is a single line of 10 character positions:
// weekday (0..2), day (2..4), hour (4..6), minute (6..8), second (8..10).
pub const SLOT_COUNT: usize = 10;
pub const WEEKDAY_SLOT: u8 = 0;
pub const MINUTE_SLOT: u8 = 6;
pub const SECOND_TENS_SLOT: u8 = 8;
pub const SECOND_ONES_SLOT: u8 = 9;

pub const DISPLAY_TICK_HZ: u8 = 1;
pub const SETTINGS_TICK_HZ: u8 = 4;

pub const ZONE_COUNT: usize = 41;

/// Battery voltage below which the low-power indicator is lit.
///
/// Set `LOW_BATTERY_MILLIVOLTS` at build time (environment or `.env`) to override.
pub const LOW_BATTERY_MILLIVOLTS: u16 = parse_millivolts(env!("LOW_BATTERY_MILLIVOLTS"));

// build.rs has already rejected anything that isn't a u16.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_lossless,
    clippy::indexing_slicing,
    reason = "build.rs validates the value fits a u16"
)]
const fn parse_millivolts(text: &str) -> u16 {
    let bytes = text.as_bytes();
    let mut value: u16 = 0;
    let mut index = 0;
    while index < bytes.len() {
        value = value * 10 + (bytes[index] - b'0') as u16;
        index += 1;
    }
    value
}
