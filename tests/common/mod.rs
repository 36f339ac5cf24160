//! A scripted watch for host tests: real display buffer, fake everything else.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use watch_clock_face::{
    BatterySource, Event, Indicator, Scheduler, SegmentBuffer, SegmentDisplay, Separator,
    WallClock, WatchDateTime, ZoneIndex, ZoneSettings,
};

pub struct FakeWatch {
    pub now: WatchDateTime,
    pub display: SegmentBuffer,
    pub millivolts: u16,
    pub sampling_enabled: bool,
    pub samples: usize,
    pub enables: usize,
    pub disables: usize,
    pub tick_frequencies: Vec<u8>,
    pub face_switches: usize,
    pub defaulted: Vec<Event>,
    pub default_result: bool,
    pub zone: ZoneIndex,
    pub zone_writes: usize,
    pub clock_writes: usize,
}

impl FakeWatch {
    pub fn new(now: WatchDateTime) -> Self {
        Self {
            now,
            display: SegmentBuffer::new(),
            millivolts: 3000,
            sampling_enabled: false,
            samples: 0,
            enables: 0,
            disables: 0,
            tick_frequencies: Vec::new(),
            face_switches: 0,
            defaulted: Vec::new(),
            default_result: true,
            zone: ZoneIndex::UTC,
            zone_writes: 0,
            clock_writes: 0,
        }
    }

    pub fn text(&self) -> String {
        self.display.text().as_str().to_owned()
    }

    /// Slots written since the last call.
    pub fn dirty_slots(&mut self) -> Vec<u8> {
        SegmentBuffer::dirty_slots(self.display.take_dirty()).collect()
    }
}

pub fn at(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> WatchDateTime {
    WatchDateTime::new(year, month, day, hour, minute, second).expect("valid test date")
}

impl WallClock for FakeWatch {
    fn date_time(&self) -> WatchDateTime {
        self.now
    }

    fn set_date_time(&mut self, date_time: WatchDateTime) {
        self.now = date_time;
        self.clock_writes += 1;
    }
}

impl SegmentDisplay for FakeWatch {
    fn write_text(&mut self, text: &str, position: u8) {
        self.display.write_text(text, position);
    }

    fn write_char(&mut self, character: char, position: u8) {
        self.display.write_char(character, position);
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.display.set_indicator(indicator, on);
    }

    fn set_separator(&mut self, separator: Separator) {
        self.display.set_separator(separator);
    }
}

impl BatterySource for FakeWatch {
    fn enable_sampling(&mut self) {
        assert!(!self.sampling_enabled, "sampling enabled twice");
        self.sampling_enabled = true;
        self.enables += 1;
    }

    fn read_voltage_millivolts(&mut self) -> u16 {
        assert!(self.sampling_enabled, "read without enabling sampling");
        self.samples += 1;
        self.millivolts
    }

    fn disable_sampling(&mut self) {
        assert!(self.sampling_enabled, "disabled without enabling");
        self.sampling_enabled = false;
        self.disables += 1;
    }
}

impl Scheduler for FakeWatch {
    fn request_tick_frequency(&mut self, hz: u8) {
        self.tick_frequencies.push(hz);
    }

    fn move_to_next_face(&mut self) {
        self.face_switches += 1;
    }

    fn default_loop_handler(&mut self, event: Event) -> bool {
        self.defaulted.push(event);
        self.default_result
    }
}

impl ZoneSettings for FakeWatch {
    fn zone_index(&self) -> ZoneIndex {
        self.zone
    }

    fn set_zone_index(&mut self, index: ZoneIndex) {
        self.zone = index;
        self.zone_writes += 1;
    }
}
