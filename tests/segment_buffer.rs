//! Host-level tests for the in-memory segment display.
#![cfg(feature = "host")]

use watch_clock_face::{Indicator, SegmentBuffer, SegmentDisplay, Separator};

#[test]
fn starts_blank() {
    let mut display = SegmentBuffer::new();
    assert_eq!(display.text(), "          ");
    assert_eq!(display.separator(), Separator::Blank);
    assert_eq!(display.take_dirty(), 0);
    for indicator in Indicator::ALL {
        assert!(!display.indicator(indicator));
    }
}

#[test]
fn wide_characters_fit_in_every_slot() {
    let mut display = SegmentBuffer::new();
    display.write_char('°', 0);
    display.write_text("°°°°°°°°°", 1);
    assert_eq!(display.text(), "°°°°°°°°°°");
    assert_eq!(display.slot(9), Some('°'));
}

#[test]
fn text_past_the_end_is_dropped() {
    let mut display = SegmentBuffer::new();
    display.write_text("1234", 8);
    display.write_char('X', 10);
    assert_eq!(display.text(), "        12");
    assert_eq!(
        SegmentBuffer::dirty_slots(display.take_dirty()).collect::<Vec<u8>>(),
        [8, 9]
    );
}

#[test]
fn indicators_are_independent() {
    let mut display = SegmentBuffer::new();
    for indicator in Indicator::ALL {
        display.set_indicator(indicator, true);
    }
    display.set_indicator(Indicator::Bell, false);
    for indicator in Indicator::ALL {
        assert_eq!(display.indicator(indicator), indicator != Indicator::Bell);
    }
}
