//! Host-level tests for choosing and applying minimal display rewrites.
#![cfg(feature = "host")]

mod common;

use common::at;
use watch_clock_face::{
    PowerMode, RefreshPlan, SegmentBuffer, SegmentDisplay, SlotUpdate, WatchDateTime,
};

fn dirty_after(plan: &RefreshPlan) -> Vec<u8> {
    let mut display = SegmentBuffer::new();
    plan.apply(&mut display);
    SegmentBuffer::dirty_slots(display.take_dirty()).collect()
}

fn plan(previous: Option<WatchDateTime>, current: WatchDateTime, mode: PowerMode) -> RefreshPlan {
    RefreshPlan::new(previous.as_ref(), &current, mode).expect("line fits")
}

#[test]
fn seconds_only_change_rewrites_two_digits() {
    let plan = plan(
        Some(at(2024, 1, 10, 14, 30, 5)),
        at(2024, 1, 10, 14, 30, 6),
        PowerMode::Normal,
    );
    assert_eq!(plan.update, SlotUpdate::Seconds(['0', '6']));
    assert!(!plan.check_battery);
    assert_eq!(dirty_after(&plan), [8, 9]);
}

#[test]
fn every_second_of_a_minute_stays_on_the_cheap_path() {
    for second in 1..60 {
        let plan = plan(
            Some(at(2024, 1, 10, 14, 30, second - 1)),
            at(2024, 1, 10, 14, 30, second),
            PowerMode::Normal,
        );
        assert!(matches!(plan.update, SlotUpdate::Seconds(_)), "second {second}");
        assert_eq!(dirty_after(&plan), [8, 9]);
    }
}

#[test]
fn minute_change_rewrites_minutes_and_seconds() {
    let plan = plan(
        Some(at(2024, 1, 10, 14, 30, 59)),
        at(2024, 1, 10, 14, 31, 0),
        PowerMode::Normal,
    );
    assert!(matches!(&plan.update, SlotUpdate::Minutes(line) if line == "3100"));
    assert!(plan.check_battery);
    assert_eq!(dirty_after(&plan), [6, 7, 8, 9]);
}

#[test]
fn hour_rollover_rewrites_everything() {
    let plan = plan(
        Some(at(2024, 1, 10, 14, 59, 59)),
        at(2024, 1, 10, 15, 0, 0),
        PowerMode::Normal,
    );
    assert!(matches!(&plan.update, SlotUpdate::Full(line) if line == "WE10150000"));
    assert!(plan.check_battery);
    assert_eq!(dirty_after(&plan), (0..10).collect::<Vec<u8>>());
}

#[test]
fn day_change_rewrites_everything() {
    let plan = plan(
        Some(at(2024, 2, 29, 23, 59, 59)),
        at(2024, 3, 1, 0, 0, 0),
        PowerMode::Normal,
    );
    assert!(matches!(&plan.update, SlotUpdate::Full(line) if line == "FR 1 00000"));
}

#[test]
fn first_render_is_always_full() {
    let plan = plan(None, at(2024, 3, 1, 9, 5, 7), PowerMode::Normal);
    assert!(matches!(&plan.update, SlotUpdate::Full(line) if line == "FR 1 90507"));
    assert!(plan.check_battery);
}

#[test]
fn low_power_minute_change_blanks_seconds() {
    let plan = plan(
        Some(at(2024, 1, 10, 14, 12, 0)),
        at(2024, 1, 10, 14, 13, 0),
        PowerMode::LowPower,
    );
    assert!(matches!(&plan.update, SlotUpdate::Minutes(line) if line == "13  "));
    assert!(plan.check_battery);

    let mut display = SegmentBuffer::new();
    display_full(&mut display, "WE101412  ");
    plan.apply(&mut display);
    assert_eq!(display.text(), "WE101413  ");
}

#[test]
fn low_power_hour_change_writes_line_without_seconds() {
    let plan = plan(
        Some(at(2024, 1, 10, 13, 59, 0)),
        at(2024, 1, 10, 14, 0, 0),
        PowerMode::LowPower,
    );
    assert!(matches!(&plan.update, SlotUpdate::Full(line) if line == "WE101400  "));
    assert!(plan.check_battery);
}

fn display_full(display: &mut SegmentBuffer, text: &str) {
    display.write_text(text, 0);
    display.take_dirty();
}
