//! Host-level tests for the watch's date-time type.
#![cfg(feature = "host")]

mod common;

use common::at;
use watch_clock_face::{
    Error, Granularity, HOUR_SHIFT, LAST_YEAR, MINUTE_SHIFT, REFERENCE_YEAR, UnixSeconds,
    WatchDateTime,
};

#[test]
fn new_rejects_impossible_dates() {
    assert_eq!(WatchDateTime::new(2023, 2, 29, 0, 0, 0), Err(Error::InvalidDateTime));
    assert_eq!(WatchDateTime::new(2024, 13, 1, 0, 0, 0), Err(Error::InvalidDateTime));
    assert_eq!(WatchDateTime::new(2024, 1, 1, 24, 0, 0), Err(Error::InvalidDateTime));
    assert_eq!(WatchDateTime::new(2019, 12, 31, 0, 0, 0), Err(Error::DateOutOfRange));
    assert!(WatchDateTime::new(2024, 2, 29, 23, 59, 59).is_ok());
}

#[test]
fn register_layout_matches_rtc() {
    let date_time = at(2024, 1, 10, 14, 30, 5);
    let register = date_time.to_register();
    assert_eq!(register & 0x3F, 5);
    assert_eq!((register >> 6) & 0x3F, 30);
    assert_eq!((register >> 12) & 0x1F, 14);
    assert_eq!((register >> 17) & 0x1F, 10);
    assert_eq!((register >> 22) & 0x0F, 1);
    assert_eq!(register >> 26, u32::from(2024 - REFERENCE_YEAR));
    assert_eq!(WatchDateTime::from_register(register), date_time);
    assert_eq!(LAST_YEAR, 2083);
}

#[test]
fn granularity_agrees_with_register_shifts() {
    let base = at(2024, 1, 10, 14, 30, 5);
    let cases = [
        (at(2024, 1, 10, 14, 30, 6), Granularity::Second),
        (at(2024, 1, 10, 14, 30, 5), Granularity::Second),
        (at(2024, 1, 10, 14, 31, 0), Granularity::Minute),
        (at(2024, 1, 10, 14, 29, 59), Granularity::Minute),
        (at(2024, 1, 10, 15, 30, 5), Granularity::Full),
        (at(2024, 1, 11, 14, 30, 5), Granularity::Full),
        (at(2024, 2, 10, 14, 30, 5), Granularity::Full),
        (at(2025, 1, 10, 14, 30, 5), Granularity::Full),
    ];
    for (current, expected) in cases {
        assert_eq!(current.granularity_since(Some(&base)), expected, "{current:?}");

        let (now, before) = (current.to_register(), base.to_register());
        let by_shift = if now >> MINUTE_SHIFT == before >> MINUTE_SHIFT {
            Granularity::Second
        } else if now >> HOUR_SHIFT == before >> HOUR_SHIFT {
            Granularity::Minute
        } else {
            Granularity::Full
        };
        assert_eq!(by_shift, expected, "{current:?}");
    }
}

#[test]
fn nothing_rendered_means_full_redraw() {
    let now = at(2024, 1, 10, 14, 30, 5);
    assert_eq!(now.granularity_since(None), Granularity::Full);
}

#[test]
fn weekday_labels() {
    assert_eq!(at(2024, 1, 10, 0, 0, 0).weekday_label(), "WE");
    assert_eq!(at(2024, 2, 29, 0, 0, 0).weekday_label(), "TH");
    assert_eq!(at(2024, 3, 1, 0, 0, 0).weekday_label(), "FR");
    assert_eq!(at(2025, 6, 15, 0, 0, 0).weekday_label(), "SU");
    let bogus = WatchDateTime::from_register(0);
    assert_eq!(bogus.weekday_label(), "  ");
}

#[test]
fn unix_conversion_applies_offset() {
    let local = at(2024, 1, 10, 14, 30, 0);
    assert_eq!(local.to_unix(0), Ok(UnixSeconds(1_704_897_000)));
    // The same wall time one hour east of UTC is an hour earlier.
    assert_eq!(local.to_unix(60), Ok(UnixSeconds(1_704_897_000 - 3600)));
    assert_eq!(
        WatchDateTime::from_unix(UnixSeconds(1_704_897_000), -60),
        Ok(at(2024, 1, 10, 13, 30, 0))
    );
}

#[test]
fn from_unix_rejects_years_the_rtc_cannot_hold() {
    // 2019-12-31T23:00:00Z
    let instant = UnixSeconds(1_577_833_200);
    assert_eq!(WatchDateTime::from_unix(instant, 0), Err(Error::DateOutOfRange));
    assert_eq!(
        WatchDateTime::from_unix(instant, 60),
        Ok(at(2020, 1, 1, 0, 0, 0))
    );
}
