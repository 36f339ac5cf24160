//! Host-level tests for the persisted settings block.
#![cfg(feature = "host")]

use watch_clock_face::settings_block::{BLOCK_SIZE, load, save};
use watch_clock_face::{Error, SettingsBlock, WatchSettings, ZoneIndex, ZoneSettings};

#[test]
fn blank_block_loads_as_nothing() {
    assert_eq!(load(&[0xFF; BLOCK_SIZE]), Ok(None));
    assert_eq!(load(&[0x00; BLOCK_SIZE]), Ok(None));
}

#[test]
fn saved_block_loads_back() {
    let block = save(&WatchSettings { zone_index: 33 }).unwrap();
    assert_eq!(load(&block), Ok(Some(WatchSettings { zone_index: 33 })));
}

#[test]
fn flipped_bit_is_detected() {
    let mut block = save(&WatchSettings { zone_index: 7 }).unwrap();
    block[6] ^= 0x01;
    assert_eq!(load(&block), Err(Error::SettingsCorrupted));
}

#[test]
fn bad_length_is_detected() {
    let mut block = save(&WatchSettings { zone_index: 7 }).unwrap();
    block[4] = 0xFF;
    assert_eq!(load(&block), Err(Error::SettingsCorrupted));
}

#[test]
fn fresh_hardware_starts_in_utc() {
    let settings = SettingsBlock::default();
    assert_eq!(settings.zone_index(), ZoneIndex::UTC);
}

#[test]
fn corrupt_or_out_of_range_falls_back_to_utc() {
    let mut corrupt = save(&WatchSettings { zone_index: 7 }).unwrap();
    corrupt[6] ^= 0x01;
    assert_eq!(SettingsBlock::from_bytes(corrupt).zone_index(), ZoneIndex::UTC);

    let out_of_range = save(&WatchSettings { zone_index: 41 }).unwrap();
    let settings = SettingsBlock::from_bytes(out_of_range);
    assert_eq!(settings.zone_index(), ZoneIndex::UTC);
    assert_eq!(settings.settings(), &WatchSettings { zone_index: 0 });
}

#[test]
fn zone_change_survives_a_power_cycle() {
    let mut settings = SettingsBlock::default();
    assert!(!settings.take_modified());

    let azores = ZoneIndex::new(40).unwrap();
    settings.set_zone_index(azores);
    assert!(settings.take_modified());
    assert!(!settings.take_modified());

    let stored = *settings.as_bytes();
    let reloaded = SettingsBlock::from_bytes(stored);
    assert_eq!(reloaded.zone_index(), azores);
    assert_eq!(reloaded.settings(), &WatchSettings { zone_index: 40 });
}
