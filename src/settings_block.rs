//! Watch settings persisted in a small checksummed block.
//!
//! The block is laid out as
//!
//! | Bytes | Contents |
//! | --- | --- |
//! | 0..4 | magic `'WSET'` |
//! | 4..6 | payload length |
//! | 6..6+n | [`WatchSettings`], `postcard` encoded |
//! | 6+n..10+n | CRC-32 of everything before it |
//!
//! Unused bytes are `0xFF`, matching erased flash. A block without the magic is
//! treated as empty rather than as an error, so fresh hardware starts in UTC.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::time_zone::ZoneIndex;
use crate::watch::ZoneSettings;
use crate::{Error, Result};

/// Size of the persisted block in bytes.
pub const BLOCK_SIZE: usize = 32;

const MAGIC: u32 = 0x5753_4554; // 'WSET'
const MAGIC_SIZE: usize = 4;
const LEN_SIZE: usize = 2;
const HEADER_SIZE: usize = MAGIC_SIZE + LEN_SIZE;
const CRC_SIZE: usize = 4;
const MAX_PAYLOAD_SIZE: usize = BLOCK_SIZE - HEADER_SIZE - CRC_SIZE;

/// Everything the watch remembers across power cycles.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WatchSettings {
    pub zone_index: u8,
}

/// Decode a block.
///
/// Returns `Ok(None)` for a blank or foreign block.
///
/// # Errors
///
/// Returns [`Error::SettingsCorrupted`] if the block carries the magic but its length,
/// checksum or payload is bad.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "payload length is bounded by MAX_PAYLOAD_SIZE"
)]
pub fn load(block: &[u8; BLOCK_SIZE]) -> Result<Option<WatchSettings>> {
    let (magic, rest) = block.split_at(MAGIC_SIZE);
    if u32::from_le_bytes(to_array(magic)?) != MAGIC {
        info!("Settings: no data");
        return Ok(None);
    }

    let (len, _) = rest.split_at(LEN_SIZE);
    let payload_len = usize::from(u16::from_le_bytes(to_array(len)?));
    if payload_len > MAX_PAYLOAD_SIZE {
        error!("Settings: invalid payload length {}", payload_len);
        return Err(Error::SettingsCorrupted);
    }

    let crc_offset = HEADER_SIZE + payload_len;
    let (covered, after) = block.split_at(crc_offset);
    let (stored_crc, _) = after.split_at(CRC_SIZE);
    let stored_crc = u32::from_le_bytes(to_array(stored_crc)?);
    let computed_crc = compute_crc(covered);
    if stored_crc != computed_crc {
        error!(
            "Settings: CRC mismatch (expected {}, found {})",
            computed_crc, stored_crc
        );
        return Err(Error::SettingsCorrupted);
    }

    let (_, payload) = covered.split_at(HEADER_SIZE);
    let settings: WatchSettings = postcard::from_bytes(payload).map_err(|_| {
        error!("Settings: deserialization failed");
        Error::SettingsCorrupted
    })?;
    Ok(Some(settings))
}

/// Encode `settings` into a fresh block.
///
/// # Errors
///
/// Returns [`Error::SettingsSerialize`] if the settings do not fit.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "payload length is bounded by MAX_PAYLOAD_SIZE"
)]
pub fn save(settings: &WatchSettings) -> Result<[u8; BLOCK_SIZE]> {
    let mut block = [0xFF_u8; BLOCK_SIZE];
    let (header, rest) = block.split_at_mut(HEADER_SIZE);
    let (payload_area, _) = rest.split_at_mut(MAX_PAYLOAD_SIZE);
    let payload_len = postcard::to_slice(settings, payload_area)
        .map_err(|_| Error::SettingsSerialize)?
        .len();

    let (magic, len) = header.split_at_mut(MAGIC_SIZE);
    magic.copy_from_slice(&MAGIC.to_le_bytes());
    let len_bytes = u16::try_from(payload_len)
        .map_err(|_| Error::SettingsSerialize)?
        .to_le_bytes();
    len.copy_from_slice(&len_bytes);

    let crc_offset = HEADER_SIZE + payload_len;
    let (covered, after) = block.split_at_mut(crc_offset);
    let crc = compute_crc(covered);
    let (crc_area, _) = after.split_at_mut(CRC_SIZE);
    crc_area.copy_from_slice(&crc.to_le_bytes());

    info!("Settings: saved {} bytes", payload_len);
    Ok(block)
}

/// A [`ZoneSettings`] backed by one persisted block.
///
/// The host reads the block from storage at boot, hands it to
/// [`SettingsBlock::from_bytes`], and writes [`SettingsBlock::as_bytes`] back whenever
/// [`SettingsBlock::take_modified`] says it changed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsBlock {
    block: [u8; BLOCK_SIZE],
    settings: WatchSettings,
    zone: ZoneIndex,
    modified: bool,
}

impl Default for SettingsBlock {
    fn default() -> Self {
        Self::from_bytes([0xFF; BLOCK_SIZE])
    }
}

impl SettingsBlock {
    /// Adopt a block read from storage, falling back to UTC if it is blank or bad.
    #[must_use]
    pub fn from_bytes(block: [u8; BLOCK_SIZE]) -> Self {
        let mut settings = match load(&block) {
            Ok(Some(settings)) => settings,
            Ok(None) => WatchSettings::default(),
            Err(err) => {
                warn!("Settings: {}; using defaults", err);
                WatchSettings::default()
            }
        };
        let zone = ZoneIndex::new(settings.zone_index).unwrap_or_else(|err| {
            warn!("Settings: {}; using UTC", err);
            ZoneIndex::UTC
        });
        settings.zone_index = zone.get();
        Self {
            block,
            settings,
            zone,
            modified: false,
        }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.block
    }

    #[must_use]
    pub const fn settings(&self) -> &WatchSettings {
        &self.settings
    }

    /// Whether the block changed since the last call.
    pub const fn take_modified(&mut self) -> bool {
        let modified = self.modified;
        self.modified = false;
        modified
    }
}

impl ZoneSettings for SettingsBlock {
    fn zone_index(&self) -> ZoneIndex {
        self.zone
    }

    fn set_zone_index(&mut self, index: ZoneIndex) {
        self.zone = index;
        self.settings.zone_index = index.get();
        match save(&self.settings) {
            Ok(block) => {
                self.block = block;
                self.modified = true;
            }
            Err(err) => error!("Settings: zone {} not saved: {}", index, err),
        }
    }
}

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::SettingsCorrupted)
}

fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
