//! Advertisement payload construction.
//!
//! AD structures are length-prefixed `len | type | data` records packed
//! into at most 31 bytes of legacy advertising payload. The builders
//! are pure so the layout can be verified on the host.

use heapless::Vec;

/// Legacy advertising payload capacity.
pub const ADV_DATA_MAX: usize = 31;

/// AD type: Flags.
const AD_TYPE_FLAGS: u8 = 0x01;
/// AD type: Complete list of 128-bit Service UUIDs.
const AD_TYPE_UUID128_ALL: u8 = 0x07;
/// AD type: Complete Local Name.
const AD_TYPE_NAME_COMPLETE: u8 = 0x09;

/// LE General Discoverable mode, BR/EDR not supported.
const AD_FLAGS_GENERAL_NO_BREDR: u8 = 0x06;

/// Telemetry service UUID in little-endian AD order
/// (6e400001-b5a3-f393-e0a9-e50e24dcca9e).
pub const SERVICE_UUID_LE: [u8; 16] = [
    0x9e, 0xca, 0xdc, 0x24, 0x0e, 0xe5, 0xa9, 0xe0, //
    0x93, 0xf3, 0xa3, 0xb5, 0x01, 0x00, 0x40, 0x6e,
];

/// Build the advertisement payload: flags + complete local name.
///
/// Names that would overflow the 31-byte budget are truncated rather
/// than rejected.
pub fn build_adv_data(name: &str) -> Vec<u8, ADV_DATA_MAX> {
    let mut out: Vec<u8, ADV_DATA_MAX> = Vec::new();
    let _ = out.push(2);
    let _ = out.push(AD_TYPE_FLAGS);
    let _ = out.push(AD_FLAGS_GENERAL_NO_BREDR);

    let room = ADV_DATA_MAX - out.len() - 2;
    let name = &name.as_bytes()[..name.len().min(room)];
    let _ = out.push(name.len() as u8 + 1);
    let _ = out.push(AD_TYPE_NAME_COMPLETE);
    let _ = out.extend_from_slice(name);
    out
}

/// Build the scan-response payload: the 128-bit service UUID list.
pub fn build_scan_data() -> Vec<u8, ADV_DATA_MAX> {
    let mut out: Vec<u8, ADV_DATA_MAX> = Vec::new();
    let _ = out.push(SERVICE_UUID_LE.len() as u8 + 1);
    let _ = out.push(AD_TYPE_UUID128_ALL);
    let _ = out.extend_from_slice(&SERVICE_UUID_LE);
    out
}
