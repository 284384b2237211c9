//! Accessors for logical values stored in wider byte slots.
//!
//! A3 data files often keep a 16-bit or 8-bit value at the start of a 4-byte slot, with the rest
//! of the slot holding bytes that mean nothing to us but must be written back unchanged. These
//! helpers only ever touch the bytes that belong to the logical value.

use byteorder::{ByteOrder, LE};

/// Read the `u8` at `offset`.
#[inline]
pub fn slot_u8(buf: &[u8], offset: usize) -> u8 {
    buf[offset]
}

/// Overwrite the `u8` at `offset`, leaving every other byte untouched.
#[inline]
pub fn set_slot_u8(buf: &mut [u8], offset: usize, value: u8) {
    buf[offset] = value;
}

/// Read a little-endian `u16` from the two bytes at `offset`.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::slot_u16;
///
/// let slot = [0x34, 0x12, 0xCD, 0xAB];
/// assert_eq!(slot_u16(&slot, 0), 0x1234);
/// ```
#[inline]
pub fn slot_u16(buf: &[u8], offset: usize) -> u16 {
    LE::read_u16(&buf[offset..offset + 2])
}

/// Overwrite the two bytes at `offset` with a little-endian `u16`.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::set_slot_u16;
///
/// let mut slot = [0x00, 0x00, 0xCD, 0xAB];
/// set_slot_u16(&mut slot, 0, 0x1234);
/// assert_eq!(slot, [0x34, 0x12, 0xCD, 0xAB]);
/// ```
#[inline]
pub fn set_slot_u16(buf: &mut [u8], offset: usize, value: u16) {
    LE::write_u16(&mut buf[offset..offset + 2], value);
}

/// Read a little-endian `u32` from the four bytes at `offset`.
#[inline]
pub fn slot_u32(buf: &[u8], offset: usize) -> u32 {
    LE::read_u32(&buf[offset..offset + 4])
}

/// Overwrite the four bytes at `offset` with a little-endian `u32`.
#[inline]
pub fn set_slot_u32(buf: &mut [u8], offset: usize, value: u32) {
    LE::write_u32(&mut buf[offset..offset + 4], value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_write_keeps_padding() {
        let mut slot = [0xFF; 4];
        set_slot_u16(&mut slot, 0, 100);
        assert_eq!(slot, [100, 0, 0xFF, 0xFF]);
        assert_eq!(slot_u16(&slot, 0), 100);

        set_slot_u8(&mut slot, 2, 7);
        assert_eq!(slot, [100, 0, 7, 0xFF]);
    }

    #[test]
    fn u32_is_little_endian() {
        let mut buf = [0; 8];
        set_slot_u32(&mut buf, 4, 0x1122_3344);
        assert_eq!(buf, [0, 0, 0, 0, 0x44, 0x33, 0x22, 0x11]);
        assert_eq!(slot_u32(&buf, 4), 0x1122_3344);
    }
}
