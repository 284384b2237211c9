//! Little-endian encoding of the values that make up a message.

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Result, Write};

/// A value with a fixed size on the wire.
///
/// Implemented for `u8`, `u16`, `u32`, arrays of fields, and every record and message in this
/// crate. Records are encoded as their fields back to back, with no alignment padding.
pub trait Field: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// The all-zero value.
    fn zeroed() -> Self;

    /// Read the value.
    fn read_field<R: Read>(input: &mut R) -> Result<Self>;

    /// Write the value.
    fn write_field<W: Write>(&self, output: &mut W) -> Result<()>;
}

impl Field for u8 {
    const SIZE: usize = 1;

    fn zeroed() -> Self {
        0
    }

    fn read_field<R: Read>(input: &mut R) -> Result<Self> {
        input.read_u8()
    }

    fn write_field<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u8(*self)
    }
}

impl Field for u16 {
    const SIZE: usize = 2;

    fn zeroed() -> Self {
        0
    }

    fn read_field<R: Read>(input: &mut R) -> Result<Self> {
        input.read_u16::<LE>()
    }

    fn write_field<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u16::<LE>(*self)
    }
}

impl Field for u32 {
    const SIZE: usize = 4;

    fn zeroed() -> Self {
        0
    }

    fn read_field<R: Read>(input: &mut R) -> Result<Self> {
        input.read_u32::<LE>()
    }

    fn write_field<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u32::<LE>(*self)
    }
}

impl<T: Field + Copy, const N: usize> Field for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn zeroed() -> Self {
        [T::zeroed(); N]
    }

    fn read_field<R: Read>(input: &mut R) -> Result<Self> {
        let mut items = Self::zeroed();
        for item in items.iter_mut() {
            *item = T::read_field(input)?;
        }
        Ok(items)
    }

    fn write_field<W: Write>(&self, output: &mut W) -> Result<()> {
        for item in self {
            item.write_field(output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian() -> anyhow::Result<()> {
        let mut out = vec![];
        0x1234u16.write_field(&mut out)?;
        0xAABB_CCDDu32.write_field(&mut out)?;
        assert_eq!(out, vec![0x34, 0x12, 0xDD, 0xCC, 0xBB, 0xAA]);

        let mut input = &out[..];
        assert_eq!(u16::read_field(&mut input)?, 0x1234);
        assert_eq!(u32::read_field(&mut input)?, 0xAABB_CCDD);
        Ok(())
    }

    #[test]
    fn arrays() -> anyhow::Result<()> {
        assert_eq!(<[u16; 3]>::SIZE, 6);
        assert_eq!(<[[u8; 4]; 2]>::SIZE, 8);

        let values: [u16; 3] = [1, 0x0200, 3];
        let mut out = vec![];
        values.write_field(&mut out)?;
        assert_eq!(out, vec![1, 0, 0, 2, 3, 0]);
        assert_eq!(<[u16; 3]>::read_field(&mut &out[..])?, values);
        Ok(())
    }

    #[test]
    fn short_input() {
        let err = <[u8; 4]>::read_field(&mut &[1u8, 2][..]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
