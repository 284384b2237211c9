//! Client monster bins.

use crate::{read_counted, write_counted, Result};
use agonyl_support::{decode_fixed_str, encode_fixed_str, read_array, DecodeStringError};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// Size of a monster name field.
pub const MONSTER_NAME_SIZE: usize = 0x1F;
/// Size of the reserved data after a monster name.
pub const MONSTER_RESERVED_SIZE: usize = 0x3D;

/// A single monster entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonsterBinItem {
    /// Monster ID.
    pub id: u32,
    /// NUL-padded monster name.
    pub name: [u8; MONSTER_NAME_SIZE],
    /// Reserved data, kept as-is.
    pub unknown: [u8; MONSTER_RESERVED_SIZE],
}

impl Default for MonsterBinItem {
    fn default() -> Self {
        Self {
            id: 0,
            name: [0; MONSTER_NAME_SIZE],
            unknown: [0; MONSTER_RESERVED_SIZE],
        }
    }
}

impl MonsterBinItem {
    /// Size of an entry in the file.
    pub const SIZE: usize = 4 + MONSTER_NAME_SIZE + MONSTER_RESERVED_SIZE;

    /// Read a monster entry.
    pub fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        let id = input.read_u32::<LE>()?;
        let name = read_array(input)?;
        let unknown = read_array(input)?;
        Ok(Self { id, name, unknown })
    }

    /// Write a monster entry.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u32::<LE>(self.id)?;
        output.write_all(&self.name)?;
        output.write_all(&self.unknown)?;
        Ok(())
    }

    /// The monster name.
    pub fn name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.name)
    }

    /// Set the monster name. It must fit in 31 bytes once encoded.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        encode_fixed_str(name, &mut self.name)?;
        Ok(())
    }
}

/// A monster bin file: a list of monster entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterBin(Vec<MonsterBinItem>);

record_list!(MonsterBin, MonsterBinItem);

impl MonsterBin {
    /// Read a monster bin: the entry count, then every entry.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        read_counted(&mut input, MonsterBinItem::read_from).map(Self)
    }

    /// Write the monster bin.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        write_counted(output, &self.0, MonsterBinItem::write_to)
    }

    /// Find a monster by its ID.
    pub fn find(&self, id: u32) -> Option<&MonsterBinItem> {
        self.0.iter().find(|item| item.id == id)
    }
}
