//! Client map bins.

use crate::{read_counted, write_counted, Result};
use agonyl_support::{decode_fixed_str, encode_fixed_str, read_array, DecodeStringError};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// Size of a map name field.
pub const MAP_NAME_SIZE: usize = 0x20;

/// A single map entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MapBinItem {
    /// Map ID.
    pub id: u32,
    /// Five reserved values, kept as-is.
    pub unknown: [u32; 5],
    /// NUL-padded map name.
    pub name: [u8; MAP_NAME_SIZE],
}

impl MapBinItem {
    /// Size of an entry in the file.
    pub const SIZE: usize = 4 + 5 * 4 + MAP_NAME_SIZE;

    /// Read a map entry.
    pub fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        let id = input.read_u32::<LE>()?;
        let mut unknown = [0; 5];
        input.read_u32_into::<LE>(&mut unknown)?;
        let name = read_array(input)?;
        Ok(Self { id, unknown, name })
    }

    /// Write a map entry.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u32::<LE>(self.id)?;
        for value in self.unknown {
            output.write_u32::<LE>(value)?;
        }
        output.write_all(&self.name)?;
        Ok(())
    }

    /// The map name.
    pub fn name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.name)
    }

    /// Set the map name. It must fit in 32 bytes once encoded.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        encode_fixed_str(name, &mut self.name)?;
        Ok(())
    }
}

/// A map bin file: a list of map entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapBin(Vec<MapBinItem>);

record_list!(MapBin, MapBinItem);

impl MapBin {
    /// Read a map bin: the entry count, then every entry.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        read_counted(&mut input, MapBinItem::read_from).map(Self)
    }

    /// Write the map bin.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        write_counted(output, &self.0, MapBinItem::write_to)
    }

    /// Find a map by its ID.
    pub fn find(&self, id: u32) -> Option<&MapBinItem> {
        self.0.iter().find(|item| item.id == id)
    }
}
