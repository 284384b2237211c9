//! Spawn lists.

use crate::{Error, Result};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// A single spawn entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpawnListItem {
    /// ID of the NPC or monster to spawn.
    pub id: u16,
    /// X coordinate.
    pub x: u8,
    /// Y coordinate.
    pub y: u8,
    /// Reserved, kept as-is.
    pub unknown: u16,
    /// Facing direction.
    pub orientation: u8,
    /// Spawn step.
    pub spawn_step: u8,
}

impl SpawnListItem {
    /// Size of an entry in the file.
    pub const SIZE: usize = 8;

    /// Read a spawn entry.
    pub fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        Ok(Self {
            id: input.read_u16::<LE>()?,
            x: input.read_u8()?,
            y: input.read_u8()?,
            unknown: input.read_u16::<LE>()?,
            orientation: input.read_u8()?,
            spawn_step: input.read_u8()?,
        })
    }

    /// Write a spawn entry.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u16::<LE>(self.id)?;
        output.write_u8(self.x)?;
        output.write_u8(self.y)?;
        output.write_u16::<LE>(self.unknown)?;
        output.write_u8(self.orientation)?;
        output.write_u8(self.spawn_step)?;
        Ok(())
    }
}

/// A spawn list: spawn entries back to back, with no count or header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnList(Vec<SpawnListItem>);

record_list!(SpawnList, SpawnListItem);

impl SpawnList {
    /// Read spawn entries until the end of the input.
    ///
    /// The input must hold a whole number of entries; an empty input is an empty list.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        let mut bytes = vec![];
        input.read_to_end(&mut bytes)?;
        if bytes.len() % SpawnListItem::SIZE != 0 {
            return Err(Error::PartialEntry(bytes.len()));
        }
        log::debug!("Reading {} spawns", bytes.len() / SpawnListItem::SIZE);

        let mut entries = Vec::with_capacity(bytes.len() / SpawnListItem::SIZE);
        for mut chunk in bytes.chunks_exact(SpawnListItem::SIZE) {
            entries.push(SpawnListItem::read_from(&mut chunk)?);
        }
        Ok(Self(entries))
    }

    /// Write every spawn entry.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        for entry in &self.0 {
            entry.write_to(output)?;
        }
        Ok(())
    }

    /// Iterate over the spawns of one NPC or monster.
    pub fn spawns_of(&self, id: u16) -> impl Iterator<Item = &SpawnListItem> + '_ {
        self.0.iter().filter(move |item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn read_entries() -> anyhow::Result<()> {
        let bytes: [u8; 16] = [
            0x01, 0x02, 10, 20, 0xAA, 0xBB, 3, 1, //
            0x01, 0x02, 11, 21, 0, 0, 4, 2,
        ];
        let list = SpawnList::read_from(Cursor::new(bytes))?;
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get(0),
            Some(&SpawnListItem {
                id: 0x0201,
                x: 10,
                y: 20,
                unknown: 0xBBAA,
                orientation: 3,
                spawn_step: 1,
            })
        );
        assert_eq!(list.spawns_of(0x0201).count(), 2);
        assert_eq!(list.spawns_of(7).count(), 0);

        let mut out = vec![];
        list.write_to(&mut out)?;
        assert_eq!(out, bytes);
        Ok(())
    }

    #[test]
    fn empty_list() -> anyhow::Result<()> {
        let list = SpawnList::read_from(io::empty())?;
        assert!(list.is_empty());

        let mut out = vec![];
        list.write_to(&mut out)?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn partial_entry() {
        let bytes = [0u8; 12];
        assert!(matches!(
            SpawnList::read_from(Cursor::new(bytes)),
            Err(Error::PartialEntry(12))
        ));
    }
}
