//! Server NPC files.
//!
//! An NPC file holds exactly one NPC record with the NPC's stats, attacks and display name.

use crate::Result;
use agonyl_support::{decode_fixed_str, encode_fixed_str, read_array, DecodeStringError};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// Size of the NPC name field.
pub const NPC_NAME_SIZE: usize = 0x14;
/// Number of attack slots.
pub const NUM_ATTACKS: usize = 3;

/// One attack an NPC can use.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NpcAttack {
    pub range: u16,
    pub area: u16,
    pub damage: u16,
    pub additional_damage: u16,
}

impl NpcAttack {
    fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        Ok(Self {
            range: input.read_u16::<LE>()?,
            area: input.read_u16::<LE>()?,
            damage: input.read_u16::<LE>()?,
            additional_damage: input.read_u16::<LE>()?,
        })
    }

    fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_u16::<LE>(self.range)?;
        output.write_u16::<LE>(self.area)?;
        output.write_u16::<LE>(self.damage)?;
        output.write_u16::<LE>(self.additional_damage)?;
        Ok(())
    }
}

/// An NPC record.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NpcFile {
    /// NUL-padded display name.
    pub name: [u8; NPC_NAME_SIZE],
    pub id: u16,
    pub respawn_rate: u16,
    pub attack_type_info: u8,
    pub target_selection_info: u8,
    pub defense: u8,
    pub additional_defense: u8,
    pub attacks: [NpcAttack; NUM_ATTACKS],
    pub attack_speed_low: u16,
    pub attack_speed_high: u16,
    pub movement_speed: u32,
    pub level: u8,
    pub player_exp: u16,
    pub appearance: u8,
    pub hp: u32,
    pub blue_attack_defense: u16,
    pub red_attack_defense: u16,
    pub grey_attack_defense: u16,
    pub mercenary_exp: u16,
    /// Reserved, kept as-is.
    pub unknown: u16,
}

impl NpcFile {
    /// Size of an NPC file.
    pub const SIZE: usize = 78;

    /// Read an NPC record.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        let name = read_array(&mut input)?;
        let id = input.read_u16::<LE>()?;
        let respawn_rate = input.read_u16::<LE>()?;
        let attack_type_info = input.read_u8()?;
        let target_selection_info = input.read_u8()?;
        let defense = input.read_u8()?;
        let additional_defense = input.read_u8()?;
        let attacks = [
            NpcAttack::read_from(&mut input)?,
            NpcAttack::read_from(&mut input)?,
            NpcAttack::read_from(&mut input)?,
        ];
        let attack_speed_low = input.read_u16::<LE>()?;
        let attack_speed_high = input.read_u16::<LE>()?;
        let movement_speed = input.read_u32::<LE>()?;
        let level = input.read_u8()?;
        let player_exp = input.read_u16::<LE>()?;
        let appearance = input.read_u8()?;
        let hp = input.read_u32::<LE>()?;
        let blue_attack_defense = input.read_u16::<LE>()?;
        let red_attack_defense = input.read_u16::<LE>()?;
        let grey_attack_defense = input.read_u16::<LE>()?;
        let mercenary_exp = input.read_u16::<LE>()?;
        let unknown = input.read_u16::<LE>()?;
        log::debug!("NPC {} level {}", id, level);

        Ok(Self {
            name,
            id,
            respawn_rate,
            attack_type_info,
            target_selection_info,
            defense,
            additional_defense,
            attacks,
            attack_speed_low,
            attack_speed_high,
            movement_speed,
            level,
            player_exp,
            appearance,
            hp,
            blue_attack_defense,
            red_attack_defense,
            grey_attack_defense,
            mercenary_exp,
            unknown,
        })
    }

    /// Write the NPC record.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_all(&self.name)?;
        output.write_u16::<LE>(self.id)?;
        output.write_u16::<LE>(self.respawn_rate)?;
        output.write_u8(self.attack_type_info)?;
        output.write_u8(self.target_selection_info)?;
        output.write_u8(self.defense)?;
        output.write_u8(self.additional_defense)?;
        for attack in &self.attacks {
            attack.write_to(output)?;
        }
        output.write_u16::<LE>(self.attack_speed_low)?;
        output.write_u16::<LE>(self.attack_speed_high)?;
        output.write_u32::<LE>(self.movement_speed)?;
        output.write_u8(self.level)?;
        output.write_u16::<LE>(self.player_exp)?;
        output.write_u8(self.appearance)?;
        output.write_u32::<LE>(self.hp)?;
        output.write_u16::<LE>(self.blue_attack_defense)?;
        output.write_u16::<LE>(self.red_attack_defense)?;
        output.write_u16::<LE>(self.grey_attack_defense)?;
        output.write_u16::<LE>(self.mercenary_exp)?;
        output.write_u16::<LE>(self.unknown)?;
        Ok(())
    }

    /// The NPC's display name.
    pub fn name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.name)
    }

    /// Set the display name. It must fit in 20 bytes once encoded.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        encode_fixed_str(name, &mut self.name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::{self, Cursor};

    fn guard() -> NpcFile {
        let mut npc = NpcFile {
            id: 42,
            respawn_rate: 30,
            attack_type_info: 1,
            target_selection_info: 2,
            defense: 10,
            additional_defense: 5,
            attacks: [
                NpcAttack {
                    range: 1,
                    area: 2,
                    damage: 30,
                    additional_damage: 4,
                },
                NpcAttack::default(),
                NpcAttack {
                    range: 0xFFFF,
                    ..Default::default()
                },
            ],
            attack_speed_low: 100,
            attack_speed_high: 200,
            movement_speed: 0x0102_0304,
            level: 5,
            player_exp: 250,
            appearance: 9,
            hp: 1000,
            blue_attack_defense: 11,
            red_attack_defense: 12,
            grey_attack_defense: 13,
            mercenary_exp: 14,
            unknown: 0xBEEF,
            ..Default::default()
        };
        npc.set_name("Guard").unwrap();
        npc
    }

    #[test]
    fn roundtrip() -> anyhow::Result<()> {
        let npc = guard();
        let mut bytes = vec![];
        npc.write_to(&mut bytes)?;
        assert_eq!(bytes.len(), NpcFile::SIZE);
        assert_eq!(&bytes[..6], b"Guard\0");
        assert_eq!(&bytes[20..22], &[42, 0]);

        let read = NpcFile::read_from(Cursor::new(bytes))?;
        assert_eq!(read, npc);
        assert_eq!(read.name()?, "Guard");
        Ok(())
    }

    #[test]
    fn truncated() -> anyhow::Result<()> {
        let mut bytes = vec![];
        guard().write_to(&mut bytes)?;
        bytes.pop();
        assert!(matches!(
            NpcFile::read_from(Cursor::new(bytes)),
            Err(Error::IoError(err)) if err.kind() == io::ErrorKind::UnexpectedEof
        ));
        assert!(NpcFile::read_from(io::empty()).is_err());
        Ok(())
    }

    #[test]
    fn long_names_are_rejected() {
        let mut npc = NpcFile::default();
        assert!(matches!(
            npc.set_name("A name that is far too long"),
            Err(Error::EncodeStringError(_))
        ));
    }
}
