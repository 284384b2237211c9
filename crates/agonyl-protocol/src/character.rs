//! Character list and character deletion messages.

use crate::login::NAME_SIZE;
use crate::{set_text, Message, ProtocolHeader, Result};
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Number of character slots on an account.
pub const NUM_CHARACTER_SLOTS: usize = 5;
/// Number of equipment slots shown in the character list.
pub const NUM_WEAR_SLOTS: usize = 0xA;
/// Class value of an empty character slot.
pub const EMPTY_SLOT_CLASS: u8 = 0xFF;

message! {
    /// Character deletion request.
    pub struct C2SAskDeletePlayer {
        /// Header.
        pub head: ProtocolHeader,
        /// Name of the character to delete.
        pub character_name: [u8; NAME_SIZE],
    }
}

impl C2SAskDeletePlayer {
    /// Create a deletion request.
    pub fn new(pc_id: u32, protocol: u16, character_name: &str) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            ..Default::default()
        };
        set_text(&mut msg.character_name, character_name)?;
        msg.set_size();
        Ok(msg)
    }
}

record! {
    /// An equipped item as shown in the character list.
    pub struct AclCharacterWear {
        /// Item instance pointer.
        pub item_ptr: u32,
        /// Item code.
        pub item_code: u32,
        /// Item option bits.
        pub item_option: u32,
        /// Equipment slot.
        pub wear_index: u32,
    }
}

record! {
    /// A character slot in the character list.
    pub struct CharacterInfo {
        /// Character name.
        pub name: [u8; NAME_SIZE],
        /// Whether the slot holds a character.
        pub slot_used: u8,
        /// Class, see `agonyl_support::class_name`. `0xFF` for an empty slot.
        pub class: u8,
        /// Nation, see `agonyl_support::nation_name`.
        pub nation: u8,
        /// Level.
        pub level: u32,
        /// Equipment.
        pub wear: [AclCharacterWear; NUM_WEAR_SLOTS],
    }
}

impl CharacterInfo {
    /// An empty character slot.
    pub fn empty() -> Self {
        Self {
            class: EMPTY_SLOT_CLASS,
            ..Default::default()
        }
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.class == EMPTY_SLOT_CLASS
    }

    /// Character name.
    pub fn name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.name)
    }

    /// Set the character name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        set_text(&mut self.name, name)
    }
}

message! {
    /// The characters on an account.
    pub struct S2CCharacterList {
        /// Header.
        pub head: ProtocolHeader,
        /// Character slots.
        pub characters: [CharacterInfo; NUM_CHARACTER_SLOTS],
    }
}

impl S2CCharacterList {
    /// Create a character list. Slots past the end of `characters` are empty; characters past
    /// the fifth are ignored.
    pub fn new(pc_id: u32, protocol: u16, characters: &[CharacterInfo]) -> Self {
        let mut msg = Self::empty(pc_id, protocol);
        for (slot, character) in msg.characters.iter_mut().zip(characters) {
            *slot = *character;
        }
        msg
    }

    /// Create a character list with every slot empty.
    pub fn empty(pc_id: u32, protocol: u16) -> Self {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            characters: [CharacterInfo::empty(); NUM_CHARACTER_SLOTS],
        };
        msg.set_size();
        msg
    }

    /// Iterate over the slots that hold a character.
    pub fn used_slots(&self) -> impl Iterator<Item = &CharacterInfo> + '_ {
        self.characters.iter().filter(|info| !info.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn hero(level: u32) -> CharacterInfo {
        let mut info = CharacterInfo {
            slot_used: 1,
            class: 1,
            nation: 1,
            level,
            ..Default::default()
        };
        info.set_name("Hero").unwrap();
        info.wear[0] = AclCharacterWear {
            item_ptr: 0x1000,
            item_code: 2001,
            item_option: 0,
            wear_index: 3,
        };
        info
    }

    #[test]
    fn sizes() {
        assert_eq!(AclCharacterWear::SIZE, 16);
        assert_eq!(CharacterInfo::SIZE, 188);
        assert_eq!(S2CCharacterList::SIZE, 952);
        assert_eq!(C2SAskDeletePlayer::SIZE, 33);
    }

    #[test]
    fn empty_list() {
        let list = S2CCharacterList::empty(9, 0x1101);
        assert_eq!(list.head.head.size, 952);
        assert!(list.characters.iter().all(|info| info.class == 0xFF));
        assert_eq!(list.used_slots().count(), 0);
    }

    #[test]
    fn list_fills_remaining_slots() -> anyhow::Result<()> {
        let list = S2CCharacterList::new(9, 0x1101, &[hero(10), hero(20)]);
        assert_eq!(list.used_slots().count(), 2);
        assert!(list.characters[2].is_empty());

        let decoded = S2CCharacterList::from_bytes(&list.to_bytes()?)?;
        assert_eq!(decoded, list);
        assert_eq!(decoded.characters[1].level, 20);
        assert_eq!(decoded.characters[1].name()?, "Hero");
        assert_eq!(decoded.characters[0].wear[0].item_code, 2001);
        Ok(())
    }

    #[test]
    fn extra_characters_are_ignored() {
        let characters = vec![hero(1); 7];
        let list = S2CCharacterList::new(1, 0x1101, &characters);
        assert_eq!(list.used_slots().count(), NUM_CHARACTER_SLOTS);
    }

    #[test]
    fn delete_request() -> anyhow::Result<()> {
        let msg = C2SAskDeletePlayer::new(4, 0x1104, "Hero")?;
        let bytes = msg.to_bytes()?;
        assert_eq!(&bytes[12..17], b"Hero\0");
        Ok(())
    }
}
