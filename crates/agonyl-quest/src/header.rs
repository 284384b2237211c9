use crate::{Result, Section, HEADER_SIZE, UNUSED_REWARD_ITEM_CODE};
use agonyl_support::{set_slot_u16, set_slot_u32, set_slot_u8, slot_u16, slot_u32, slot_u8};
use std::fmt;
use std::io::{Read, Write};

const QUEST_ID: usize = 0;
const GIVEN_NPC_ID: usize = 4;
const TARGET_NPC_BLOCK: usize = 8;
const TARGET_NPC_BLOCK_SIZE: usize = 24;
const MIN_LEVEL: usize = 32;
const MAX_LEVEL: usize = 36;
const QUEST_FLAGS: usize = 40;
const REWARD_ITEMS: usize = 44;
const REWARD_COUNTS: usize = 68;
const EXPERIENCE: usize = 80;
const WOONZ: usize = 84;
const LORE: usize = 88;

/// Width of a reward item or reward count slot.
const SLOT_SIZE: usize = 4;

/// Number of reward item and reward count slots.
pub const NUM_REWARDS: usize = 3;

/// The fixed 96-byte quest file header.
///
/// The header is kept as raw bytes. Accessors read and write the logical fields at their offsets
/// and never touch the padding around them, so a header that was read from a file is written back
/// byte-for-byte.
///
/// | Offset | Field |
/// |---|---|
/// | 0 | quest ID (u16) + 2 padding |
/// | 4 | given NPC ID (u16) + 2 padding |
/// | 8 | target NPC block (24 bytes) |
/// | 32 | minimum level (u8) + 3 padding |
/// | 36 | maximum level (u8) + 3 padding |
/// | 40 | quest flags (u32) |
/// | 44 | 3 reward items (u16 + 2 padding each) |
/// | 56 | 4 padding (unused fourth reward slot) |
/// | 60 | 8 padding |
/// | 68 | 3 reward counts (u8 + 3 padding each) |
/// | 80 | experience (u32) |
/// | 84 | woonz (u32) |
/// | 88 | lore (u32) |
/// | 92 | 4 padding |
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestHeader([u8; HEADER_SIZE]);

impl Default for QuestHeader {
    fn default() -> Self {
        Self([0; HEADER_SIZE])
    }
}

impl From<[u8; HEADER_SIZE]> for QuestHeader {
    fn from(bytes: [u8; HEADER_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<QuestHeader> for [u8; HEADER_SIZE] {
    fn from(header: QuestHeader) -> Self {
        header.0
    }
}

impl QuestHeader {
    /// Read a header from an input stream.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        let mut bytes = [0; HEADER_SIZE];
        input
            .read_exact(&mut bytes)
            .map_err(crate::truncated(Section::Header))?;
        let header = Self(bytes);
        log::debug!(
            "Quest {} given by NPC {}, levels {}-{}",
            header.quest_id(),
            header.given_npc_id(),
            header.min_level(),
            header.max_level()
        );
        Ok(header)
    }

    /// Write the header to an output stream, including all padding bytes.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_all(&self.0)?;
        Ok(())
    }

    /// The raw header bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.0
    }

    /// Mutable access to the raw header bytes, padding included.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; HEADER_SIZE] {
        &mut self.0
    }

    /// The quest ID.
    #[inline]
    pub fn quest_id(&self) -> u16 {
        slot_u16(&self.0, QUEST_ID)
    }

    /// Set the quest ID. The two padding bytes after it are left alone.
    #[inline]
    pub fn set_quest_id(&mut self, id: u16) {
        set_slot_u16(&mut self.0, QUEST_ID, id);
    }

    /// The ID of the NPC that hands out this quest.
    #[inline]
    pub fn given_npc_id(&self) -> u16 {
        slot_u16(&self.0, GIVEN_NPC_ID)
    }

    /// Set the ID of the NPC that hands out this quest. The two padding bytes after it are left
    /// alone.
    #[inline]
    pub fn set_given_npc_id(&mut self, id: u16) {
        set_slot_u16(&mut self.0, GIVEN_NPC_ID, id);
    }

    /// The 24-byte target NPC block. Only the first two bytes have a known meaning.
    #[inline]
    pub fn target_npc_block(&self) -> &[u8] {
        &self.0[TARGET_NPC_BLOCK..TARGET_NPC_BLOCK + TARGET_NPC_BLOCK_SIZE]
    }

    /// Mutable access to the 24-byte target NPC block.
    #[inline]
    pub fn target_npc_block_mut(&mut self) -> &mut [u8] {
        &mut self.0[TARGET_NPC_BLOCK..TARGET_NPC_BLOCK + TARGET_NPC_BLOCK_SIZE]
    }

    /// The NPC ID at the start of the target NPC block.
    #[inline]
    pub fn target_npc_id(&self) -> u16 {
        slot_u16(&self.0, TARGET_NPC_BLOCK)
    }

    /// Set the NPC ID at the start of the target NPC block.
    #[inline]
    pub fn set_target_npc_id(&mut self, id: u16) {
        set_slot_u16(&mut self.0, TARGET_NPC_BLOCK, id);
    }

    /// The minimum character level for this quest.
    #[inline]
    pub fn min_level(&self) -> u8 {
        slot_u8(&self.0, MIN_LEVEL)
    }

    /// Set the minimum character level.
    #[inline]
    pub fn set_min_level(&mut self, level: u8) {
        set_slot_u8(&mut self.0, MIN_LEVEL, level);
    }

    /// The maximum character level for this quest.
    #[inline]
    pub fn max_level(&self) -> u8 {
        slot_u8(&self.0, MAX_LEVEL)
    }

    /// Set the maximum character level.
    #[inline]
    pub fn set_max_level(&mut self, level: u8) {
        set_slot_u8(&mut self.0, MAX_LEVEL, level);
    }

    /// Raw quest flag bits.
    #[inline]
    pub fn quest_flags(&self) -> u32 {
        slot_u32(&self.0, QUEST_FLAGS)
    }

    /// Set the raw quest flag bits.
    #[inline]
    pub fn set_quest_flags(&mut self, flags: u32) {
        set_slot_u32(&mut self.0, QUEST_FLAGS, flags);
    }

    /// The raw item code in reward slot `index`, including the `0xFFFF` sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_REWARDS`.
    #[inline]
    pub fn reward_item_code(&self, index: usize) -> u16 {
        assert!(index < NUM_REWARDS, "reward slot {} out of range", index);
        slot_u16(&self.0, REWARD_ITEMS + index * SLOT_SIZE)
    }

    /// The item rewarded in slot `index`, or `None` if the slot is unused.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_REWARDS`.
    pub fn reward_item(&self, index: usize) -> Option<u16> {
        match self.reward_item_code(index) {
            UNUSED_REWARD_ITEM_CODE => None,
            code => Some(code),
        }
    }

    /// Set the item rewarded in slot `index`. `None` stores the unused sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_REWARDS`.
    pub fn set_reward_item(&mut self, index: usize, item: Option<u16>) {
        assert!(index < NUM_REWARDS, "reward slot {} out of range", index);
        set_slot_u16(
            &mut self.0,
            REWARD_ITEMS + index * SLOT_SIZE,
            item.unwrap_or(UNUSED_REWARD_ITEM_CODE),
        );
    }

    /// The amount of the item in reward slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_REWARDS`.
    #[inline]
    pub fn reward_count(&self, index: usize) -> u8 {
        assert!(index < NUM_REWARDS, "reward slot {} out of range", index);
        slot_u8(&self.0, REWARD_COUNTS + index * SLOT_SIZE)
    }

    /// Set the amount of the item in reward slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_REWARDS`.
    #[inline]
    pub fn set_reward_count(&mut self, index: usize, count: u8) {
        assert!(index < NUM_REWARDS, "reward slot {} out of range", index);
        set_slot_u8(&mut self.0, REWARD_COUNTS + index * SLOT_SIZE, count);
    }

    /// Experience rewarded on completion.
    #[inline]
    pub fn experience(&self) -> u32 {
        slot_u32(&self.0, EXPERIENCE)
    }

    /// Set the experience reward.
    #[inline]
    pub fn set_experience(&mut self, experience: u32) {
        set_slot_u32(&mut self.0, EXPERIENCE, experience);
    }

    /// Woonz (money) rewarded on completion.
    #[inline]
    pub fn woonz(&self) -> u32 {
        slot_u32(&self.0, WOONZ)
    }

    /// Set the woonz reward.
    #[inline]
    pub fn set_woonz(&mut self, woonz: u32) {
        set_slot_u32(&mut self.0, WOONZ, woonz);
    }

    /// Lore points rewarded on completion.
    #[inline]
    pub fn lore(&self) -> u32 {
        slot_u32(&self.0, LORE)
    }

    /// Set the lore reward.
    #[inline]
    pub fn set_lore(&mut self, lore: u32) {
        set_slot_u32(&mut self.0, LORE, lore);
    }
}

impl fmt::Debug for QuestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestHeader")
            .field("quest_id", &self.quest_id())
            .field("given_npc_id", &self.given_npc_id())
            .field("target_npc_id", &self.target_npc_id())
            .field("min_level", &self.min_level())
            .field("max_level", &self.max_level())
            .field("quest_flags", &self.quest_flags())
            .field(
                "reward_items",
                &[self.reward_item(0), self.reward_item(1), self.reward_item(2)],
            )
            .field(
                "reward_counts",
                &[self.reward_count(0), self.reward_count(1), self.reward_count(2)],
            )
            .field("experience", &self.experience())
            .field("woonz", &self.woonz())
            .field("lore", &self.lore())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_id_ignores_padding() {
        let mut header = QuestHeader::default();
        header.as_bytes_mut()[..4].copy_from_slice(&[0x34, 0x12, 0xCD, 0xAB]);
        assert_eq!(header.quest_id(), 0x1234);

        header.set_quest_id(7);
        assert_eq!(&header.as_bytes()[..4], &[7, 0, 0xCD, 0xAB]);
    }

    #[test]
    fn given_npc_id_ignores_padding() {
        let mut header = QuestHeader::default();
        header.as_bytes_mut()[4..8].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(header.given_npc_id(), 0x5678);

        header.set_given_npc_id(100);
        assert_eq!(&header.as_bytes()[4..8], &[100, 0, 0x34, 0x12]);
    }

    #[test]
    fn reward_slots() {
        let mut header = QuestHeader::default();
        header.as_bytes_mut()[44..56].fill(0xEE);
        header.set_reward_item(0, Some(100));
        header.set_reward_item(1, None);
        header.set_reward_item(2, Some(300));
        assert_eq!(header.reward_item(0), Some(100));
        assert_eq!(header.reward_item(1), None);
        assert_eq!(header.reward_item_code(1), UNUSED_REWARD_ITEM_CODE);
        assert_eq!(header.reward_item(2), Some(300));
        // padding half of each slot is untouched
        assert_eq!(&header.as_bytes()[46..48], &[0xEE, 0xEE]);
        assert_eq!(&header.as_bytes()[50..52], &[0xEE, 0xEE]);
        assert_eq!(&header.as_bytes()[54..56], &[0xEE, 0xEE]);

        header.set_reward_count(0, 1);
        header.set_reward_count(1, 255);
        assert_eq!(header.reward_count(0), 1);
        assert_eq!(header.reward_count(1), 255);
        assert_eq!(header.as_bytes()[68], 1);
        assert_eq!(header.as_bytes()[72], 255);
    }

    #[test]
    #[should_panic = "reward slot 3 out of range"]
    fn fourth_reward_slot_is_not_a_reward() {
        QuestHeader::default().reward_item(3);
    }

    #[test]
    fn numeric_fields() {
        let mut header = QuestHeader::default();
        header.set_min_level(10);
        header.set_max_level(50);
        header.set_quest_flags(0xDEAD_BEEF);
        header.set_experience(1000);
        header.set_woonz(500);
        header.set_lore(u32::MAX);
        header.set_target_npc_id(0x0102);

        let bytes = header.as_bytes();
        assert_eq!(bytes[32], 10);
        assert_eq!(bytes[36], 50);
        assert_eq!(&bytes[40..44], &[0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(&bytes[80..84], &1000u32.to_le_bytes());
        assert_eq!(&bytes[84..88], &500u32.to_le_bytes());
        assert_eq!(&bytes[88..92], &[0xFF; 4]);
        assert_eq!(&bytes[8..10], &[0x02, 0x01]);
        assert_eq!(header.target_npc_block().len(), 24);
    }

    #[test]
    fn target_npc_block_is_kept_whole() {
        let mut header = QuestHeader::default();
        let block = header.target_npc_block_mut();
        block[..2].copy_from_slice(&[0x39, 0x05]);
        block[20..].copy_from_slice(&[1, 2, 3, 4]);

        assert_eq!(header.target_npc_id(), 1337);
        assert_eq!(&header.target_npc_block()[20..], &[1, 2, 3, 4]);
        assert_eq!(&header.as_bytes()[28..32], &[1, 2, 3, 4]);

        header.set_target_npc_id(42);
        assert_eq!(&header.target_npc_block()[20..], &[1, 2, 3, 4]);
    }
}
