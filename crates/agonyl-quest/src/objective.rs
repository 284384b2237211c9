use crate::{Error, Result, Section, OBJECTIVE_BLOCK_SIZE, UNUSED_OBJECTIVE_TYPE};
use agonyl_support::{decode_str, DecodeStringError};
use std::convert::TryFrom;
use std::io::{Read, Write};

const TYPE_OFFSET: usize = 0;
const NAME_LENGTH_OFFSET: usize = 92;

/// Could not parse an objective type because the given byte is not a known type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseObjectiveTypeError(u8);

impl std::fmt::Display for ParseObjectiveTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid objective type {:#04x} (must be 0-4 or 0xff)", self.0)
    }
}

impl std::error::Error for ParseObjectiveTypeError {}

/// What the player has to do to complete an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectiveType {
    /// Kill a number of monsters.
    Kill,
    /// Collect a quest item.
    QuestItem,
    /// Bring something to an NPC.
    BringNpc,
    /// Receive a named drop.
    Drop,
    /// Find a named location.
    Find,
    /// Empty slot.
    Unused,
}

impl ObjectiveType {
    /// Whether objectives of this type may carry a name after their block.
    #[inline]
    pub fn allows_name(self) -> bool {
        matches!(self, ObjectiveType::Drop | ObjectiveType::Find)
    }
}

impl TryFrom<u8> for ObjectiveType {
    type Error = ParseObjectiveTypeError;

    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        match n {
            0 => Ok(ObjectiveType::Kill),
            1 => Ok(ObjectiveType::QuestItem),
            2 => Ok(ObjectiveType::BringNpc),
            3 => Ok(ObjectiveType::Drop),
            4 => Ok(ObjectiveType::Find),
            UNUSED_OBJECTIVE_TYPE => Ok(ObjectiveType::Unused),
            n => Err(ParseObjectiveTypeError(n)),
        }
    }
}

impl From<ObjectiveType> for u8 {
    fn from(objective_type: ObjectiveType) -> u8 {
        match objective_type {
            ObjectiveType::Kill => 0,
            ObjectiveType::QuestItem => 1,
            ObjectiveType::BringNpc => 2,
            ObjectiveType::Drop => 3,
            ObjectiveType::Find => 4,
            ObjectiveType::Unused => UNUSED_OBJECTIVE_TYPE,
        }
    }
}

/// One of the seven objective slots of a quest.
///
/// An objective is a 96-byte block, followed in the file by a name if the block's name length
/// (byte 92) is non-zero. The block is kept verbatim; the name is kept separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Objective {
    block: [u8; OBJECTIVE_BLOCK_SIZE],
    name: Vec<u8>,
}

impl Default for Objective {
    /// A zeroed block: a KILL objective without a name.
    fn default() -> Self {
        Self {
            block: [0; OBJECTIVE_BLOCK_SIZE],
            name: vec![],
        }
    }
}

impl Objective {
    /// Create an objective of the given type, with every other byte zeroed.
    pub fn new(objective_type: ObjectiveType) -> Self {
        let mut objective = Self::default();
        objective.set_objective_type(objective_type);
        objective
    }

    /// Create an unused slot the way the game's own files contain them: every byte `0xFF`, except
    /// for the last four bytes, which hold a zero name length.
    pub fn unused() -> Self {
        let mut block = [UNUSED_OBJECTIVE_TYPE; OBJECTIVE_BLOCK_SIZE];
        block[NAME_LENGTH_OFFSET..].fill(0);
        Self {
            block,
            name: vec![],
        }
    }

    /// Build an objective from a raw block and name.
    ///
    /// Nothing is checked: the name length byte in `block` is expected to match `name`.
    pub fn from_parts(block: [u8; OBJECTIVE_BLOCK_SIZE], name: Vec<u8>) -> Self {
        Self { block, name }
    }

    /// Split the objective into its raw block and name.
    pub fn into_parts(self) -> ([u8; OBJECTIVE_BLOCK_SIZE], Vec<u8>) {
        (self.block, self.name)
    }

    /// Read the objective in `slot` from an input stream, validating its type and name length.
    pub fn read_from(mut input: impl Read, slot: usize) -> Result<Self> {
        let mut block = [0; OBJECTIVE_BLOCK_SIZE];
        input
            .read_exact(&mut block)
            .map_err(crate::truncated(Section::Objective(slot)))?;

        let value = block[TYPE_OFFSET];
        let objective_type = ObjectiveType::try_from(value)
            .map_err(|_| Error::InvalidObjectiveType { slot, value })?;

        let length = block[NAME_LENGTH_OFFSET];
        if length != 0 && !objective_type.allows_name() {
            return Err(Error::InvalidNameLength {
                slot,
                objective_type,
                length,
            });
        }

        let mut name = vec![0; usize::from(length)];
        if length > 0 {
            input
                .read_exact(&mut name)
                .map_err(crate::truncated(Section::ObjectiveName(slot)))?;
        }
        log::trace!(
            "Objective {}: {:?}, name length {}",
            slot,
            objective_type,
            length
        );

        Ok(Self { block, name })
    }

    /// Write the block and then the name, both verbatim.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_all(&self.block)?;
        if !self.name.is_empty() {
            output.write_all(&self.name)?;
        }
        Ok(())
    }

    /// Number of bytes this objective takes up in a file.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        OBJECTIVE_BLOCK_SIZE + self.name.len()
    }

    /// The raw 96-byte block.
    #[inline]
    pub fn block(&self) -> &[u8; OBJECTIVE_BLOCK_SIZE] {
        &self.block
    }

    /// Mutable access to the raw 96-byte block.
    #[inline]
    pub fn block_mut(&mut self) -> &mut [u8; OBJECTIVE_BLOCK_SIZE] {
        &mut self.block
    }

    /// The raw type byte.
    #[inline]
    pub fn type_byte(&self) -> u8 {
        self.block[TYPE_OFFSET]
    }

    /// The objective type, if the type byte is a known type.
    pub fn objective_type(&self) -> std::result::Result<ObjectiveType, ParseObjectiveTypeError> {
        ObjectiveType::try_from(self.type_byte())
    }

    /// Set the objective type.
    #[inline]
    pub fn set_objective_type(&mut self, objective_type: ObjectiveType) {
        self.block[TYPE_OFFSET] = objective_type.into();
    }

    /// Whether this is an empty slot.
    #[inline]
    pub fn is_unused(&self) -> bool {
        self.type_byte() == UNUSED_OBJECTIVE_TYPE
    }

    /// The raw name length byte.
    #[inline]
    pub fn name_length(&self) -> u8 {
        self.block[NAME_LENGTH_OFFSET]
    }

    /// The raw name bytes. Empty when the objective has no name.
    #[inline]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The name decoded as EUC-KR text.
    pub fn name_str(&self) -> std::result::Result<String, DecodeStringError> {
        decode_str(&self.name)
    }

    /// Set the name, and store its length in the block.
    ///
    /// Fails if the name is longer than 255 bytes. The objective type is not checked.
    pub fn set_name(&mut self, name: impl Into<Vec<u8>>) -> Result<()> {
        let name = name.into();
        let length = u8::try_from(name.len()).map_err(|_| Error::NameTooLong(name.len()))?;
        self.block[NAME_LENGTH_OFFSET] = length;
        self.name = name;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn type_tags() {
        for (byte, expected) in [
            (0, ObjectiveType::Kill),
            (1, ObjectiveType::QuestItem),
            (2, ObjectiveType::BringNpc),
            (3, ObjectiveType::Drop),
            (4, ObjectiveType::Find),
            (0xFF, ObjectiveType::Unused),
        ] {
            assert_eq!(ObjectiveType::try_from(byte), Ok(expected));
            assert_eq!(u8::from(expected), byte);
        }
        for byte in 5..=0xFE {
            assert_eq!(
                ObjectiveType::try_from(byte),
                Err(ParseObjectiveTypeError(byte))
            );
        }
    }

    #[test]
    fn only_drop_and_find_have_names() {
        assert!(ObjectiveType::Drop.allows_name());
        assert!(ObjectiveType::Find.allows_name());
        assert!(!ObjectiveType::Kill.allows_name());
        assert!(!ObjectiveType::QuestItem.allows_name());
        assert!(!ObjectiveType::BringNpc.allows_name());
        assert!(!ObjectiveType::Unused.allows_name());
    }

    #[test]
    fn unused_slot_layout() {
        let objective = Objective::unused();
        assert!(objective.is_unused());
        assert_eq!(objective.objective_type(), Ok(ObjectiveType::Unused));
        assert_eq!(objective.name_length(), 0);
        assert!(objective.block()[..92].iter().all(|&b| b == 0xFF));
        assert_eq!(&objective.block()[92..], &[0, 0, 0, 0]);
    }

    #[test]
    fn set_name_updates_length() -> anyhow::Result<()> {
        let mut objective = Objective::new(ObjectiveType::Find);
        objective.set_name(&b"Dungeon"[..])?;
        assert_eq!(objective.name_length(), 7);
        assert_eq!(objective.name(), b"Dungeon");
        assert_eq!(objective.name_str()?, "Dungeon");
        assert_eq!(objective.encoded_len(), 96 + 7);

        assert!(matches!(
            objective.set_name(vec![0; 256]),
            Err(Error::NameTooLong(256))
        ));
        assert_eq!(objective.name_length(), 7);
        Ok(())
    }

    #[test]
    fn read_named_objective() -> anyhow::Result<()> {
        let mut objective = Objective::new(ObjectiveType::Drop);
        objective.set_name(&b"ABCDEFGHIJ"[..])?;
        let mut bytes = vec![];
        objective.write_to(&mut bytes)?;
        assert_eq!(bytes.len(), 106);

        let read = Objective::read_from(Cursor::new(bytes), 0)?;
        assert_eq!(read.name_length(), 10);
        assert_eq!(read.name(), b"ABCDEFGHIJ");
        assert_eq!(read, objective);
        Ok(())
    }

    #[test]
    fn unused_slot_with_name_length_is_rejected() {
        let mut objective = Objective::unused();
        objective.block_mut()[92] = 3;
        let mut bytes = objective.block().to_vec();
        bytes.extend_from_slice(b"abc");

        match Objective::read_from(Cursor::new(bytes), 4) {
            Err(Error::InvalidNameLength {
                slot: 4,
                objective_type: ObjectiveType::Unused,
                length: 3,
            }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn raw_parts() -> anyhow::Result<()> {
        let mut block = [0u8; OBJECTIVE_BLOCK_SIZE];
        block[TYPE_OFFSET] = 3;
        block[NAME_LENGTH_OFFSET] = 4;
        block[10] = 0x77;
        let objective = Objective::from_parts(block, b"Cave".to_vec());
        assert_eq!(objective.objective_type(), Ok(ObjectiveType::Drop));
        assert_eq!(objective.name_str()?, "Cave");

        let mut bytes = vec![];
        objective.write_to(&mut bytes)?;
        let read = Objective::read_from(Cursor::new(bytes), 2)?;
        let (read_block, read_name) = read.into_parts();
        assert_eq!(read_block, block);
        assert_eq!(read_name, b"Cave");
        Ok(())
    }
}
