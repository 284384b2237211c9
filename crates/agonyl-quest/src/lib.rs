//! A reader and writer for A3 / Agonyl quest files.
//!
//! A quest file is a 96-byte header, exactly seven objective blocks of 96 bytes (each followed by
//! a name for DROP and FIND objectives), and three 32-bit continuation links. All integers are
//! little-endian. The format has no length field or terminator, so a file must end right after
//! the continuation section.
//!
//! Reading validates the objective types and name lengths. Writing does not validate anything:
//! it writes back exactly what is stored, padding included.
//!
//! ```rust
//! use agonyl_quest::{ObjectiveType, QuestFile};
//!
//! let mut quest = QuestFile::default();
//! quest.header.set_quest_id(1);
//! quest.header.set_given_npc_id(100);
//! quest.objectives[0].set_objective_type(ObjectiveType::Drop);
//! quest.objectives[0].set_name(&b"ABCDEFGHIJ"[..]).unwrap();
//!
//! let bytes = quest.to_bytes().unwrap();
//! assert_eq!(bytes.len(), 790);
//!
//! let read = QuestFile::from_bytes(&bytes).unwrap();
//! assert_eq!(read.header.quest_id(), 1);
//! assert_eq!(read.objectives[0].name(), b"ABCDEFGHIJ");
//! ```

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused)]

mod continuation;
mod header;
mod objective;

use std::fmt;
use std::io::{self, Read, Write};

pub use continuation::{Continuation, NUM_CONTINUATIONS};
pub use header::{QuestHeader, NUM_REWARDS};
pub use objective::{Objective, ObjectiveType, ParseObjectiveTypeError};

/// Size of the quest header.
pub const HEADER_SIZE: usize = 96;
/// Size of an objective block, not counting its name.
pub const OBJECTIVE_BLOCK_SIZE: usize = 96;
/// Number of objective slots in every quest file.
pub const NUM_OBJECTIVES: usize = 7;
/// Size of the continuation section.
pub const CONTINUATION_SIZE: usize = 12;
/// Size of a quest file without any objective names.
pub const MIN_FILE_SIZE: usize =
    HEADER_SIZE + NUM_OBJECTIVES * OBJECTIVE_BLOCK_SIZE + CONTINUATION_SIZE;
/// Size of a quest file where every objective has a 255-byte name.
pub const MAX_FILE_SIZE: usize = MIN_FILE_SIZE + NUM_OBJECTIVES * u8::MAX as usize;

/// Item code of an empty reward slot.
pub const UNUSED_REWARD_ITEM_CODE: u16 = 0xFFFF;
/// Value of an empty continuation slot.
pub const UNUSED_CONTINUATION: u32 = 0xFFFF_FFFF;
/// Type byte of an empty objective slot.
pub const UNUSED_OBJECTIVE_TYPE: u8 = 0xFF;

/// A section of a quest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The 96-byte header.
    Header,
    /// The block of the objective in this slot.
    Objective(usize),
    /// The name of the objective in this slot.
    ObjectiveName(usize),
    /// The three continuation values.
    Continuation,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Objective(slot) => write!(f, "objective {}", slot),
            Section::ObjectiveName(slot) => write!(f, "name of objective {}", slot),
            Section::Continuation => write!(f, "continuation"),
        }
    }
}

/// Error type for quest file methods.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input ended before a section was complete.
    #[error("quest file is truncated: {0} is incomplete")]
    Truncated(Section),
    /// An objective's type byte is not a known objective type.
    #[error("objective {slot} has invalid type {value:#04x}")]
    InvalidObjectiveType {
        /// Objective slot, 0-6.
        slot: usize,
        /// The type byte.
        value: u8,
    },
    /// An objective that cannot have a name has a non-zero name length.
    #[error("objective {slot} is {objective_type:?}, which cannot have a name, but has name length {length}")]
    InvalidNameLength {
        /// Objective slot, 0-6.
        slot: usize,
        /// The objective's type.
        objective_type: ObjectiveType,
        /// The name length byte.
        length: u8,
    },
    /// There is more data after the continuation section.
    #[error("unexpected trailing bytes after the continuation section")]
    TrailingBytes,
    /// Checking for trailing data after the continuation section failed.
    #[error("could not check for trailing bytes: {0}")]
    EndProbeError(#[source] io::Error),
    /// Attempted to set an objective name longer than 255 bytes.
    #[error("objective name is {0} bytes, but can be at most 255")]
    NameTooLong(usize),
    /// An error occurred while reading or writing.
    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// Result type for quest file methods.
pub type Result<T> = std::result::Result<T, Error>;

/// Map an error from reading `section` to [`Error::Truncated`] if the input ran out.
pub(crate) fn truncated(section: Section) -> impl FnOnce(io::Error) -> Error {
    move |err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated(section)
        } else {
            Error::IoError(err)
        }
    }
}

/// A quest file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestFile {
    /// Quest metadata and rewards.
    pub header: QuestHeader,
    /// The objectives, in order.
    pub objectives: [Objective; NUM_OBJECTIVES],
    /// Links to follow-up quests.
    pub continuation: Continuation,
}

impl QuestFile {
    /// Read a quest file.
    ///
    /// The input must end right after the continuation section.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        let header = QuestHeader::read_from(&mut input)?;

        let mut objectives: [Objective; NUM_OBJECTIVES] = Default::default();
        for (slot, objective) in objectives.iter_mut().enumerate() {
            *objective = Objective::read_from(&mut input, slot)?;
        }

        let continuation = Continuation::read_from(&mut input)?;

        if !agonyl_support::at_end(&mut input).map_err(Error::EndProbeError)? {
            return Err(Error::TrailingBytes);
        }

        Ok(Self {
            header,
            objectives,
            continuation,
        })
    }

    /// Read a quest file from a byte slice.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_from(bytes)
    }

    /// Write the quest file to an output stream.
    ///
    /// Nothing is validated. If writing fails, the output may contain part of the file.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        self.header.write_to(output)?;
        for objective in &self.objectives {
            objective.write_to(output)?;
        }
        self.continuation.write_to(output)?;
        Ok(())
    }

    /// Write the quest file to a new byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Number of bytes this quest file takes up when written.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE
            + self
                .objectives
                .iter()
                .map(Objective::encoded_len)
                .sum::<usize>()
            + CONTINUATION_SIZE
    }

    /// Iterate over the objectives that are not empty slots.
    pub fn active_objectives(&self) -> impl Iterator<Item = &Objective> {
        self.objectives
            .iter()
            .filter(|objective| !objective.is_unused())
    }
}
