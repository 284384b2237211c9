//! Readers and writers for the flat record files of the A3 client and server.
//!
//! - `map`: client map bins, a `u32` count followed by 56-byte map entries.
//! - `monster`: client monster bins, a `u32` count followed by 96-byte monster entries.
//! - `npc`: server NPC files, a single 78-byte NPC record.
//! - `spawn`: spawn lists, 8-byte spawn entries until the end of the file.
//!
//! All integers are little-endian. Reserved bytes are kept as-is so files can be written back
//! unchanged.

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused)]

#[macro_use]
mod list;
pub mod map;
pub mod monster;
pub mod npc;
pub mod spawn;

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::convert::TryFrom;
use std::io::{self, Read, Write};

pub use agonyl_support::{DecodeStringError, EncodeStringError};
pub use map::{MapBin, MapBinItem};
pub use monster::{MonsterBin, MonsterBinItem};
pub use npc::{NpcAttack, NpcFile};
pub use spawn::{SpawnList, SpawnListItem};

/// Error type for bin file methods.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A spawn list's length is not a whole number of entries.
    #[error("spawn list is {0} bytes long, which is not a multiple of the entry size")]
    PartialEntry(usize),
    /// Attempted to write a list with more entries than the count field can hold.
    #[error("too many entries: {0}")]
    TooManyEntries(usize),
    /// Failed to encode a name into its fixed-width field.
    #[error(transparent)]
    EncodeStringError(#[from] EncodeStringError),
    /// An error occurred while reading or writing.
    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// Result type for bin file methods.
pub type Result<T> = std::result::Result<T, Error>;

/// Read a `u32` entry count, then that many entries.
fn read_counted<R, T>(input: &mut R, read_entry: impl Fn(&mut R) -> Result<T>) -> Result<Vec<T>>
where
    R: Read,
{
    let count = input.read_u32::<LE>()? as usize;
    log::debug!("Reading {} entries", count);
    // the count is untrusted, don't let it decide the allocation size up front
    let mut entries = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        entries.push(read_entry(input)?);
    }
    Ok(entries)
}

/// Write a `u32` entry count, then every entry.
fn write_counted<W, T>(
    output: &mut W,
    entries: &[T],
    write_entry: impl Fn(&T, &mut W) -> Result<()>,
) -> Result<()>
where
    W: Write,
{
    let count = u32::try_from(entries.len()).map_err(|_| Error::TooManyEntries(entries.len()))?;
    output.write_u32::<LE>(count)?;
    for entry in entries {
        write_entry(entry, output)?;
    }
    Ok(())
}
