use crate::{Result, Section, UNUSED_CONTINUATION};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// Number of continuation slots.
pub const NUM_CONTINUATIONS: usize = 3;

/// The three links that follow the objectives, usually to follow-up quests.
///
/// Each slot holds either a value or the `0xFFFFFFFF` sentinel. Values are not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Continuation([u32; NUM_CONTINUATIONS]);

impl Default for Continuation {
    /// All slots unused.
    fn default() -> Self {
        Self([UNUSED_CONTINUATION; NUM_CONTINUATIONS])
    }
}

impl From<[u32; NUM_CONTINUATIONS]> for Continuation {
    fn from(values: [u32; NUM_CONTINUATIONS]) -> Self {
        Self(values)
    }
}

impl From<Continuation> for [u32; NUM_CONTINUATIONS] {
    fn from(continuation: Continuation) -> Self {
        continuation.0
    }
}

impl Continuation {
    /// Read the three continuation links.
    pub fn read_from(mut input: impl Read) -> Result<Self> {
        let mut values = [0; NUM_CONTINUATIONS];
        for value in values.iter_mut() {
            *value = input
                .read_u32::<LE>()
                .map_err(crate::truncated(Section::Continuation))?;
        }
        log::debug!("Continuation {:?}", values);
        Ok(Self(values))
    }

    /// Write the three continuation links.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        for value in self.0 {
            output.write_u32::<LE>(value)?;
        }
        Ok(())
    }

    /// The raw values, sentinels included.
    #[inline]
    pub fn values(&self) -> [u32; NUM_CONTINUATIONS] {
        self.0
    }

    /// The raw value in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_CONTINUATIONS`.
    #[inline]
    pub fn raw(&self, index: usize) -> u32 {
        self.0[index]
    }

    /// The link in slot `index`, or `None` if the slot is unused.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_CONTINUATIONS`.
    pub fn get(&self, index: usize) -> Option<u32> {
        match self.0[index] {
            UNUSED_CONTINUATION => None,
            value => Some(value),
        }
    }

    /// Set the link in slot `index`. `None` stores the unused sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_CONTINUATIONS`.
    pub fn set(&mut self, index: usize, value: Option<u32>) {
        self.0[index] = value.unwrap_or(UNUSED_CONTINUATION);
    }

    /// Iterate over the slots that are in use.
    pub fn links(&self) -> impl Iterator<Item = u32> + '_ {
        self.0
            .iter()
            .copied()
            .filter(|&value| value != UNUSED_CONTINUATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;

    #[test]
    fn sentinels() {
        let mut continuation = Continuation::default();
        assert_eq!(continuation.get(0), None);
        continuation.set(0, Some(5001));
        continuation.set(2, Some(102));
        assert_eq!(continuation.values(), [5001, UNUSED_CONTINUATION, 102]);
        assert_eq!(continuation.links().collect::<Vec<_>>(), vec![5001, 102]);
        continuation.set(0, None);
        assert_eq!(continuation.raw(0), 0xFFFF_FFFF);
    }

    #[test]
    fn read_little_endian() -> anyhow::Result<()> {
        let bytes: [u8; 12] = [1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0x34, 0x12, 0, 0];
        let continuation = Continuation::read_from(Cursor::new(bytes))?;
        assert_eq!(continuation.values(), [1, UNUSED_CONTINUATION, 0x1234]);

        let mut out = vec![];
        continuation.write_to(&mut out)?;
        assert_eq!(out, bytes);
        Ok(())
    }

    #[test]
    fn short_continuation() {
        let bytes = [0u8; 8];
        assert!(matches!(
            Continuation::read_from(Cursor::new(bytes)),
            Err(Error::Truncated(Section::Continuation))
        ));
    }
}
