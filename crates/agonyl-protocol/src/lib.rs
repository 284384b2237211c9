//! Fixed-layout network messages of the A3 login, gate and zone servers.
//!
//! Every message starts with a [`Header`] holding the message size, the player connection ID and
//! a `ctrl`/`cmd` pair. In-game messages use a [`ProtocolHeader`] instead, which adds a protocol
//! code. Fields follow back to back in little-endian order, without alignment padding. Text fields
//! are fixed-width, EUC-KR encoded and padded with NUL bytes.
//!
//! Protocol codes differ between server builds, so constructors of in-game messages take the code
//! as an argument.
//!
//! ```rust
//! use agonyl_protocol::{chat::{C2SSay, SayType}, Message};
//!
//! let say = C2SSay::new(12345, 0x1801, SayType::GENERAL, "PlayerOne", "Hello world").unwrap();
//! assert_eq!(say.size(), 98);
//!
//! let bytes = say.to_bytes().unwrap();
//! assert_eq!(bytes.len(), 98);
//! assert_eq!(C2SSay::from_bytes(&bytes).unwrap(), say);
//! ```

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused)]

#[macro_use]
mod macros;
pub mod character;
pub mod chat;
pub mod clan;
pub mod field;
pub mod gate;
mod header;
pub mod login;
pub mod market;
pub mod ping;
pub mod status;

use std::io::{self, Read, Write};

pub use agonyl_support::EncodeStringError;
pub use field::Field;
pub use header::{Header, ProtocolHeader, PROTOCOL_CMD, PROTOCOL_CTRL};

/// Error type for message methods.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A text value does not fit in its field.
    #[error(transparent)]
    EncodeStringError(#[from] EncodeStringError),
    /// An error occurred while reading or writing.
    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// Result type for message methods.
pub type Result<T> = std::result::Result<T, Error>;

/// A complete network message.
pub trait Message: Field {
    /// The message header.
    fn header(&self) -> &Header;

    /// Mutable access to the message header.
    fn header_mut(&mut self) -> &mut Header;

    /// Encoded size of the message.
    fn size(&self) -> u32 {
        // message layouts are a few hundred bytes at most
        u32::try_from(Self::SIZE).unwrap_or(u32::MAX)
    }

    /// Store the encoded size in the header.
    fn set_size(&mut self) {
        let size = self.size();
        self.header_mut().size = size;
    }

    /// Read a message. Reads exactly [`Field::SIZE`] bytes.
    fn read_from(mut input: impl Read) -> Result<Self> {
        let message = Self::read_field(&mut input)?;
        log::trace!(
            "Read message ctrl={:#04x} cmd={:#04x} size={}",
            message.header().ctrl,
            message.header().cmd,
            message.header().size
        );
        Ok(message)
    }

    /// Write the message as-is. The size in the header is not updated.
    fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        self.write_field(output)?;
        Ok(())
    }

    /// Encode the message into a new buffer.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(Self::SIZE);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode a message from the start of `bytes`. Bytes after the message are ignored.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_from(bytes)
    }
}

/// Store a string in a fixed-width text field.
fn set_text(field: &mut [u8], value: &str) -> Result<()> {
    agonyl_support::encode_fixed_str(value, field)?;
    Ok(())
}
