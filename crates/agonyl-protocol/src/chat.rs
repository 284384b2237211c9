//! Chat messages.

use crate::{set_text, Field, Message, ProtocolHeader, Result};
use agonyl_support::{decode_fixed_str, DecodeStringError};
use std::io::{Read, Write};

/// Chat channel of a message.
///
/// Kept as the raw byte so unknown channels survive a round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SayType(pub u8);

impl SayType {
    /// System message.
    pub const SYSTEM: SayType = SayType(0x00);
    /// Normal chat.
    pub const GENERAL: SayType = SayType(0x01);
    /// Private message.
    pub const WHISPER: SayType = SayType(0x03);
    /// Party chat.
    pub const PARTY: SayType = SayType(0x04);
    /// Knighthood (clan) chat.
    pub const KNIGHTHOOD: SayType = SayType(0x05);
    /// Nation-wide chat.
    pub const COUNTRY: SayType = SayType(0x06);
    /// Alliance chat.
    pub const ALLIANCE: SayType = SayType(0x08);
    /// Server notice.
    pub const NOTICE: SayType = SayType(0x0C);
    /// Shout to the whole map.
    pub const SHOUT: SayType = SayType(0xF1);
}

impl Field for SayType {
    const SIZE: usize = 1;

    fn zeroed() -> Self {
        SayType(0)
    }

    fn read_field<R: Read>(input: &mut R) -> std::io::Result<Self> {
        u8::read_field(input).map(SayType)
    }

    fn write_field<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        self.0.write_field(output)
    }
}

/// Size of a character name field.
pub const SAY_PC_SIZE: usize = 0x15;
/// Size of a chat text field.
pub const WORDS_SIZE: usize = 0x40;

message! {
    /// A chat line sent by the client.
    pub struct C2SSay {
        /// Header.
        pub head: ProtocolHeader,
        /// Channel.
        pub say_type: SayType,
        /// Name of the speaking character.
        pub say_pc: [u8; SAY_PC_SIZE],
        /// Chat text.
        pub words: [u8; WORDS_SIZE],
    }
}

impl C2SSay {
    /// Create a chat line.
    pub fn new(
        pc_id: u32,
        protocol: u16,
        say_type: SayType,
        say_pc: &str,
        words: &str,
    ) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            say_type,
            ..Default::default()
        };
        set_text(&mut msg.say_pc, say_pc)?;
        set_text(&mut msg.words, words)?;
        msg.set_size();
        Ok(msg)
    }

    /// Name of the speaking character.
    pub fn say_pc(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.say_pc)
    }

    /// Chat text.
    pub fn words(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.words)
    }
}

message! {
    /// A chat line relayed by the server.
    pub struct S2CSay {
        /// Header.
        pub head: ProtocolHeader,
        /// Channel.
        pub say_type: SayType,
        /// Connection ID of the speaking character.
        pub say_pc_id: u32,
        /// Name of the speaking character.
        pub say_pc: [u8; SAY_PC_SIZE],
        /// Chat text.
        pub words: [u8; WORDS_SIZE],
    }
}

impl S2CSay {
    /// Create a relayed chat line. The speaker is the connection the message is sent for.
    pub fn new(
        pc_id: u32,
        protocol: u16,
        say_type: SayType,
        say_pc: &str,
        words: &str,
    ) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            say_type,
            say_pc_id: pc_id,
            ..Default::default()
        };
        set_text(&mut msg.say_pc, say_pc)?;
        set_text(&mut msg.words, words)?;
        msg.set_size();
        Ok(msg)
    }

    /// Chat text.
    pub fn words(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(C2SSay::SIZE, 98);
        assert_eq!(S2CSay::SIZE, 102);
    }

    #[test]
    fn say_layout() -> anyhow::Result<()> {
        let say = C2SSay::new(12345, 0x1801, SayType::GENERAL, "PlayerOne", "Hello world")?;
        let bytes = say.to_bytes()?;
        assert_eq!(bytes.len(), 98);
        assert_eq!(&bytes[4..8], &12345u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &[0x03, 0xFF, 0x01, 0x18]);
        assert_eq!(bytes[12], 0x01);
        assert_eq!(&bytes[13..23], b"PlayerOne\0");
        assert_eq!(&bytes[34..45], b"Hello world");
        Ok(())
    }

    #[test]
    fn relayed_say() -> anyhow::Result<()> {
        let say = S2CSay::new(7, 0x1801, SayType(0x42), "Herald", "Hear ye")?;
        assert_eq!(say.say_pc_id, 7);
        let decoded = S2CSay::from_bytes(&say.to_bytes()?)?;
        assert_eq!(decoded.say_type, SayType(0x42));
        assert_eq!(decoded.words()?, "Hear ye");
        Ok(())
    }
}
