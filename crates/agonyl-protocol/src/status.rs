//! Error and level messages.

use crate::{set_text, Message, ProtocolHeader, Result};
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Size of an error text field.
pub const ERROR_MSG_SIZE: usize = 64;

message! {
    /// An error reported to the client.
    pub struct S2CError {
        /// Header.
        pub head: ProtocolHeader,
        /// Error code.
        pub code: u16,
        /// Error text.
        pub msg: [u8; ERROR_MSG_SIZE],
    }
}

impl S2CError {
    /// Create an error message.
    pub fn new(pc_id: u32, protocol: u16, code: u16, msg: &str) -> Result<Self> {
        let mut error = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            code,
            ..Default::default()
        };
        set_text(&mut error.msg, msg)?;
        error.set_size();
        Ok(error)
    }

    /// Error text.
    pub fn msg(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.msg)
    }
}

message! {
    /// A character reached a new level.
    pub struct S2CLevelUp {
        /// Header.
        pub head: ProtocolHeader,
        /// New level.
        pub level: u16,
    }
}

impl S2CLevelUp {
    /// Create a level up notice. The connection ID is left at zero.
    pub fn new(protocol: u16, level: u16) -> Self {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, 0),
            level,
        };
        msg.set_size();
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Field};

    #[test]
    fn sizes() {
        assert_eq!(S2CError::SIZE, 78);
        assert_eq!(S2CLevelUp::SIZE, 14);
    }

    #[test]
    fn error_roundtrip() -> anyhow::Result<()> {
        let error = S2CError::new(5, 0x0F01, 404, "Character not found")?;
        let bytes = error.to_bytes()?;
        assert_eq!(&bytes[12..14], &404u16.to_le_bytes());

        let decoded = S2CError::from_bytes(&bytes)?;
        assert_eq!(decoded.code, 404);
        assert_eq!(decoded.msg()?, "Character not found");
        Ok(())
    }

    #[test]
    fn error_text_fills_field() -> anyhow::Result<()> {
        let full = "e".repeat(ERROR_MSG_SIZE);
        let error = S2CError::new(1, 0x0F01, 1, &full)?;
        assert_eq!(error.msg()?, full);

        let long = "e".repeat(ERROR_MSG_SIZE + 1);
        assert!(matches!(
            S2CError::new(1, 0x0F01, 1, &long),
            Err(Error::EncodeStringError(_))
        ));
        Ok(())
    }

    #[test]
    fn level_up() -> anyhow::Result<()> {
        let msg = S2CLevelUp::new(0x1205, 50);
        assert_eq!(
            msg.to_bytes()?,
            vec![14u8, 0, 0, 0, 0, 0, 0, 0, 0x03, 0xFF, 0x05, 0x12, 50, 0]
        );
        Ok(())
    }
}
