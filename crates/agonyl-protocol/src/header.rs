//! Packet headers.

record! {
    /// The header every message starts with.
    pub struct Header {
        /// Size of the whole message in bytes, header included.
        pub size: u32,
        /// ID of the player connection the message belongs to.
        pub pc_id: u32,
        /// Message group.
        pub ctrl: u8,
        /// Message type within the group.
        pub cmd: u8,
    }
}

impl Header {
    /// Create a header with a zero size. Message constructors fill in the size.
    pub fn new(ctrl: u8, cmd: u8, pc_id: u32) -> Self {
        Self {
            size: 0,
            pc_id,
            ctrl,
            cmd,
        }
    }
}

impl AsRef<Header> for Header {
    fn as_ref(&self) -> &Header {
        self
    }
}

impl AsMut<Header> for Header {
    fn as_mut(&mut self) -> &mut Header {
        self
    }
}

/// `ctrl` value of messages that carry a protocol code.
pub const PROTOCOL_CTRL: u8 = 0x03;
/// `cmd` value of messages that carry a protocol code.
pub const PROTOCOL_CMD: u8 = 0xFF;

record! {
    /// The header of in-game messages: a [`Header`] followed by a protocol code that selects the
    /// message type.
    pub struct ProtocolHeader {
        /// The common header.
        pub head: Header,
        /// Protocol code.
        pub protocol: u16,
    }
}

impl ProtocolHeader {
    /// Create an in-game header for `protocol`.
    pub fn new(protocol: u16, pc_id: u32) -> Self {
        Self {
            head: Header::new(PROTOCOL_CTRL, PROTOCOL_CMD, pc_id),
            protocol,
        }
    }
}

impl AsRef<Header> for ProtocolHeader {
    fn as_ref(&self) -> &Header {
        &self.head
    }
}

impl AsMut<Header> for ProtocolHeader {
    fn as_mut(&mut self) -> &mut Header {
        &mut self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn sizes() {
        assert_eq!(Header::SIZE, 10);
        assert_eq!(ProtocolHeader::SIZE, 12);
    }

    #[test]
    fn layout() -> anyhow::Result<()> {
        let mut head = ProtocolHeader::new(0x0102, 7);
        head.head.size = 12;
        let mut out = vec![];
        head.write_field(&mut out)?;
        assert_eq!(out, vec![12, 0, 0, 0, 7, 0, 0, 0, 0x03, 0xFF, 0x02, 0x01]);
        assert_eq!(ProtocolHeader::read_field(&mut &out[..])?, head);
        Ok(())
    }
}
