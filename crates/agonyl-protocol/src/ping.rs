//! Keep-alive messages.

use crate::{Header, Message};

message! {
    /// Time tick check sent by the gate agent to the client.
    pub struct ZaClChkTimeTick {
        /// Header.
        pub head: Header,
        /// Tick sequence number.
        pub tick_count: u32,
        /// Server tick.
        pub tick_svr: u32,
        /// Client tick, filled in by the client's reply.
        pub tick_clt: u32,
    }
}

impl ZaClChkTimeTick {
    /// Create a time tick check.
    pub fn new(pc_id: u32, tick_count: u32, tick_svr: u32) -> Self {
        let mut msg = Self {
            head: Header::new(0x01, 0xF0, pc_id),
            tick_count,
            tick_svr,
            tick_clt: 0,
        };
        msg.set_size();
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick() -> anyhow::Result<()> {
        let tick = ZaClChkTimeTick::new(3, 1, 0x0102_0304);
        let bytes = tick.to_bytes()?;
        assert_eq!(bytes.len(), 22);
        assert_eq!(&bytes[8..10], &[0x01, 0xF0]);
        assert_eq!(&bytes[14..18], &[0x04, 0x03, 0x02, 0x01]);

        let mut reply = ZaClChkTimeTick::from_bytes(&bytes)?;
        reply.tick_clt = 500;
        let decoded = ZaClChkTimeTick::from_bytes(&reply.to_bytes()?)?;
        assert_eq!(decoded.tick_clt, 500);
        assert_eq!(decoded.tick_svr, tick.tick_svr);
        Ok(())
    }
}
