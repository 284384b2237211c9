//! Messages between the gate agent and the login and zone servers.

use crate::login::NAME_SIZE;
use crate::{set_text, Header, Message, Result};
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Size of an IPv4 address text field.
pub const IP_ADDRESS_SIZE: usize = 0x10;
/// Size of a server name field.
pub const SERVER_NAME_SIZE: usize = 0x11;

message! {
    /// Gate agent registration with the login server.
    pub struct Gate2LsConnect {
        /// Header.
        pub head: Header,
        /// Server ID.
        pub server_id: u8,
        /// Gate agent ID.
        pub agent_id: u8,
        /// Address clients connect to.
        pub ip_address: [u8; IP_ADDRESS_SIZE],
        /// Port clients connect to.
        pub port: u32,
        /// Server name shown to clients.
        pub name: [u8; SERVER_NAME_SIZE],
    }
}

impl Gate2LsConnect {
    /// Create a registration message.
    pub fn new(
        server_id: u8,
        agent_id: u8,
        ip_address: &str,
        port: u32,
        name: &str,
    ) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x02, 0xE0, 0),
            server_id,
            agent_id,
            port,
            ..Default::default()
        };
        set_text(&mut msg.ip_address, ip_address)?;
        set_text(&mut msg.name, name)?;
        msg.set_size();
        Ok(msg)
    }

    /// Address clients connect to.
    pub fn ip_address(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.ip_address)
    }

    /// Server name.
    pub fn name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.name)
    }
}

message! {
    /// Account logout reported by the gate agent.
    pub struct Gate2LsAccLogout {
        /// Header.
        pub head: Header,
        /// Logout reason.
        pub reason: u8,
        /// Account name.
        pub account: [u8; NAME_SIZE],
        /// Logout date, filled in by the login server.
        pub logout_date: [u8; 9],
        /// Logout time, filled in by the login server.
        pub logout_time: [u8; 7],
    }
}

impl Gate2LsAccLogout {
    /// Create a logout report. Date and time are left blank.
    pub fn new(reason: u8, account: &str) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x02, 0xE2, 0),
            reason,
            ..Default::default()
        };
        set_text(&mut msg.account, account)?;
        msg.set_size();
        Ok(msg)
    }

    /// Account name.
    pub fn account(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.account)
    }
}

message! {
    /// Account whose login the gate agent has prepared.
    pub struct Gate2LsPreparedAccLogin {
        /// Header.
        pub head: Header,
        /// Account name.
        pub account: [u8; NAME_SIZE],
    }
}

impl Gate2LsPreparedAccLogin {
    /// Create a prepared login notice.
    pub fn new(account: &str) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x02, 0xE3, 0),
            ..Default::default()
        };
        set_text(&mut msg.account, account)?;
        msg.set_size();
        Ok(msg)
    }
}

message! {
    /// Gate agent registration with a zone server.
    pub struct Gate2ZsConnect {
        /// Header.
        pub head: Header,
        /// Gate agent ID.
        pub agent_id: u8,
    }
}

impl Gate2ZsConnect {
    /// Create a registration message.
    pub fn new(agent_id: u8) -> Self {
        let mut msg = Self {
            head: Header::new(0x01, 0xE0, 0),
            agent_id,
        };
        msg.set_size();
        msg
    }
}

message! {
    /// Account logout forwarded to a zone server.
    pub struct Za2ZsAccLogout {
        /// Header.
        pub head: Header,
        /// Logout reason.
        pub reason: u8,
    }
}

impl Za2ZsAccLogout {
    /// Create a logout notice for a player connection.
    pub fn new(pc_id: u32, reason: u8) -> Self {
        let mut msg = Self {
            head: Header::new(0x01, 0xE2, pc_id),
            reason,
        };
        msg.set_size();
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn sizes() {
        assert_eq!(Gate2LsConnect::SIZE, 49);
        assert_eq!(Gate2LsAccLogout::SIZE, 48);
        assert_eq!(Gate2LsPreparedAccLogin::SIZE, 31);
        assert_eq!(Gate2ZsConnect::SIZE, 11);
        assert_eq!(Za2ZsAccLogout::SIZE, 11);
    }

    #[test]
    fn connect_roundtrip() -> anyhow::Result<()> {
        let msg = Gate2LsConnect::new(1, 2, "127.0.0.1", 9001, "Temoz")?;
        assert_eq!(msg.size(), 49);
        let bytes = msg.to_bytes()?;
        assert_eq!(&bytes[8..12], &[0x02, 0xE0, 1, 2]);
        // port follows the 16 byte address
        assert_eq!(&bytes[28..32], &9001u32.to_le_bytes());

        let decoded = Gate2LsConnect::from_bytes(&bytes)?;
        assert_eq!(decoded.ip_address()?, "127.0.0.1");
        assert_eq!(decoded.name()?, "Temoz");
        Ok(())
    }

    #[test]
    fn logout() -> anyhow::Result<()> {
        let msg = Gate2LsAccLogout::new(3, "account1")?;
        let decoded = Gate2LsAccLogout::from_bytes(&msg.to_bytes()?)?;
        assert_eq!(decoded.reason, 3);
        assert_eq!(decoded.account()?, "account1");
        assert_eq!(decoded.logout_date, [0; 9]);

        let zone = Za2ZsAccLogout::new(77, 1);
        assert_eq!(
            zone.to_bytes()?,
            vec![11u8, 0, 0, 0, 77, 0, 0, 0, 0x01, 0xE2, 1]
        );
        Ok(())
    }

    #[test]
    fn zone_connect() -> anyhow::Result<()> {
        let msg = Gate2ZsConnect::new(5);
        assert_eq!(Gate2ZsConnect::from_bytes(&msg.to_bytes()?)?, msg);

        let prepared = Gate2LsPreparedAccLogin::new("account1")?;
        assert_eq!(prepared.header().size, 31);
        Ok(())
    }
}
