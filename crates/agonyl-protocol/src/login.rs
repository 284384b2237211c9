//! Account login, server selection and character login messages.

use crate::{set_text, Header, Message, ProtocolHeader, Result};
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Size of account, password and character name fields.
pub const NAME_SIZE: usize = 0x15;

message! {
    /// Account login request sent by the client to the login server.
    pub struct C2SLogin {
        /// Header.
        pub head: Header,
        /// Account name.
        pub username: [u8; NAME_SIZE],
        /// Password.
        pub password: [u8; NAME_SIZE],
    }
}

impl C2SLogin {
    /// Create a login request.
    pub fn new(username: &str, password: &str) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE0, 0),
            ..Default::default()
        };
        set_text(&mut msg.username, username)?;
        set_text(&mut msg.password, password)?;
        msg.set_size();
        Ok(msg)
    }

    /// Account name.
    pub fn username(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.username)
    }

    /// Password.
    pub fn password(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.password)
    }
}

message! {
    /// Login request sent by the client to the gate server.
    pub struct C2SGateLogin {
        /// Header.
        pub head: Header,
        /// Connection ID handed out by the login server.
        pub pc_id: u32,
        /// Account name.
        pub account: [u8; NAME_SIZE],
        /// Password.
        pub password: [u8; NAME_SIZE],
    }
}

impl C2SGateLogin {
    /// Create a gate login request.
    pub fn new(pc_id: u32, account: &str, password: &str) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE2, pc_id),
            pc_id,
            ..Default::default()
        };
        set_text(&mut msg.account, account)?;
        set_text(&mut msg.password, password)?;
        msg.set_size();
        Ok(msg)
    }
}

message! {
    /// A text message from the login server to the client.
    pub struct Ls2ClSay {
        /// Header.
        pub head: Header,
        /// Message kind. Always 0 when created here.
        pub say_type: u8,
        /// Text.
        pub words: [u8; 0x51],
    }
}

impl Ls2ClSay {
    /// Create a login server message.
    pub fn new(words: &str) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE0, 0),
            ..Default::default()
        };
        set_text(&mut msg.words, words)?;
        msg.set_size();
        Ok(msg)
    }
}

record! {
    /// One entry in the server list.
    pub struct GateServerInfo {
        /// Server ID.
        pub server_id: u8,
        /// Server name.
        pub server_name: [u8; 0x11],
        /// Status text.
        pub server_status: [u8; 0x51],
    }
}

impl GateServerInfo {
    /// Server name.
    pub fn server_name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.server_name)
    }
}

message! {
    /// Tells the gate server that an account logged in.
    pub struct Ls2GateLogin {
        /// Header.
        pub head: Header,
        /// Account name.
        pub account: [u8; NAME_SIZE],
        /// Reserved.
        pub unknown: [u8; 0x09],
    }
}

impl Ls2GateLogin {
    /// Create an account login notice.
    pub fn new(account: &str, pc_id: u32) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE1, pc_id),
            ..Default::default()
        };
        set_text(&mut msg.account, account)?;
        msg.set_size();
        Ok(msg)
    }
}

message! {
    /// Tells the client which zone agent to connect to.
    pub struct S2CGateInfo {
        /// Header.
        pub head: Header,
        /// Connection ID.
        pub pc_id: u32,
        /// Zone agent IP address, as text.
        pub za_ip: [u8; 0x10],
        /// Zone agent port.
        pub za_port: u32,
    }
}

impl S2CGateInfo {
    /// Create a zone agent redirect.
    pub fn new(pc_id: u32, za_ip: &str, za_port: u32) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE2, pc_id),
            pc_id,
            za_port,
            ..Default::default()
        };
        set_text(&mut msg.za_ip, za_ip)?;
        msg.set_size();
        Ok(msg)
    }

    /// Zone agent IP address.
    pub fn za_ip(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.za_ip)
    }
}

message! {
    /// Tells a zone agent to disconnect an account.
    pub struct Ls2ZaDisconnect {
        /// Header.
        pub head: Header,
        /// Disconnect reason.
        pub reason: u8,
        /// Account name.
        pub account: [u8; NAME_SIZE],
        /// Reserved.
        pub unknown: [u8; 0x10],
    }
}

impl Ls2ZaDisconnect {
    /// Create a disconnect request.
    pub fn new(reason: u8, account: &str, pc_id: u32) -> Result<Self> {
        let mut msg = Self {
            head: Header::new(0x01, 0xE3, pc_id),
            reason,
            ..Default::default()
        };
        set_text(&mut msg.account, account)?;
        msg.set_size();
        Ok(msg)
    }
}

message! {
    /// Server selection sent by the client.
    pub struct C2SSelectServer {
        /// Header.
        pub head: Header,
        /// Selected server.
        pub server_id: u8,
    }
}

impl C2SSelectServer {
    /// Create a server selection.
    pub fn new(server_id: u8) -> Self {
        let mut msg = Self {
            head: Header::new(0x01, 0xE1, 0),
            server_id,
        };
        msg.set_size();
        msg
    }
}

message! {
    /// Character logout request.
    pub struct C2SCharacterLogout {
        /// Header.
        pub head: ProtocolHeader,
    }
}

impl C2SCharacterLogout {
    /// Create a logout request.
    pub fn new(pc_id: u32, protocol: u16) -> Self {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
        };
        msg.set_size();
        msg
    }
}

message! {
    /// Character selection sent by the client.
    pub struct C2SCharacterLogin {
        /// Header.
        pub head: ProtocolHeader,
        /// Character name.
        pub character_name: [u8; NAME_SIZE],
        /// Client version.
        pub client_version: u32,
    }
}

impl C2SCharacterLogin {
    /// Create a character selection.
    pub fn new(
        pc_id: u32,
        protocol: u16,
        character_name: &str,
        client_version: u32,
    ) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            client_version,
            ..Default::default()
        };
        set_text(&mut msg.character_name, character_name)?;
        msg.set_size();
        Ok(msg)
    }

    /// Character name.
    pub fn character_name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.character_name)
    }
}

message! {
    /// Request to enter the world with a character.
    pub struct C2SWorldLogin {
        /// Header.
        pub head: ProtocolHeader,
        /// Character name.
        pub character_name: [u8; NAME_SIZE],
    }
}

impl C2SWorldLogin {
    /// Create a world login request.
    pub fn new(pc_id: u32, protocol: u16, character_name: &str) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            ..Default::default()
        };
        set_text(&mut msg.character_name, character_name)?;
        msg.set_size();
        Ok(msg)
    }
}

message! {
    /// Character state sent when a character enters the world.
    pub struct S2CWorldLogin {
        /// Header.
        pub head: ProtocolHeader,
        /// Character name.
        pub character_name: [u8; NAME_SIZE],
        /// Class, see `agonyl_support::class_name`.
        pub class: u8,
        /// Level.
        pub level: u16,
        /// Experience.
        pub exp: u32,
        /// Map number.
        pub map_num: u32,
        /// Packed position.
        pub xy: u32,
        /// Skill data.
        pub skill_info: [u8; 0x1C],
        /// Home town.
        pub town: u8,
        /// Reserved.
        pub unknown1: u8,
        /// Reserved.
        pub unknown2: u16,
        /// Money.
        pub woonz: u32,
        /// HP potion count.
        pub hp_pot: u32,
        /// MP potion count.
        pub mp_pot: u32,
        /// Lore points.
        pub lore: u32,
        /// Unspent stat points.
        pub remaining_points: u16,
        /// Strength.
        pub strength: u16,
        /// Intelligence.
        pub intelligence: u16,
    }
}

message! {
    /// Character login confirmation.
    pub struct S2CCharacterLogin {
        /// Header.
        pub head: ProtocolHeader,
        /// Character name.
        pub character_name: [u8; NAME_SIZE],
        /// Reserved.
        pub unknown: u32,
        /// Map number.
        pub map_num: u16,
    }
}

impl S2CCharacterLogin {
    /// Create a character login confirmation.
    pub fn new(
        pc_id: u32,
        protocol: u16,
        character_name: &str,
        unknown: u32,
        map_num: u16,
    ) -> Result<Self> {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
            unknown,
            map_num,
            ..Default::default()
        };
        set_text(&mut msg.character_name, character_name)?;
        msg.set_size();
        Ok(msg)
    }
}
