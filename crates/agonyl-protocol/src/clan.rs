//! Clan messages.

use crate::login::NAME_SIZE;
use crate::{Message, ProtocolHeader};
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Number of members listed in a clan info message.
pub const NUM_CLAN_MATES: usize = 0xD;

message! {
    /// Request for the character's clan info.
    pub struct C2SReqClanInfo {
        /// Header.
        pub head: ProtocolHeader,
    }
}

impl C2SReqClanInfo {
    /// Create a clan info request.
    pub fn new(pc_id: u32, protocol: u16) -> Self {
        let mut msg = Self {
            head: ProtocolHeader::new(protocol, pc_id),
        };
        msg.set_size();
        msg
    }
}

record! {
    /// A clan member.
    pub struct ClanMate {
        /// Character name.
        pub character_name: [u8; NAME_SIZE],
        /// Reserved.
        pub unknown1: [u8; 0xB],
        /// Class, see `agonyl_support::class_name`.
        pub class: u8,
        /// Reserved.
        pub unknown2: [u8; 0x3],
    }
}

impl ClanMate {
    /// Character name.
    pub fn character_name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.character_name)
    }
}

message! {
    /// Clan info sent by the server.
    pub struct S2CClanInfo {
        /// Header.
        pub head: ProtocolHeader,
        /// Clan name.
        pub clan_name: [u8; 0x20],
        /// Reserved.
        pub unknown1: u16,
        /// Reserved.
        pub unknown2: u16,
        /// Reserved.
        pub unknown3: u8,
        /// Reserved.
        pub unknown4: u16,
        /// Reserved.
        pub unknown5: u32,
        /// Reserved.
        pub unknown6: u32,
        /// Members.
        pub clan_mates: [ClanMate; NUM_CLAN_MATES],
    }
}

impl S2CClanInfo {
    /// Clan name.
    pub fn clan_name(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.clan_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use agonyl_support::encode_fixed_str;

    #[test]
    fn sizes() {
        assert_eq!(C2SReqClanInfo::SIZE, 12);
        assert_eq!(ClanMate::SIZE, 36);
        assert_eq!(S2CClanInfo::SIZE, 527);
    }

    #[test]
    fn clan_info_roundtrip() -> anyhow::Result<()> {
        let mut info = S2CClanInfo::default();
        info.head = ProtocolHeader::new(0x2001, 8);
        encode_fixed_str("Knights", &mut info.clan_name)?;
        encode_fixed_str("Squire", &mut info.clan_mates[12].character_name)?;
        info.clan_mates[12].class = 3;
        info.unknown5 = 0xDEAD_BEEF;
        info.set_size();

        let bytes = info.to_bytes()?;
        assert_eq!(bytes.len(), 527);
        // the last member's class sits 4 bytes before the end
        assert_eq!(bytes[527 - 4], 3);

        let decoded = S2CClanInfo::from_bytes(&bytes)?;
        assert_eq!(decoded, info);
        assert_eq!(decoded.clan_name()?, "Knights");
        assert_eq!(decoded.clan_mates[12].character_name()?, "Squire");
        Ok(())
    }

    #[test]
    fn request() -> anyhow::Result<()> {
        let req = C2SReqClanInfo::new(8, 0x2000);
        assert_eq!(req.header().size, 12);
        assert_eq!(C2SReqClanInfo::from_bytes(&req.to_bytes()?)?, req);
        Ok(())
    }
}
