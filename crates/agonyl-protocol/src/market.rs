//! Personal market messages.

use crate::ProtocolHeader;
use agonyl_support::{decode_fixed_str, DecodeStringError};

/// Size of the market item block.
pub const MARKET_ITEMS_SIZE: usize = 80;
/// Size of the market title.
pub const MARKET_MSG_SIZE: usize = 0x40;

message! {
    /// Request to open a personal market.
    pub struct C2SOpenMarket {
        /// Header.
        pub head: ProtocolHeader,
        /// Offered items, passed through unparsed.
        pub items: [u8; MARKET_ITEMS_SIZE],
        /// Market title.
        pub msg: [u8; MARKET_MSG_SIZE],
    }
}

impl C2SOpenMarket {
    /// Market title.
    pub fn msg(&self) -> std::result::Result<String, DecodeStringError> {
        decode_fixed_str(&self.msg)
    }
}
