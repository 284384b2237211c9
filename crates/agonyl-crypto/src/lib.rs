//! The stream cipher used by the legacy A3 client, version 562.
//!
//! Packets keep their first 12 bytes (the packet header) in the clear. The rest is processed in
//! 4-byte blocks, each block XORed with a key stream that restarts from the session's dynamic
//! key. A trailing partial block is left as-is.
//!
//! ```rust
//! use agonyl_crypto::{Crypto, Crypto562};
//!
//! let crypto = Crypto562::new(0x1234);
//! let original: Vec<u8> = (0..20).collect();
//! let mut packet = original.clone();
//!
//! crypto.encrypt_in_place(&mut packet);
//! assert_eq!(&packet[..12], &original[..12]);
//! assert_ne!(packet, original);
//!
//! crypto.decrypt_in_place(&mut packet);
//! assert_eq!(packet, original);
//! ```

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused)]

/// Number of leading bytes left in the clear.
pub const OFFSET: usize = 0x0C;
/// Size of a cipher block.
pub const BLOCK_SIZE: usize = 4;

const KEY_MUL: i64 = 0x241AE7;
const KEY_ADD: i64 = 0x15DCB2;

/// In-place packet encryption and decryption.
pub trait Crypto {
    /// Encrypt `data` in place. The length does not change.
    fn encrypt_in_place(&self, data: &mut [u8]);
    /// Decrypt `data` in place. The length does not change.
    fn decrypt_in_place(&self, data: &mut [u8]);
}

/// The version 562 cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crypto562 {
    dynamic_key: i64,
}

impl Crypto562 {
    /// Create a cipher using the given dynamic key. Both sides must use the same key.
    pub fn new(dynamic_key: i64) -> Self {
        Self { dynamic_key }
    }

    /// The dynamic key this cipher was created with.
    pub fn dynamic_key(&self) -> i64 {
        self.dynamic_key
    }

    /// Run the key stream over every full block. `cipher_byte` picks the ciphertext byte out of
    /// an (input, output) pair, since the key advances on the ciphertext in both directions.
    fn apply(&self, data: &mut [u8], cipher_byte: fn(u8, u8) -> u8) {
        if data.len() <= OFFSET {
            return;
        }
        for block in data[OFFSET..].chunks_exact_mut(BLOCK_SIZE) {
            let mut key = self.dynamic_key;
            for byte in block.iter_mut() {
                let input = *byte;
                let output = input ^ (key >> 8) as u8;
                *byte = output;
                key = (i64::from(cipher_byte(input, output)))
                    .wrapping_add(key)
                    .wrapping_mul(KEY_MUL)
                    .wrapping_add(KEY_ADD);
            }
        }
    }
}

impl Crypto for Crypto562 {
    fn encrypt_in_place(&self, data: &mut [u8]) {
        self.apply(data, |_plain, cipher| cipher);
    }

    fn decrypt_in_place(&self, data: &mut [u8]) {
        self.apply(data, |cipher, _plain| cipher);
    }
}
