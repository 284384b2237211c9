use encoding_rs::EUC_KR;

/// Failed to decode a string as EUC-KR.
///
/// This means that a name field contained bytes that are not valid in the EUC-KR code page used
/// by the A3 client.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("could not decode string as EUC-KR")]
pub struct DecodeStringError;

/// Failed to encode a string into a fixed-width name field.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum EncodeStringError {
    /// The string contains characters that do not exist in EUC-KR.
    #[error("could not encode string as EUC-KR")]
    Unmappable,
    /// The encoded string does not fit in the field.
    #[error("encoded string is {len} bytes, but the field only holds {capacity}")]
    TooLong {
        /// Length of the encoded string in bytes.
        len: usize,
        /// Size of the field in bytes.
        capacity: usize,
    },
}

/// Decode a string using the EUC-KR code page.
pub fn decode_str(bytes: &[u8]) -> Result<String, DecodeStringError> {
    if bytes.is_empty() {
        return Ok("".to_string());
    }

    let (decoded, _enc, failed) = EUC_KR.decode(bytes);
    if failed {
        Err(DecodeStringError)
    } else {
        Ok(decoded.to_string())
    }
}

/// Decode a NUL-padded, fixed-width name field.
///
/// Everything from the first NUL byte onward is ignored.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::decode_fixed_str;
///
/// let field = *b"Guard\0\0\0\0\0";
/// assert_eq!(decode_fixed_str(&field).unwrap(), "Guard");
/// ```
pub fn decode_fixed_str(field: &[u8]) -> Result<String, DecodeStringError> {
    let end = field
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(field.len());
    decode_str(&field[..end])
}

/// Encode a string into a fixed-width name field, padding the rest of the field with NUL bytes.
///
/// The string may fill the field completely, in which case there is no NUL terminator.
pub fn encode_fixed_str(string: &str, field: &mut [u8]) -> Result<(), EncodeStringError> {
    let (bytes, _enc, failed) = EUC_KR.encode(string);
    if failed {
        return Err(EncodeStringError::Unmappable);
    }
    if bytes.len() > field.len() {
        return Err(EncodeStringError::TooLong {
            len: bytes.len(),
            capacity: field.len(),
        });
    }
    field[..bytes.len()].copy_from_slice(&bytes);
    field[bytes.len()..].fill(0);
    Ok(())
}
