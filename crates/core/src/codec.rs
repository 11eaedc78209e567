//! Bit sequence ⇄ text conversions
//!
//! Hex digits are read and written most-significant-bit first. Both
//! directions left-pad with zeros, so short inputs denote small values.

use thiserror::Error;

use crate::params::{DIGEST_BITS, HEX_DIGITS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Remove one leading `0x` or `0X`, if present
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Render bits as lowercase hex, left-padding with zero bits to a multiple of 4
pub fn to_hex(bits: &[bool]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let pad = (4 - bits.len() % 4) % 4;
    let mut out = String::with_capacity((bits.len() + pad) / 4);
    let mut nibble = 0usize;
    for (i, &bit) in core::iter::repeat_n(&false, pad).chain(bits).enumerate() {
        nibble = (nibble << 1) | bit as usize;
        if i % 4 == 3 {
            out.push(DIGITS[nibble] as char);
            nibble = 0;
        }
    }
    out
}

/// Parse hex text into exactly 160 bits
///
/// An optional `0x`/`0X` prefix is stripped, the rest is left-padded with
/// `'0'` to 40 digits, and anything past the first 160 bits is dropped.
pub fn hex_to_bits160(text: &str) -> Result<[bool; DIGEST_BITS], CodecError> {
    let digits = strip_hex_prefix(text);
    // Validate the whole input, not just the part that is kept
    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(hex::FromHexError::InvalidHexCharacter { c, index }.into());
    }
    let padded = format!("{:0>width$}", digits, width = HEX_DIGITS);

    let mut bytes = [0u8; DIGEST_BITS / 8];
    hex::decode_to_slice(&padded[..HEX_DIGITS], &mut bytes)?;

    let mut bits = [false; DIGEST_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (bytes[i / 8] >> (7 - i % 8)) & 1 == 1;
    }
    Ok(bits)
}

/// Render bits as a string of `0` and `1` characters
pub fn bits_to_binary_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
