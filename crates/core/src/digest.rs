//! The 160-bit digest value

use core::fmt;

use crate::codec::bits_to_binary_string;
use crate::params::{DIGEST_BITS, DIGEST_BYTES};

/// A 160-bit Pi-Sponge digest
///
/// Squeeze output bit `i` is stored most-significant-bit first in byte
/// `i / 8`, so the hex rendering reads the bits in squeeze order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Wrap 20 raw digest bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Pack 160 bits in squeeze order
    pub fn from_bits(bits: &[bool; DIGEST_BITS]) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        for (i, &bit) in bits.iter().enumerate() {
            bytes[i / 8] |= (bit as u8) << (7 - i % 8);
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// The 160 digest bits in squeeze order
    pub fn bits(&self) -> [bool; DIGEST_BITS] {
        let mut bits = [false; DIGEST_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (self.0[i / 8] >> (7 - i % 8)) & 1 == 1;
        }
        bits
    }

    /// 160 characters of `0`/`1`
    pub fn to_binary_string(&self) -> String {
        bits_to_binary_string(&self.bits())
    }

    /// 40 lowercase hex digits, no prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_BYTES]> for Digest {
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
