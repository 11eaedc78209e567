//! Pi-Sponge Parameters
//!
//! Register sizes and the absorption round-count policy. Changing any of
//! these changes every digest.

/// Total state size in bits (|P| + |Q|)
pub const STATE_BITS: usize = P_BITS + Q_BITS;

/// Size of register P (state indices 0..79)
pub const P_BITS: usize = 80;

/// Size of register Q (state indices 80..160)
pub const Q_BITS: usize = 81;

/// Digest size in bits
pub const DIGEST_BITS: usize = 160;

/// Digest size in bytes
pub const DIGEST_BYTES: usize = DIGEST_BITS / 8;

/// Digest size in hex digits
pub const HEX_DIGITS: usize = DIGEST_BITS / 4;

/// State index where message bits are injected and output bits are read
pub const INJECTION_INDEX: usize = STATE_BITS - 1;

/// Rounds after absorbing the first message bit
pub const FIRST_ROUNDS: u32 = 324;

/// Rounds after absorbing each interior message bit
pub const INTERIOR_ROUNDS: u32 = 162;

/// Rounds after absorbing the last message bit (messages of 2+ bits)
pub const LAST_ROUNDS: u32 = 324;

/// Rounds applied to the seed when the message is empty
pub const EMPTY_ROUNDS: u32 = 324;

/// Rounds before each squeezed output bit
pub const SQUEEZE_ROUNDS: u32 = 1;

/// Fractional part of π, 100 decimal digits
pub const PI_FRACTION: &str = "1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Minimum number of decimal digits carried while expanding π to binary
pub const PI_PRECISION: usize = 100;
