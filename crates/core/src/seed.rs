//! Initial state derivation from the binary expansion of π
//!
//! The decimal fraction is doubled by digit-wise long multiplication; the
//! carry out of the most significant digit is the next binary digit. The
//! whole expansion runs at compile time.

use crate::params::{PI_FRACTION, PI_PRECISION, STATE_BITS};

/// Working width of the decimal fraction, right-padded with zeros
const DIGITS: usize = if PI_FRACTION.len() > PI_PRECISION {
    PI_FRACTION.len()
} else {
    PI_PRECISION
};

/// The first 161 fractional bits of π, index 0 = most significant
pub const PI_SEED: [bool; STATE_BITS] = pi_seed();

/// Expand [`PI_FRACTION`] into its first [`STATE_BITS`] binary digits.
pub const fn pi_seed() -> [bool; STATE_BITS] {
    let src = PI_FRACTION.as_bytes();
    let mut digits = [0u8; DIGITS];
    let mut i = 0;
    while i < src.len() {
        digits[i] = src[i] - b'0';
        i += 1;
    }

    let mut bits = [false; STATE_BITS];
    let mut n = 0;
    while n < STATE_BITS {
        // Double the fraction, least significant digit first
        let mut carry = 0u8;
        let mut j = DIGITS;
        while j > 0 {
            j -= 1;
            let doubled = digits[j] * 2 + carry;
            digits[j] = doubled % 10;
            carry = doubled / 10;
        }
        bits[n] = carry == 1;
        n += 1;
    }
    bits
}
