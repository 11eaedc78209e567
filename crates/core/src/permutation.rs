//! NLFSR state update for Pi-Sponge
//!
//! Two shift registers, `P` (80 bits) and `Q` (81 bits), each packed into a
//! `u128` with register index `i` at integer bit `i`. Shifting the register
//! left by one position (dropping index 0) is a right shift of the integer.
//!
//! Per round:
//!
//! ```text
//! Pf = P0·P11 ⊕ P0·P55 ⊕ P11·Q23 ⊕ Q23·P55 ⊕ Q23 ⊕ P55 ⊕ 1
//! Qf = Q25·P48 ⊕ Q25·Q41 ⊕ Q0·P48 ⊕ Q0·Q41 ⊕ Q25 ⊕ Q41
//! Lf = P1 ⊕ Q1 ⊕ P50
//! P  = (P << 1) | (Pf ⊕ Lf)
//! Q  = (Q << 1) | (Qf ⊕ Lf)
//! ```

use crate::params::{P_BITS, Q_BITS, STATE_BITS};
use crate::seed::PI_SEED;

/// Mask of the live bits of `P`
const P_MASK: u128 = (1 << P_BITS) - 1;

/// Mask of the live bits of `Q`
const Q_MASK: u128 = (1 << Q_BITS) - 1;

/// Position of `Q`'s last bit (state index 160) inside the packed word
const Q_TAIL: u32 = (Q_BITS - 1) as u32;

/// Position of `P`'s last bit (state index 79) inside the packed word
const P_TAIL: u32 = (P_BITS - 1) as u32;

/// 161-bit sponge state
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    p: u128,
    q: u128,
}

impl State {
    /// State initialised from the first 161 fractional bits of π
    pub const fn seeded() -> Self {
        Self::from_bits(&PI_SEED)
    }

    /// Build a state from 161 bits, index 0 = `P0`, index 160 = `Q80`
    pub const fn from_bits(bits: &[bool; STATE_BITS]) -> Self {
        let mut p = 0u128;
        let mut q = 0u128;
        let mut i = 0;
        while i < STATE_BITS {
            if bits[i] {
                if i < P_BITS {
                    p |= 1 << i;
                } else {
                    q |= 1 << (i - P_BITS);
                }
            }
            i += 1;
        }
        Self { p, q }
    }

    /// Unpack into 161 bits, index 0 = `P0`
    pub fn to_bits(&self) -> [bool; STATE_BITS] {
        let mut bits = [false; STATE_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.bit(i);
        }
        bits
    }

    /// Read state bit `index` (0..161)
    ///
    /// # Panics
    ///
    /// Panics if `index >= STATE_BITS`.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < STATE_BITS, "state index {index} out of range");
        if index < P_BITS {
            tap(self.p, index as u32) == 1
        } else {
            tap(self.q, (index - P_BITS) as u32) == 1
        }
    }

    /// XOR a message bit into state index 160
    #[inline(always)]
    pub fn inject(&mut self, bit: bool) {
        self.q ^= (bit as u128) << Q_TAIL;
    }

    /// Current value of state index 160
    #[inline(always)]
    pub fn output_bit(&self) -> bool {
        tap(self.q, Q_TAIL) == 1
    }

    /// Apply the round function `rounds` times
    #[inline]
    pub fn advance(&mut self, rounds: u32) {
        let (mut p, mut q) = (self.p, self.q);
        for _ in 0..rounds {
            (p, q) = round(p, q);
        }
        debug_assert!(p & !P_MASK == 0 && q & !Q_MASK == 0);
        self.p = p;
        self.q = q;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::seeded()
    }
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State")
            .field("p", &format_args!("{:020x}", self.p))
            .field("q", &format_args!("{:021x}", self.q))
            .finish()
    }
}

/// Advance `state` by `rounds` rounds; `rounds == 0` leaves it untouched
#[inline]
pub fn advance(state: &mut State, rounds: u32) {
    state.advance(rounds);
}

/// Bit `i` of a packed register, as 0 or 1
#[inline(always)]
fn tap(reg: u128, i: u32) -> u128 {
    (reg >> i) & 1
}

/// One round of the coupled NLFSR pair
#[inline(always)]
fn round(p: u128, q: u128) -> (u128, u128) {
    let (p0, p1, p11, p48, p50, p55) = (
        tap(p, 0),
        tap(p, 1),
        tap(p, 11),
        tap(p, 48),
        tap(p, 50),
        tap(p, 55),
    );
    let (q0, q1, q23, q25, q41) = (tap(q, 0), tap(q, 1), tap(q, 23), tap(q, 25), tap(q, 41));

    let pf = (p0 & p11) ^ (p0 & p55) ^ (p11 & q23) ^ (q23 & p55) ^ q23 ^ p55 ^ 1;
    let qf = (q25 & p48) ^ (q25 & q41) ^ (q0 & p48) ^ (q0 & q41) ^ q25 ^ q41;
    let lf = p1 ^ q1 ^ p50;

    ((p >> 1) | ((pf ^ lf) << P_TAIL), (q >> 1) | ((qf ^ lf) << Q_TAIL))
}
