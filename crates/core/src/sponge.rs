//! Sponge absorb/squeeze orchestration
//!
//! Round counts depend on a bit's position in the message:
//! - empty message: one 324-round pass, nothing injected
//! - first bit: 324 rounds
//! - interior bits: 162 rounds each
//! - last bit (messages of 2+ bits): 324 rounds
//!
//! A single-bit message gets only the first-bit pass. This asymmetry is part
//! of the construction and every published digest depends on it.
//!
//! The streaming [`Hasher`] holds back the most recent bit until it knows
//! whether another follows, so chunking never changes the round policy.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::digest::Digest;
use crate::params::*;
use crate::permutation::State;

/// Incremental Pi-Sponge hasher
///
/// Memory use is constant regardless of message length.
#[derive(Clone, Debug)]
pub struct Hasher {
    state: State,
    /// Most recent message bit, not yet absorbed
    pending: Option<bool>,
    /// Number of bits already injected and permuted
    absorbed: u64,
}

impl Hasher {
    /// Create a hasher starting from the π seed
    pub fn new() -> Self {
        Self {
            state: State::seeded(),
            pending: None,
            absorbed: 0,
        }
    }

    /// Absorb more message bytes, most-significant bit first
    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        for &byte in bytes {
            for shift in (0..8).rev() {
                let bit = (byte >> shift) & 1 == 1;
                if let Some(prev) = self.pending.replace(bit) {
                    let rounds = if self.absorbed == 0 {
                        FIRST_ROUNDS
                    } else {
                        INTERIOR_ROUNDS
                    };
                    self.absorb(prev, rounds);
                }
            }
        }
        self
    }

    /// Number of message bits seen so far
    pub fn bits_absorbed(&self) -> u64 {
        self.absorbed + self.pending.is_some() as u64
    }

    /// Finish absorption and squeeze the 160-bit digest
    pub fn finalize(mut self) -> Digest {
        match self.pending.take() {
            None => self.state.advance(EMPTY_ROUNDS),
            // Only bit of a 1-bit message: first-bit pass, no last-bit pass
            Some(bit) if self.absorbed == 0 => self.absorb(bit, FIRST_ROUNDS),
            Some(bit) => self.absorb(bit, LAST_ROUNDS),
        }
        log::trace!("pisponge: absorbed {} message bits", self.absorbed);

        let mut bits = [false; DIGEST_BITS];
        for bit in bits.iter_mut() {
            self.state.advance(SQUEEZE_ROUNDS);
            *bit = self.state.output_bit();
        }
        Digest::from_bits(&bits)
    }

    /// Reset to the seeded state, discarding any absorbed input
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline(always)]
    fn absorb(&mut self, bit: bool, rounds: u32) {
        self.state.inject(bit);
        self.state.advance(rounds);
        self.absorbed += 1;
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for single-shot hashing
pub fn digest(input: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Digest independent inputs in parallel, results in input order
#[cfg(feature = "parallel")]
pub fn digest_many<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    inputs.par_iter().map(|input| digest(input.as_ref())).collect()
}
