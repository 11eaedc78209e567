//! Candidate digest verification
//!
//! A candidate is binary if it is made only of `0`/`1` characters, otherwise
//! hex if what remains after an optional `0x`/`0X` prefix is made only of hex
//! digits. Anything else is an invalid format. Binary wins ties, so `"0101"`
//! is read as four bits, not two bytes of hex.

use crate::codec::{hex_to_bits160, strip_hex_prefix};
use crate::digest::Digest;
use crate::params::DIGEST_BITS;
use crate::sponge::digest;

/// Outcome of comparing a candidate against a freshly computed digest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verification {
    Match,
    Mismatch,
    /// Candidate is neither pure binary nor pure hex
    InvalidFormat,
}

impl Verification {
    pub fn is_match(self) -> bool {
        self == Verification::Match
    }
}

/// Text encoding a candidate digest was recognised as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateFormat {
    Binary,
    Hex,
}

/// Detect the encoding of `candidate`, or `None` if it has none
pub fn classify(candidate: &str) -> Option<CandidateFormat> {
    if !candidate.is_empty() && candidate.bytes().all(|b| b == b'0' || b == b'1') {
        return Some(CandidateFormat::Binary);
    }
    let digits = strip_hex_prefix(candidate);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Some(CandidateFormat::Hex);
    }
    None
}

/// Hash `input` and compare the result with `candidate`
pub fn verify(input: &[u8], candidate: &str) -> Verification {
    verify_digest(&digest(input), candidate)
}

/// Compare an already computed digest with `candidate`
pub fn verify_digest(computed: &Digest, candidate: &str) -> Verification {
    let detected = classify(candidate);
    let outcome = match detected {
        Some(CandidateFormat::Binary) => {
            // Left-padding never shortens, so an over-long candidate cannot match
            let padded = format!("{:0>width$}", candidate, width = DIGEST_BITS);
            if padded == computed.to_binary_string() {
                Verification::Match
            } else {
                Verification::Mismatch
            }
        }
        Some(CandidateFormat::Hex) => match hex_to_bits160(candidate) {
            Ok(bits) if bits == computed.bits() => Verification::Match,
            Ok(_) => Verification::Mismatch,
            Err(_) => Verification::InvalidFormat,
        },
        None => Verification::InvalidFormat,
    };
    log::debug!("pisponge: candidate format {:?}, outcome {:?}", detected, outcome);
    outcome
}
