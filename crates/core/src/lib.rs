//! # Pi-Sponge Core Algorithm
//!
//! A 160-bit sponge hash whose permutation is a pair of cross-coupled
//! nonlinear feedback shift registers (NLFSRs), seeded with the binary
//! expansion of π.
//!
//! **No security claim.** The construction comes from a research paper and
//! has not been vetted for collision or preimage resistance. Treat it as a
//! deterministic bit transform that must be reproduced exactly.
//!
//! ## Construction
//!
//! - 161-bit state split into `P` (80 bits) and `Q` (81 bits)
//! - Initial state: first 161 fractional bits of π
//! - Absorb: each message bit is XORed into state bit 160, then the state is
//!   advanced 324 rounds (first and last bit) or 162 rounds (interior bits)
//! - Squeeze: 160 × (advance one round, read state bit 160)
//!
//! Message bits are taken most-significant-bit first within each byte.
//!
//! ## Example
//!
//! ```rust
//! use pisponge_core::{Hasher, Verification, digest, verify};
//!
//! // Single-shot hashing
//! let d = digest(b"abc");
//! assert_eq!(d.to_hex(), "9daf92bd082555795685fef394783d2ea1be6b59");
//!
//! // Streaming hashing gives the same result for any chunking
//! let mut hasher = Hasher::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), d);
//!
//! // Verify a candidate given as hex or binary text
//! assert_eq!(verify(b"abc", &d.to_hex()), Verification::Match);
//! assert_eq!(verify(b"abc", "not-a-hash!!"), Verification::InvalidFormat);
//! ```

mod codec;
mod digest;
mod params;
mod permutation;
mod seed;
mod sponge;
mod verify;

#[cfg(feature = "std")]
pub mod ffi;

pub use codec::{CodecError, bits_to_binary_string, hex_to_bits160, strip_hex_prefix, to_hex};
pub use digest::Digest;
pub use params::*;
pub use permutation::{State, advance};
pub use seed::{PI_SEED, pi_seed};
pub use sponge::{Hasher, digest};
pub use verify::{CandidateFormat, Verification, classify, verify, verify_digest};

#[cfg(feature = "parallel")]
pub use sponge::digest_many;

#[cfg(test)]
mod tests;
