//! Pi-Sponge Library
//!
//! File digests and digest verification with the Pi-Sponge hash.
//!
//! # Overview
//!
//! Pi-Sponge is a 160-bit sponge hash built from two cross-coupled NLFSRs
//! and seeded with the binary expansion of π. It is a research
//! construction with **no security claim**: use it where an exactly
//! reproducible digest is needed, not to resist an adversary.
//!
//! This crate wraps the core algorithm with the pieces a tool needs around
//! it: reading bytes from files or stdin in bounded chunks, rendering
//! digests, and serializable reports.
//!
//! # Example
//!
//! ```rust
//! use pisponge::algorithm::{digest, verify, Verification};
//!
//! let d = digest(b"abc");
//! println!("{:#x}", d);
//!
//! assert_eq!(verify(b"abc", &d.to_binary_string()), Verification::Match);
//! ```

// Re-export the core algorithm
pub use pisponge_core as algorithm;

pub mod config;
pub mod report;
pub mod source;

// Convenience re-exports
pub use algorithm::{digest, verify, verify_digest, Digest, Hasher, Verification};
