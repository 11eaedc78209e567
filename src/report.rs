//! Serializable hash and verification results
//!
//! These are the records printed by `--json`.

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::Verification;

/// A computed digest for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashReport {
    /// Input name (file path, or `-` for stdin)
    pub input: String,
    /// Rendered digest
    pub digest: String,
    /// Encoding of `digest`
    pub format: OutputFormat,
}

/// Verification outcome, as reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Match,
    Mismatch,
    InvalidFormat,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Match => 0,
            Outcome::Mismatch => 1,
            Outcome::InvalidFormat => 2,
        }
    }

    /// User-facing sentence describing the outcome
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Match => "Hash matched. File is authentic.",
            Outcome::Mismatch => "Hash did not match. File may be corrupted or altered.",
            Outcome::InvalidFormat => {
                "Invalid hash format. Use binary (0s and 1s) or hexadecimal (0-9, a-f)."
            }
        }
    }
}

impl From<Verification> for Outcome {
    fn from(v: Verification) -> Self {
        match v {
            Verification::Match => Outcome::Match,
            Verification::Mismatch => Outcome::Mismatch,
            Verification::InvalidFormat => Outcome::InvalidFormat,
        }
    }
}

/// Result of checking one input against a candidate digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Input name (file path, or `-` for stdin)
    pub input: String,
    /// Candidate as supplied, whitespace-trimmed
    pub candidate: String,
    pub outcome: Outcome,
    /// Freshly computed digest, hex
    pub computed: String,
}
