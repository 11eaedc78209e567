//! Output configuration
//!
//! Controls how digests are rendered by the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Digest;

/// Digest text encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 40 lowercase hex digits
    #[default]
    Hex,
    /// 160 characters of 0/1
    Binary,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Binary => "binary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "binary" | "bin" => Ok(OutputFormat::Binary),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Rendering options for digest output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Text encoding of printed digests
    pub format: OutputFormat,
    /// Prefix hex digests with `0x`
    pub prefix: bool,
    /// Emit one JSON object per line instead of plain text
    pub json: bool,
}

impl OutputConfig {
    /// Render a digest according to this configuration
    pub fn render(&self, digest: &Digest) -> String {
        match self.format {
            OutputFormat::Hex if self.prefix => format!("{digest:#x}"),
            OutputFormat::Hex => digest.to_hex(),
            OutputFormat::Binary => digest.to_binary_string(),
        }
    }
}
