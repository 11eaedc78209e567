//! Byte sources for digest computation
//!
//! Files and stdin are streamed through the core [`Hasher`] in fixed-size
//! chunks, so memory use does not grow with input size.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::{Digest, Hasher};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read buffer size used when streaming a source
pub const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("stdin can only be read once")]
    StdinReused,
}

/// Anything that can deliver the complete contents of an input as bytes
pub trait ByteSource {
    /// Human-readable name used in reports and errors
    fn name(&self) -> String;

    /// Open a fresh reader positioned at the start of the input
    fn open(&self) -> Result<Box<dyn Read + '_>, SourceError>;
}

/// A command-line input: a file path, or `-` for stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl ByteSource for Input {
    fn name(&self) -> String {
        self.to_string()
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, SourceError> {
        match self {
            Input::File(path) => {
                let file = File::open(path).map_err(|source| SourceError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

impl ByteSource for &[u8] {
    fn name(&self) -> String {
        "<memory>".to_string()
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, SourceError> {
        Ok(Box::new(*self))
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Input::Stdin,
            path => Input::File(PathBuf::from(path)),
        })
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::File(path) => write!(f, "{}", path.display()),
            Input::Stdin => f.write_str("-"),
        }
    }
}

/// Stream a reader to the end and return its digest
pub fn digest_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Digest> {
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buf[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    tracing::trace!(bits = hasher.bits_absorbed(), "input exhausted");
    Ok(hasher.finalize())
}

/// Digest the full contents of `source`
pub fn digest_source(source: &dyn ByteSource) -> Result<Digest, SourceError> {
    let name = source.name();
    let mut reader = source.open()?;
    let digest = digest_reader(&mut reader).map_err(|source| SourceError::Read {
        name: name.clone(),
        source,
    })?;

    tracing::debug!(source = %name, digest = %digest, "digest computed");
    Ok(digest)
}

/// Digest several inputs, results in input order
///
/// Files are hashed in parallel when the `parallel` feature is enabled.
/// Only the first `-` reads stdin; later ones fail with
/// [`SourceError::StdinReused`].
pub fn digest_inputs(inputs: &[Input]) -> Vec<Result<Digest, SourceError>> {
    let reused = reused_stdin(inputs);
    let run = |(input, reused): (&Input, &bool)| {
        if *reused {
            Err(SourceError::StdinReused)
        } else {
            digest_source(input)
        }
    };

    #[cfg(feature = "parallel")]
    {
        inputs.par_iter().zip(reused.par_iter()).map(run).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().zip(reused.iter()).map(run).collect()
    }
}

/// Flags every `-` after the first one
fn reused_stdin(inputs: &[Input]) -> Vec<bool> {
    let mut seen = false;
    inputs
        .iter()
        .map(|input| match input {
            Input::Stdin if seen => true,
            Input::Stdin => {
                seen = true;
                false
            }
            Input::File(_) => false,
        })
        .collect()
}
