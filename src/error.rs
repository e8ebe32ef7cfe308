//! Crate-level error types.

use std::fmt;

/// Raised by a [`crate::progress::ProgressSink`] to abort an in-progress
/// mesh build. The generator propagates it without catching; no partial
/// mesh is returned on that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationAborted;

impl fmt::Display for GenerationAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh generation aborted by progress sink")
    }
}

impl std::error::Error for GenerationAborted {}

/// Errors produced by the polywedge crate.
#[derive(Debug)]
pub enum PolywedgeError {
    /// Mesh generation was aborted cooperatively.
    Aborted(GenerationAborted),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PolywedgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PolywedgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Aborted(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<GenerationAborted> for PolywedgeError {
    fn from(e: GenerationAborted) -> Self {
        Self::Aborted(e)
    }
}

impl From<std::io::Error> for PolywedgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
