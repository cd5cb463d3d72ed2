//! Error types for the lockfile merger.
//!
//! The merger returns the typed [`MergeError`]; the command layer converts it
//! to [`anyhow::Error`] via `?` and adds file-path context for I/O failures.
//! Usage errors are reported by `clap` before any merging starts.
//!
//! # Error hierarchy
//!
//! ```text
//! MergeError
//! ├── MalformedDocument { input, source } — an input is not a valid lockfile object
//! └── Serialize(source)                   — the merged document could not be encoded
//! ```

use std::fmt;

use thiserror::Error;

use crate::platform::Os;

/// Identifies which of the merge inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The base lockfile supplying every key other than `moduleExtensions`.
    Base,
    /// The lockfile produced on the given operating system.
    Platform(Os),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Platform(os) => write!(f, "{os}"),
        }
    }
}

/// Errors produced while merging lockfiles.
#[derive(Error, Debug)]
pub enum MergeError {
    /// An input could not be parsed as a lockfile JSON object.
    #[error("error processing {input} lockfile: {source}")]
    MalformedDocument {
        /// Which input failed to parse.
        input: Input,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The merged document could not be serialized.
    #[error("error serializing merged lockfile: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl MergeError {
    /// Build a [`MergeError::MalformedDocument`] for `input`.
    pub(crate) const fn malformed(input: Input, source: serde_json::Error) -> Self {
        Self::MalformedDocument { input, source }
    }

    /// The input an error refers to, if any.
    #[must_use]
    pub const fn input(&self) -> Option<Input> {
        match self {
            Self::MalformedDocument { input, .. } => Some(*input),
            Self::Serialize(_) => None,
        }
    }
}
