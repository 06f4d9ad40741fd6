// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure hashing a named byte source.
///
/// Missing and unreadable sources share one signal; the underlying
/// [`io::Error`] is kept as the error source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not be opened or read
    #[error("byte source not found: {}", path.display())]
    NotFound {
        /// Path as given by the caller
        path: PathBuf,
        /// Underlying open or read error
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Path of the source that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::NotFound { path, .. } => path,
        }
    }
}

/// Malformed hex digest.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DigestParseError {
    /// Input is not 64 characters long
    #[error("hex digest must be 64 characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input in bytes
        len: usize,
    },

    /// Input contains a non-hex character
    #[error("invalid hex digest")]
    InvalidHex(#[from] hex::FromHexError),
}
