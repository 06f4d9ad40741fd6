// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hashing readers and files.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use zeroize::Zeroizing;

use crate::context::Sha256;
use crate::digest::Digest;
use crate::error::SourceError;
use crate::options::HashOptions;

/// Digest everything `reader` yields until EOF.
///
/// Reads `options.chunk_size()` bytes at a time; interrupted reads are
/// retried. A length overflow surfaces as [`io::ErrorKind::Other`].
pub fn digest_reader<R: Read>(mut reader: R, options: &HashOptions) -> io::Result<Digest> {
    let mut ctx = Sha256::with_backend(options.resolved_backend());
    let mut buf = Zeroizing::new(vec![0u8; options.chunk_size().get()]);

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        ctx.update(&buf[..n]).map_err(io::Error::other)?;
    }

    let bytes = ctx.total_len();
    let digest = ctx.finalize().map_err(io::Error::other)?;

    tracing::trace!(bytes, backend = ctx.backend().name(), "digest complete");

    Ok(digest)
}

/// Digest the file at `path` with default [`HashOptions`].
///
/// Returns [`SourceError::NotFound`] when the file cannot be opened or
/// read.
pub fn digest_of_byte_source(path: impl AsRef<Path>) -> Result<Digest, SourceError> {
    digest_of_byte_source_with(path, &HashOptions::default())
}

/// Same as [`digest_of_byte_source`], rendered as 64 lowercase hex characters
pub fn hex_digest_of_byte_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    digest_of_byte_source(path).map(|digest| digest.to_hex())
}

/// Digest the file at `path` with explicit options
pub fn digest_of_byte_source_with(
    path: impl AsRef<Path>,
    options: &HashOptions,
) -> Result<Digest, SourceError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "cannot open byte source");
        SourceError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        chunk_size = options.chunk_size().get(),
        backend = options.resolved_backend().name(),
        "hashing byte source"
    );

    digest_reader(file, options).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "read failed");
        SourceError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })
}
