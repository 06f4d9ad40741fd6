// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::num::NonZeroUsize;

use crate::dispatch::Backend;

/// Read buffer size used when none is configured (64 KiB)
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(64 * 1024) {
    Some(size) => size,
    None => panic!("default chunk size must be non-zero"),
};

/// Settings for hashing a reader or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    chunk_size: NonZeroUsize,
    backend: Option<Backend>,
}

impl HashOptions {
    /// 64 KiB reads on the dispatch policy's backend
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            backend: None,
        }
    }

    /// Bytes requested per read call
    pub const fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Pin the backend instead of using [`Backend::detect`]
    pub const fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Configured read size
    pub const fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Configured backend override, if any
    pub const fn backend(&self) -> Option<Backend> {
        self.backend
    }

    /// Backend that will actually run
    pub fn resolved_backend(&self) -> Backend {
        self.backend.unwrap_or_else(Backend::detect)
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::new()
    }
}
