// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 context over the selected backend.

use core::fmt;
use std::io;

use filehash_core::{BlockCompressor, HashError, Phase, Sha256Core};

use crate::digest::Digest;
use crate::dispatch::{Backend, Transform};
#[cfg(feature = "vendor")]
use crate::vendor::VendorSha256;

#[derive(Clone)]
enum Engine {
    Native(Sha256Core<Transform>),
    #[cfg(feature = "vendor")]
    Vendor(VendorSha256),
}

/// Incremental SHA-256 hasher.
///
/// Moves from [`Phase::Empty`] to [`Phase::Accumulating`] on the first
/// [`update`](Self::update), and to [`Phase::Finalized`] on
/// [`finalize`](Self::finalize). A finalized context rejects further input
/// until [`reset`](Self::reset).
///
/// ```
/// use filehash::Sha256;
///
/// let mut ctx = Sha256::new();
/// ctx.update(b"Hello, ")?;
/// ctx.update(b"World!")?;
/// assert_eq!(
///     ctx.finalize()?.to_hex(),
///     "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
/// );
/// # Ok::<(), filehash::HashError>(())
/// ```
#[derive(Clone)]
pub struct Sha256 {
    backend: Backend,
    engine: Engine,
}

impl Sha256 {
    /// New context on the backend chosen by [`Backend::detect`]
    pub fn new() -> Self {
        Self::with_backend(Backend::detect())
    }

    /// New context pinned to `backend`
    pub fn with_backend(backend: Backend) -> Self {
        let engine = match backend.transform() {
            Some(transform) => Engine::Native(Sha256Core::new(transform)),
            #[cfg(feature = "vendor")]
            None => Engine::Vendor(VendorSha256::new()),
            #[cfg(not(feature = "vendor"))]
            None => Engine::Native(Sha256Core::new(Transform::Portable(
                filehash_rust::Portable::new(),
            ))),
        };

        Self { backend, engine }
    }

    /// One-shot digest of `data`
    pub fn digest(data: &[u8]) -> Result<Digest, HashError> {
        let mut ctx = Self::new();
        ctx.update(data)?;
        ctx.finalize()
    }

    /// Backend this context runs on
    pub fn backend(&self) -> Backend {
        self.backend
    }

    // Block transform actually driving the engine
    fn transform_name(&self) -> &'static str {
        match &self.engine {
            Engine::Native(core) => core.compressor().name(),
            #[cfg(feature = "vendor")]
            Engine::Vendor(_) => "sha2",
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        match &self.engine {
            Engine::Native(core) => core.phase(),
            #[cfg(feature = "vendor")]
            Engine::Vendor(vendor) => vendor.phase(),
        }
    }

    /// Bytes absorbed so far
    pub fn total_len(&self) -> u64 {
        match &self.engine {
            Engine::Native(core) => core.total_len(),
            #[cfg(feature = "vendor")]
            Engine::Vendor(vendor) => vendor.total_len(),
        }
    }

    /// Absorb `data`. Chunk boundaries never affect the digest.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        match &mut self.engine {
            Engine::Native(core) => core.update(data),
            #[cfg(feature = "vendor")]
            Engine::Vendor(vendor) => vendor.update(data),
        }
    }

    /// Pad, emit the digest and move to [`Phase::Finalized`]
    pub fn finalize(&mut self) -> Result<Digest, HashError> {
        let bytes = match &mut self.engine {
            Engine::Native(core) => core.finalize()?,
            #[cfg(feature = "vendor")]
            Engine::Vendor(vendor) => vendor.finalize()?,
        };

        Ok(Digest::from_bytes(bytes))
    }

    /// Back to [`Phase::Empty`] on the same backend
    pub fn reset(&mut self) {
        match &mut self.engine {
            Engine::Native(core) => core.reset(),
            #[cfg(feature = "vendor")]
            Engine::Vendor(vendor) => vendor.reset(),
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("backend", &self.backend.name())
            .field("transform", &self.transform_name())
            .field("phase", &self.phase())
            .field("total_len", &self.total_len())
            .finish_non_exhaustive()
    }
}

/// Lets `io::copy` drive the context. Misuse surfaces as
/// [`io::ErrorKind::Other`] wrapping the [`HashError`].
impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
