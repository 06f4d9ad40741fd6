// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend selection.
//!
//! Priority: accelerated when the target features are enabled at build
//! time, then accelerated when the one-time CPU probe confirms them, then
//! portable. The outcome is cached for the life of the process.

use core::fmt;
use std::sync::OnceLock;

use filehash_core::{BLOCK_LEN, BlockCompressor};
use filehash_rust::Portable;

#[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
use filehash_arm::ArmSha2;
#[cfg(all(
    filehash_accel_eligible,
    any(target_arch = "x86_64", target_arch = "x86")
))]
use filehash_x86::ShaNi;

static SELECTED: OnceLock<Backend> = OnceLock::new();

/// A SHA-256 implementation a [`crate::Sha256`] context can run on.
///
/// Accelerated variants carry their capability token, so they can only be
/// constructed on hardware that supports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Portable reference transform
    Portable,
    /// x86 SHA extensions
    #[cfg(all(
        filehash_accel_eligible,
        any(target_arch = "x86_64", target_arch = "x86")
    ))]
    ShaNi(ShaNi),
    /// ARMv8 SHA2 crypto extension
    #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
    ArmSha2(ArmSha2),
    /// RustCrypto `sha2`, with its own buffering
    #[cfg(feature = "vendor")]
    Vendor,
}

/// How [`Backend::detect`] reached its decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    #[cfg(filehash_accel_eligible)]
    Static,
    #[cfg(all(filehash_accel_eligible, feature = "runtime-detect"))]
    Runtime,
    Fallback,
}

impl Source {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            #[cfg(filehash_accel_eligible)]
            Source::Static => "static",
            #[cfg(all(filehash_accel_eligible, feature = "runtime-detect"))]
            Source::Runtime => "runtime",
            Source::Fallback => "fallback",
        }
    }
}

impl Backend {
    /// Backend chosen by the dispatch policy. Resolved once per process.
    pub fn detect() -> Backend {
        *SELECTED.get_or_init(|| {
            let (backend, source) = resolve();
            tracing::debug!(
                backend = backend.name(),
                source = source.as_str(),
                "sha-256 backend selected"
            );
            backend
        })
    }

    /// Every backend usable on this host, portable first
    pub fn available() -> Vec<Backend> {
        let mut backends = vec![Backend::Portable];

        #[cfg(all(
            filehash_accel_eligible,
            any(target_arch = "x86_64", target_arch = "x86")
        ))]
        if let Some(token) = ShaNi::detect() {
            backends.push(Backend::ShaNi(token));
        }

        #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
        if let Some(token) = ArmSha2::detect() {
            backends.push(Backend::ArmSha2(token));
        }

        #[cfg(feature = "vendor")]
        backends.push(Backend::Vendor);

        backends
    }

    /// Stable identifier used in logs and benchmark labels
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Backend::ShaNi(_) => "sha-ni",
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Backend::ArmSha2(_) => "arm-sha2",
            #[cfg(feature = "vendor")]
            Backend::Vendor => "vendor",
        }
    }

    /// Whether this backend runs on CPU SHA instructions
    pub fn is_accelerated(&self) -> bool {
        match self {
            Backend::Portable => false,
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Backend::ShaNi(_) => true,
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Backend::ArmSha2(_) => true,
            #[cfg(feature = "vendor")]
            Backend::Vendor => false,
        }
    }

    /// Block transform for the native backends; `None` for the vendor library
    pub(crate) fn transform(&self) -> Option<Transform> {
        match *self {
            Backend::Portable => Some(Transform::Portable(Portable::new())),
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Backend::ShaNi(token) => Some(Transform::ShaNi(token)),
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Backend::ArmSha2(token) => Some(Transform::ArmSha2(token)),
            #[cfg(feature = "vendor")]
            Backend::Vendor => None,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::detect()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply the selection policy without touching the process cache
pub(crate) fn resolve() -> (Backend, Source) {
    #[cfg(filehash_accel_eligible)]
    {
        if let Some(backend) = static_accelerated() {
            return (backend, Source::Static);
        }

        #[cfg(feature = "runtime-detect")]
        if let Some(backend) = runtime_accelerated() {
            return (backend, Source::Runtime);
        }
    }

    (Backend::Portable, Source::Fallback)
}

// Build-time confirmation: the token constructor only exists when the
// target features are enabled for the whole build.
#[cfg(filehash_accel_eligible)]
fn static_accelerated() -> Option<Backend> {
    #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        target_feature = "sha",
        target_feature = "sse2",
        target_feature = "ssse3",
        target_feature = "sse4.1"
    ))]
    {
        Some(Backend::ShaNi(ShaNi::new()))
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "sha2"))]
    {
        Some(Backend::ArmSha2(ArmSha2::new()))
    }

    #[cfg(not(any(
        all(
            any(target_arch = "x86_64", target_arch = "x86"),
            target_feature = "sha",
            target_feature = "sse2",
            target_feature = "ssse3",
            target_feature = "sse4.1"
        ),
        all(target_arch = "aarch64", target_feature = "sha2")
    )))]
    {
        None
    }
}

#[cfg(all(filehash_accel_eligible, feature = "runtime-detect"))]
fn runtime_accelerated() -> Option<Backend> {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        ShaNi::detect().map(Backend::ShaNi)
    }

    #[cfg(target_arch = "aarch64")]
    {
        ArmSha2::detect().map(Backend::ArmSha2)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        None
    }
}

/// Native block transform behind a [`Backend`]
#[derive(Debug, Clone, Copy)]
pub(crate) enum Transform {
    Portable(Portable),
    #[cfg(all(
        filehash_accel_eligible,
        any(target_arch = "x86_64", target_arch = "x86")
    ))]
    ShaNi(ShaNi),
    #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
    ArmSha2(ArmSha2),
}

impl BlockCompressor for Transform {
    fn name(&self) -> &'static str {
        match self {
            Transform::Portable(t) => t.name(),
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Transform::ShaNi(t) => t.name(),
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Transform::ArmSha2(t) => t.name(),
        }
    }

    #[inline]
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        match self {
            Transform::Portable(t) => t.compress_block(state, block),
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Transform::ShaNi(t) => t.compress_block(state, block),
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Transform::ArmSha2(t) => t.compress_block(state, block),
        }
    }

    #[inline]
    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        match self {
            Transform::Portable(t) => t.compress_blocks(state, blocks),
            #[cfg(all(
                filehash_accel_eligible,
                any(target_arch = "x86_64", target_arch = "x86")
            ))]
            Transform::ShaNi(t) => t.compress_blocks(state, blocks),
            #[cfg(all(filehash_accel_eligible, target_arch = "aarch64"))]
            Transform::ArmSha2(t) => t.compress_blocks(state, blocks),
        }
    }
}
