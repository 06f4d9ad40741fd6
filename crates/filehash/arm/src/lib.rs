// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 block compressor on the ARMv8 SHA2 crypto extension.
//!
//! Reachable only through an [`ArmSha2`] token. Empty on anything but
//! `aarch64`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, target_arch = "aarch64"))]
mod tests;

#[cfg(target_arch = "aarch64")]
mod sha2;

#[cfg(target_arch = "aarch64")]
pub use sha2::ArmSha2;
