// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 block compressor on the x86 SHA extensions (SHA-NI).
//!
//! The backend is only reachable through a [`ShaNi`] token, and a token only
//! exists once the `sha`, `sse2`, `ssse3` and `sse4.1` features are confirmed
//! either at build time or by the cached CPUID probe. On every other
//! architecture the crate is empty.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, any(target_arch = "x86_64", target_arch = "x86")))]
mod tests;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sha_ni;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use sha_ni::ShaNi;
