// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable SHA-256 compression function.
//!
//! Straight-line implementation of FIPS 180-4 Section 6.2.2 on plain `u32`
//! arithmetic. Runs on every target and is the reference every accelerated
//! backend is checked against.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod sha256;
mod word32;

pub use sha256::Portable;
