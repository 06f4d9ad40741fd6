// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for the SHA-256 backends.
//!
//! - [`consts`]: initial hash value and round constants (FIPS 180-4 Section 4.2.2, 5.3.3)
//! - [`BlockCompressor`]: the one capability every backend implements
//! - [`Sha256Core`]: block buffering, padding, length encoding and the
//!   Empty / Accumulating / Finalized state machine, generic over the compressor
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod consts;

mod error;
mod sha256_core;
mod traits;

pub use consts::{BLOCK_LEN, DIGEST_LEN, H0, K256, MAX_MESSAGE_LEN};
pub use error::HashError;
pub use sha256_core::{Phase, Sha256Core};
pub use traits::BlockCompressor;
