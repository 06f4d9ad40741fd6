// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digests of files and byte streams.
//!
//! Blocks are compressed by the fastest backend the host supports:
//!
//! - SHA-NI on `x86` / `x86_64`
//! - the ARMv8 SHA2 crypto extension on `aarch64`
//! - a portable transform everywhere else
//!
//! Accelerated backends are used when the target features are enabled at
//! build time, or when a one-time CPU probe confirms them. Every backend
//! produces bit-identical digests.
//!
//! # Features
//!
//! - `runtime-detect` (default): allow the CPU probe to pick an accelerated backend
//! - `pure-rust`: always use the portable transform
//! - `vendor`: expose `Backend::Vendor` (RustCrypto `sha2`)
//!
//! # Example
//!
//! ```no_run
//! let hex = filehash::hex_digest_of_byte_source("Cargo.toml")?;
//! assert_eq!(hex.len(), 64);
//! # Ok::<(), filehash::SourceError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod context;
mod digest;
mod dispatch;
mod error;
mod options;
mod source;
#[cfg(feature = "vendor")]
mod vendor;

pub use context::Sha256;
pub use digest::{Digest, HEX_LEN};
pub use dispatch::Backend;
pub use error::{DigestParseError, SourceError};
pub use filehash_core::{BLOCK_LEN, DIGEST_LEN, HashError, Phase};
pub use options::{DEFAULT_CHUNK_SIZE, HashOptions};
pub use source::{
    digest_of_byte_source, digest_of_byte_source_with, digest_reader, hex_digest_of_byte_source,
};
