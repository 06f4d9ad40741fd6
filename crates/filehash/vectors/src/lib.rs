// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Conformance vectors and runners shared by every SHA-256 backend.
//!
//! Each backend crate calls the runners from its own tests, so a new
//! compressor only has to pass the same table the portable one does.
//!
//! References:
//! - FIPS 180-4 Section 5.1.1 and the NIST SHA-256 example values
//!   <https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values>

mod compress;
mod digest;

pub use compress::{CompressVector, compress_vectors, run_compress_vectors};
pub use digest::{
    DigestVector, Input, digest_vectors, hash_with, run_chunking_invariance, run_digest_vectors,
};
