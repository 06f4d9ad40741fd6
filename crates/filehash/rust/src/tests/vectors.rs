// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use filehash_vectors::{run_chunking_invariance, run_compress_vectors, run_digest_vectors};

use crate::Portable;

#[test]
fn test_portable_compress_vectors() {
    run_compress_vectors(&Portable);
}

#[test]
fn test_portable_digest_vectors() {
    run_digest_vectors(&Portable);
}

#[test]
fn test_portable_chunking_invariance() {
    run_chunking_invariance(&Portable);
}
