// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use filehash_vectors::digest_vectors;

use crate::{Backend, Sha256};

#[test]
fn test_fips_vectors_all_backends() {
    for backend in Backend::available() {
        for vector in digest_vectors() {
            let msg = vector.input.bytes();

            let mut ctx = Sha256::with_backend(backend);
            ctx.update(&msg).expect("Failed to update(..)");
            let result = ctx.finalize().expect("Failed to finalize()");

            println!("[{backend}] '{}':", vector.name);
            println!("  Result:   {result}");
            println!("  Expected: {}", vector.expected_hex);

            assert_eq!(
                result.to_hex(),
                vector.expected_hex,
                "[{backend}] mismatch for '{}'",
                vector.name
            );
        }
    }
}

#[test]
fn test_vectors_match_reference_crate() {
    for vector in digest_vectors() {
        assert_eq!(
            super::support::reference_hex(&vector.input.bytes()),
            vector.expected_hex,
            "reference mismatch for '{}'",
            vector.name
        );
    }
}
