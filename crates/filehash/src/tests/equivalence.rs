// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Every available backend must agree with the portable transform and with
// RustCrypto `sha2` on the same input.

use proptest::prelude::*;

use crate::{Backend, Digest, Sha256};

use super::support::{pattern, reference_hex};

fn hash_chunked(backend: Backend, data: &[u8], chunk: usize) -> Digest {
    let mut ctx = Sha256::with_backend(backend);
    for piece in data.chunks(chunk.max(1)) {
        ctx.update(piece).expect("Failed to update(..)");
    }
    ctx.finalize().expect("Failed to finalize()")
}

fn hash_split(backend: Backend, data: &[u8], cuts: &[usize]) -> Digest {
    let mut ctx = Sha256::with_backend(backend);
    let mut start = 0;
    for &cut in cuts {
        let cut = cut.clamp(start, data.len());
        ctx.update(&data[start..cut]).expect("Failed to update(..)");
        start = cut;
    }
    ctx.update(&data[start..]).expect("Failed to update(..)");
    ctx.finalize().expect("Failed to finalize()")
}

// =============================================================================
// deterministic
// =============================================================================

#[test]
fn test_backends_agree_on_block_boundaries() {
    // 0, 1 and 2 blocks, plus fractional remainders on either side
    let lengths = [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 127, 128, 129, 191, 192];

    for len in lengths {
        let data = pattern(len);
        let expected = reference_hex(&data);

        for backend in Backend::available() {
            assert_eq!(
                hash_chunked(backend, &data, data.len()).to_hex(),
                expected,
                "backend={backend} len={len}"
            );
        }
    }
}

#[test]
fn test_backends_agree_on_every_length_up_to_200() {
    for len in 0..=200usize {
        let data = pattern(len);
        let expected = hash_chunked(Backend::Portable, &data, data.len());

        for backend in Backend::available() {
            assert_eq!(
                hash_chunked(backend, &data, 7),
                expected,
                "backend={backend} len={len}"
            );
        }
    }
}

#[test]
fn test_single_byte_chunks() {
    let data = pattern(300);
    let expected = reference_hex(&data);

    for backend in Backend::available() {
        assert_eq!(hash_chunked(backend, &data, 1).to_hex(), expected, "backend={backend}");
    }
}

#[test]
fn test_one_mib_of_a() {
    let data = vec![0x41u8; 1 << 20];
    let expected = reference_hex(&data);

    for backend in Backend::available() {
        let hex = hash_chunked(backend, &data, 64 * 1024).to_hex();

        assert_eq!(hex.len(), 64);
        assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        assert_eq!(hex, expected, "backend={backend}");
    }
}

// =============================================================================
// proptest
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_chunking_invariance(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        mut cuts in proptest::collection::vec(0usize..1024, 0..8),
    ) {
        cuts.sort_unstable();
        let expected = reference_hex(&data);

        for backend in Backend::available() {
            prop_assert_eq!(hash_split(backend, &data, &cuts).to_hex(), expected.clone());
        }
    }

    #[test]
    fn prop_backends_agree(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        chunk in 1usize..300,
    ) {
        let expected = hash_chunked(Backend::Portable, &data, data.len());

        for backend in Backend::available() {
            prop_assert_eq!(hash_chunked(backend, &data, chunk), expected);
        }
    }
}
