// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, K256, LENGTH_OFFSET, MAX_MESSAGE_LEN};

#[test]
fn test_sizes() {
    assert_eq!(BLOCK_LEN, 64);
    assert_eq!(DIGEST_LEN, 32);
    assert_eq!(LENGTH_OFFSET, 56);
}

#[test]
fn test_max_message_len_bit_length_fits_u64() {
    assert!(MAX_MESSAGE_LEN.checked_mul(8).is_some());
    assert!((MAX_MESSAGE_LEN + 1).checked_mul(8).is_none());
}

#[test]
fn test_h0_matches_square_roots_of_primes() {
    // frac(sqrt(p)) * 2^32 for the first 8 primes
    let primes = [2u32, 3, 5, 7, 11, 13, 17, 19];
    for (p, h) in primes.iter().zip(H0.iter()) {
        let root = f64::from(*p).sqrt();
        let frac = root - root.floor();
        assert_eq!((frac * 4294967296.0) as u32, *h, "H0 mismatch for prime {p}");
    }
}

#[test]
fn test_k256_endpoints() {
    assert_eq!(K256[0], 0x428a2f98);
    assert_eq!(K256[15], 0xc19bf174);
    assert_eq!(K256[63], 0xc67178f2);
}
