// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression per FIPS 180-4 Section 6.2.2

use zeroize::Zeroize;

use filehash_core::{BLOCK_LEN, BlockCompressor, K256};

use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Portable backend. Always available.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Portable;

impl Portable {
    /// Create the portable backend
    pub const fn new() -> Self {
        Self
    }
}

impl BlockCompressor for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    #[inline]
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        compress(state, block);
    }
}

/// Updates `h` with one 512-bit message block.
fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    // Step 1: Prepare message schedule W[0..63]
    let mut w = [0u32; 64];

    // W[0..15] from block (big-endian)
    let (words, _) = block.as_chunks::<4>();
    for (wt, bytes) in w.iter_mut().zip(words.iter()) {
        *wt = u32::from_be_bytes(*bytes);
    }

    // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Step 2: Initialize working variables with H(i-1)
    let mut wv = *h;

    // Step 3: 64 rounds
    for (k, wt) in K256.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, hh] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, vi) in h.iter_mut().zip(wv.iter()) {
        *hi = hi.wrapping_add(*vi);
    }

    w.zeroize();
    wv.zeroize();
}

