// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-NI compression: two 4-word halves (ABEF / CDGH) driven by
//! `sha256rnds2`, schedule expanded four words at a time with
//! `sha256msg1` / `sha256msg2`.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use filehash_core::{BLOCK_LEN, BlockCompressor, K256};

cpufeatures::new!(sha_ni_detection, "sha", "sse2", "ssse3", "sse4.1");

/// Proof that the running CPU implements the SHA extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaNi {
    _private: (),
}

impl ShaNi {
    /// Runtime probe. The CPUID result is cached process-wide after the
    /// first call.
    #[inline]
    pub fn detect() -> Option<Self> {
        sha_ni_detection::get().then_some(Self { _private: () })
    }

    /// Build-time confirmation: only compiled when every required target
    /// feature is enabled for the whole crate graph.
    #[cfg(all(
        target_feature = "sha",
        target_feature = "sse2",
        target_feature = "ssse3",
        target_feature = "sse4.1"
    ))]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Whether [`ShaNi::new`] exists on this build
    pub const fn is_statically_enabled() -> bool {
        cfg!(all(
            target_feature = "sha",
            target_feature = "sse2",
            target_feature = "ssse3",
            target_feature = "sse4.1"
        ))
    }
}

impl BlockCompressor for ShaNi {
    fn name(&self) -> &'static str {
        "sha-ni"
    }

    #[inline]
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        self.compress_blocks(state, core::slice::from_ref(block));
    }

    #[inline]
    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        // SAFETY: `self` exists only after the required features were confirmed
        unsafe { compress_blocks_sha_ni(state, blocks) }
    }
}

// Four rounds: lower two words of W+K through CDGH, upper two through ABEF
macro_rules! rounds4 {
    ($abef:ident, $cdgh:ident, $wk:expr) => {{
        let wk = $wk;
        $cdgh = _mm_sha256rnds2_epu32($cdgh, $abef, wk);
        $abef = _mm_sha256rnds2_epu32($abef, $cdgh, _mm_shuffle_epi32(wk, 0x0E));
    }};
}

// W[t..t+4] from W[t-16..t]
macro_rules! schedule {
    ($w0:expr, $w1:expr, $w2:expr, $w3:expr) => {
        _mm_sha256msg2_epu32(
            _mm_add_epi32(_mm_sha256msg1_epu32($w0, $w1), _mm_alignr_epi8($w3, $w2, 4)),
            $w3,
        )
    };
}

/// # Safety
///
/// The CPU must support `sha`, `sse2`, `ssse3` and `sse4.1`.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn compress_blocks_sha_ni(state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
    // SAFETY: unaligned loads/stores stay within `state`, `blocks` and `K256`
    unsafe {
        // Big-endian word byte swap
        let be_mask = _mm_set_epi64x(
            0x0c0d_0e0f_0809_0a0b_u64 as i64,
            0x0405_0607_0001_0203_u64 as i64,
        );

        // DCBA / HGFE -> ABEF / CDGH
        let dcba = _mm_loadu_si128(state.as_ptr().cast());
        let hgfe = _mm_loadu_si128(state.as_ptr().add(4).cast());
        let cdab = _mm_shuffle_epi32(dcba, 0xB1);
        let efgh = _mm_shuffle_epi32(hgfe, 0x1B);
        let mut abef = _mm_alignr_epi8(cdab, efgh, 8);
        let mut cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);

        for block in blocks {
            let abef_save = abef;
            let cdgh_save = cdgh;

            let src = block.as_ptr().cast::<__m128i>();
            let mut w = [
                _mm_shuffle_epi8(_mm_loadu_si128(src), be_mask),
                _mm_shuffle_epi8(_mm_loadu_si128(src.add(1)), be_mask),
                _mm_shuffle_epi8(_mm_loadu_si128(src.add(2)), be_mask),
                _mm_shuffle_epi8(_mm_loadu_si128(src.add(3)), be_mask),
            ];

            // Slot i % 4 holds W[4i-16..4i-12] until it is replaced by W[4i..4i+4]
            for i in 0..16 {
                if i >= 4 {
                    w[i % 4] = schedule!(w[i % 4], w[(i + 1) % 4], w[(i + 2) % 4], w[(i + 3) % 4]);
                }
                let k = _mm_loadu_si128(K256.as_ptr().add(4 * i).cast());
                rounds4!(abef, cdgh, _mm_add_epi32(w[i % 4], k));
            }

            abef = _mm_add_epi32(abef, abef_save);
            cdgh = _mm_add_epi32(cdgh, cdgh_save);
        }

        // ABEF / CDGH -> DCBA / HGFE
        let feba = _mm_shuffle_epi32(abef, 0x1B);
        let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
        let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
        let hgfe = _mm_alignr_epi8(dchg, feba, 8);

        _mm_storeu_si128(state.as_mut_ptr().cast(), dcba);
        _mm_storeu_si128(state.as_mut_ptr().add(4).cast(), hgfe);
    }
}
