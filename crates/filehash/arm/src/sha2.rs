// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ARMv8 SHA2 compression: state kept as ABCD / EFGH, four rounds per
//! `vsha256hq_u32` + `vsha256h2q_u32` pair.

use core::arch::aarch64::*;

use filehash_core::{BLOCK_LEN, BlockCompressor, K256};

cpufeatures::new!(arm_sha2_detection, "sha2");

/// Proof that the running CPU implements the ARMv8 SHA2 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmSha2 {
    _private: (),
}

impl ArmSha2 {
    /// Runtime probe, cached process-wide after the first call
    #[inline]
    pub fn detect() -> Option<Self> {
        arm_sha2_detection::get().then_some(Self { _private: () })
    }

    /// Build-time confirmation (e.g. `-C target-cpu=apple-m1`)
    #[cfg(target_feature = "sha2")]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Whether [`ArmSha2::new`] exists on this build
    pub const fn is_statically_enabled() -> bool {
        cfg!(target_feature = "sha2")
    }
}

impl BlockCompressor for ArmSha2 {
    fn name(&self) -> &'static str {
        "arm-sha2"
    }

    #[inline]
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        self.compress_blocks(state, core::slice::from_ref(block));
    }

    #[inline]
    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        // SAFETY: `self` exists only after the sha2 feature was confirmed
        unsafe { compress_blocks_arm_sha2(state, blocks) }
    }
}

/// # Safety
///
/// The CPU must support the `sha2` crypto extension.
#[target_feature(enable = "sha2")]
unsafe fn compress_blocks_arm_sha2(state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
    // SAFETY: vector loads/stores stay within `state`, `blocks` and `K256`
    unsafe {
        let mut abcd = vld1q_u32(state.as_ptr());
        let mut efgh = vld1q_u32(state.as_ptr().add(4));

        for block in blocks {
            let abcd_save = abcd;
            let efgh_save = efgh;

            // Byte-reverse each word: message words are big-endian
            let src = block.as_ptr();
            let mut w = [
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(src))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(src.add(16)))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(src.add(32)))),
                vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(src.add(48)))),
            ];

            // Slot i % 4 holds W[4i-16..4i-12] until it is replaced by W[4i..4i+4]
            for i in 0..16 {
                if i >= 4 {
                    w[i % 4] = vsha256su1q_u32(
                        vsha256su0q_u32(w[i % 4], w[(i + 1) % 4]),
                        w[(i + 2) % 4],
                        w[(i + 3) % 4],
                    );
                }
                let wk = vaddq_u32(w[i % 4], vld1q_u32(K256.as_ptr().add(4 * i)));
                let abcd_prev = abcd;
                abcd = vsha256hq_u32(abcd, efgh, wk);
                efgh = vsha256h2q_u32(efgh, abcd_prev, wk);
            }

            abcd = vaddq_u32(abcd, abcd_save);
            efgh = vaddq_u32(efgh, efgh_save);
        }

        vst1q_u32(state.as_mut_ptr(), abcd);
        vst1q_u32(state.as_mut_ptr().add(4), efgh);
    }
}
