// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block compressor trait.

use crate::consts::BLOCK_LEN;

/// SHA-256 compression function backend.
///
/// Implementors advance the eight-word state by one 64-byte block. Every
/// implementation must produce bit-identical state for the same inputs; the
/// portable backend is the reference.
pub trait BlockCompressor {
    /// Short stable identifier used in logs and benchmark labels.
    fn name(&self) -> &'static str;

    /// Updates `state` with a single 512-bit message block.
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]);

    /// Updates `state` with consecutive blocks, in order.
    ///
    /// Backends that keep the state in vector registers override this to
    /// avoid a load/store round trip per block.
    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        for block in blocks {
            self.compress_block(state, block);
        }
    }
}

impl<C: BlockCompressor + ?Sized> BlockCompressor for &C {
    #[inline(always)]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline(always)]
    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        (**self).compress_block(state, block);
    }

    #[inline(always)]
    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        (**self).compress_blocks(state, blocks);
    }
}
