// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Recording compressor: captures every block handed to the backend so the
//! padding layout can be asserted byte for byte.

use std::cell::RefCell;
use std::vec::Vec;

use crate::consts::BLOCK_LEN;
use crate::traits::BlockCompressor;

#[derive(Default)]
pub struct RecordingCompressor {
    blocks: RefCell<Vec<[u8; BLOCK_LEN]>>,
    batched_calls: RefCell<usize>,
}

impl RecordingCompressor {
    pub fn blocks(&self) -> Vec<[u8; BLOCK_LEN]> {
        self.blocks.borrow().clone()
    }

    pub fn batched_calls(&self) -> usize {
        *self.batched_calls.borrow()
    }
}

impl BlockCompressor for RecordingCompressor {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn compress_block(&self, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        self.blocks.borrow_mut().push(*block);
        // Fold the block into the state so different inputs give different output
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            state[i % 8] = state[i % 8].rotate_left(5) ^ word;
        }
    }

    fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[[u8; BLOCK_LEN]]) {
        *self.batched_calls.borrow_mut() += 1;
        for block in blocks {
            self.compress_block(state, block);
        }
    }
}
