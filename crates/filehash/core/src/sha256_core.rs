// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 per FIPS 180-4 Section 5.1.1 (padding) and 6.2 (hashing)

use core::fmt;

use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, LENGTH_OFFSET, MAX_MESSAGE_LEN};
use crate::error::HashError;
use crate::traits::BlockCompressor;

/// Lifecycle of a streaming hash computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly initialized, nothing absorbed yet
    Empty,
    /// At least one `update` call applied
    Accumulating,
    /// Digest emitted; terminal until `reset`
    Finalized,
}

/// SHA-256 streaming state, generic over the compression backend.
///
/// Owns the running hash words, the partial-block buffer and the byte
/// counter. State words and buffered input are wiped on finalize, reset
/// and drop.
#[derive(Clone)]
pub struct Sha256Core<C> {
    compressor: C,

    // Hash state H(i)
    state: [u32; 8],

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,

    phase: Phase,
}

impl<C: BlockCompressor> Sha256Core<C> {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new(compressor: C) -> Self {
        Self {
            compressor,
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            phase: Phase::Empty,
        }
    }

    /// Backend driving this state
    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bytes absorbed so far
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Absorb `data`.
    ///
    /// Full blocks are compressed in input order; fewer than 64 trailing
    /// bytes stay buffered for the next call.
    pub fn update(&mut self, mut data: &[u8]) -> Result<(), HashError> {
        self.ensure_open()?;

        self.total_len = self
            .total_len
            .checked_add(data.len() as u64)
            .filter(|len| *len <= MAX_MESSAGE_LEN)
            .ok_or(HashError::MessageTooLong)?;
        self.phase = Phase::Accumulating;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_LEN {
                return Ok(());
            }

            self.compressor.compress_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Process full blocks straight from the input
        let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
        if !blocks.is_empty() {
            self.compressor.compress_blocks(&mut self.state, blocks);
        }

        // Buffer remaining
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();

        Ok(())
    }

    /// Apply padding, emit the digest and move to [`Phase::Finalized`].
    ///
    /// Message lengths with `len % 64` in `56..=63` leave no room for the
    /// length field after the `0x80` marker, so padding spills into a
    /// second block.
    pub fn finalize(&mut self) -> Result<[u8; DIGEST_LEN], HashError> {
        self.ensure_open()?;

        // Bounded by MAX_MESSAGE_LEN, cannot overflow
        let bit_len = self.total_len * 8;

        // Append 0x80 (1 bit followed by zeros)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // If not enough space for 64-bit length, pad and compress
        if self.buffer_len > LENGTH_OFFSET {
            self.buffer[self.buffer_len..].fill(0);
            self.compressor.compress_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Pad with zeros up to length field
        self.buffer[self.buffer_len..LENGTH_OFFSET].fill(0);

        // Append 64-bit length in big-endian
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        self.compressor.compress_block(&mut self.state, &self.buffer);

        // Output hash H(N)
        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }

        self.wipe();
        self.phase = Phase::Finalized;

        Ok(out)
    }

    /// Reset to H(0) for reuse, whatever the current phase
    pub fn reset(&mut self) {
        self.wipe();
        self.state = H0;
        self.total_len = 0;
        self.phase = Phase::Empty;
    }

    #[inline(always)]
    fn ensure_open(&self) -> Result<(), HashError> {
        match self.phase {
            Phase::Finalized => Err(HashError::AlreadyFinalized),
            Phase::Empty | Phase::Accumulating => Ok(()),
        }
    }
}

impl<C> Sha256Core<C> {
    fn wipe(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_len = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_total_len_for_test(&mut self, total_len: u64) {
        self.total_len = total_len;
    }

    #[cfg(test)]
    pub(crate) fn raw_parts_for_test(&self) -> (&[u32; 8], &[u8; BLOCK_LEN]) {
        (&self.state, &self.buffer)
    }
}

impl<C> Drop for Sha256Core<C> {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl<C: BlockCompressor> fmt::Debug for Sha256Core<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256Core")
            .field("backend", &self.compressor.name())
            .field("phase", &self.phase)
            .field("total_len", &self.total_len)
            .finish_non_exhaustive()
    }
}
