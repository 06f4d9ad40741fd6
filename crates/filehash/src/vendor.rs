// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RustCrypto `sha2` behind the same lifecycle rules as the native core.

use sha2::Digest as _;

use filehash_core::{DIGEST_LEN, HashError, MAX_MESSAGE_LEN, Phase};

#[derive(Clone)]
pub(crate) struct VendorSha256 {
    hasher: sha2::Sha256,
    total_len: u64,
    phase: Phase,
}

impl VendorSha256 {
    pub(crate) fn new() -> Self {
        Self {
            hasher: sha2::Sha256::new(),
            total_len: 0,
            phase: Phase::Empty,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn total_len(&self) -> u64 {
        self.total_len
    }

    pub(crate) fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.phase == Phase::Finalized {
            return Err(HashError::AlreadyFinalized);
        }

        self.total_len = self
            .total_len
            .checked_add(data.len() as u64)
            .filter(|len| *len <= MAX_MESSAGE_LEN)
            .ok_or(HashError::MessageTooLong)?;
        self.phase = Phase::Accumulating;
        self.hasher.update(data);

        Ok(())
    }

    pub(crate) fn finalize(&mut self) -> Result<[u8; DIGEST_LEN], HashError> {
        if self.phase == Phase::Finalized {
            return Err(HashError::AlreadyFinalized);
        }

        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.hasher.finalize_reset());
        self.phase = Phase::Finalized;

        Ok(out)
    }

    pub(crate) fn reset(&mut self) {
        sha2::Digest::reset(&mut self.hasher);
        self.total_len = 0;
        self.phase = Phase::Empty;
    }
}
