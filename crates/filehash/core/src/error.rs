// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Streaming hash error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// `update` or `finalize` called after the context was finalized
    #[error("hash context already finalized")]
    AlreadyFinalized,

    /// Total input exceeds the 2^64 - 1 bit limit of the length field
    #[error("message length exceeds 2^64 - 1 bits")]
    MessageTooLong,
}
