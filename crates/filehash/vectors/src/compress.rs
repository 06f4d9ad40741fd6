// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw compression vectors: pre-padded blocks fed straight to the backend.

use filehash_core::{BLOCK_LEN, BlockCompressor, H0};

/// Pre-padded blocks and the state expected after compressing them from H(0)
pub struct CompressVector {
    /// Short label for failure output
    pub name: &'static str,
    /// Blocks in compression order
    pub blocks: Vec<[u8; BLOCK_LEN]>,
    /// State after the last block
    pub expected: [u32; 8],
}

fn padded_single(msg: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block[..msg.len()].copy_from_slice(msg);
    block[msg.len()] = 0x80;
    block[56..].copy_from_slice(&((msg.len() as u64) * 8).to_be_bytes());
    block
}

/// Compression vectors covering one and two block inputs
pub fn compress_vectors() -> Vec<CompressVector> {
    // 448-bit message: padding needs a second block
    let fips_two_block = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    let mut first = [0u8; BLOCK_LEN];
    first[..56].copy_from_slice(fips_two_block);
    first[56] = 0x80;
    let mut second = [0u8; BLOCK_LEN];
    second[56..].copy_from_slice(&448u64.to_be_bytes());

    vec![
        CompressVector {
            name: "abc",
            blocks: vec![padded_single(b"abc")],
            expected: [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c,
                0xb410ff61, 0xf20015ad,
            ],
        },
        CompressVector {
            name: "empty",
            blocks: vec![padded_single(b"")],
            expected: [
                0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c,
                0xa495991b, 0x7852b855,
            ],
        },
        CompressVector {
            name: "zero block",
            blocks: vec![[0u8; BLOCK_LEN]],
            expected: [
                0xda5698be, 0x17b9b469, 0x62335799, 0x779fbeca, 0x8ce5d491, 0xc0d26243,
                0xbafef9ea, 0x1837a9d8,
            ],
        },
        CompressVector {
            name: "fips 448-bit",
            blocks: vec![first, second],
            expected: [
                0x248d6a61, 0xd20638b8, 0xe5c02693, 0x0c3e6039, 0xa33ce459, 0x64ff2167,
                0xf6ecedd4, 0x19db06c1,
            ],
        },
    ]
}

/// Checks `compressor` against every compression vector, one block at a
/// time and batched.
pub fn run_compress_vectors<C: BlockCompressor>(compressor: &C) {
    for vector in compress_vectors() {
        let mut single = H0;
        for block in &vector.blocks {
            compressor.compress_block(&mut single, block);
        }

        let mut batched = H0;
        compressor.compress_blocks(&mut batched, &vector.blocks);

        println!("[{}] compress '{}':", compressor.name(), vector.name);
        println!("  Result:   {:08x?}", single);
        println!("  Expected: {:08x?}", vector.expected);

        assert_eq!(
            single,
            vector.expected,
            "[{}] compress_block mismatch for '{}'",
            compressor.name(),
            vector.name
        );
        assert_eq!(
            batched,
            vector.expected,
            "[{}] compress_blocks mismatch for '{}'",
            compressor.name(),
            vector.name
        );
    }
}
