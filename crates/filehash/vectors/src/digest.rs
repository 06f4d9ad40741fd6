// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-message digest vectors, run through the streaming core.

use filehash_core::{BlockCompressor, DIGEST_LEN, Sha256Core};

/// Message bytes for a digest vector
#[derive(Debug, Clone, Copy)]
pub enum Input {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `count` copies of `byte`
    Repeat {
        /// Repeated byte
        byte: u8,
        /// Number of copies
        count: usize,
    },
    /// `len` bytes of `i % 251`
    Pattern {
        /// Message length in bytes
        len: usize,
    },
}

impl Input {
    /// Materialize the message
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Input::Bytes(bytes) => bytes.to_vec(),
            Input::Repeat { byte, count } => vec![byte; count],
            Input::Pattern { len } => (0..len).map(|i| (i % 251) as u8).collect(),
        }
    }
}

/// Message and its expected lowercase hex digest
#[derive(Debug, Clone, Copy)]
pub struct DigestVector {
    /// Short label for failure output
    pub name: &'static str,
    /// Message
    pub input: Input,
    /// Expected digest, 64 lowercase hex characters
    pub expected_hex: &'static str,
}

impl DigestVector {
    /// Expected digest as bytes
    pub fn expected(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(self.expected_hex, &mut out)
            .unwrap_or_else(|e| panic!("vector '{}' has malformed hex: {e}", self.name));
        out
    }
}

/// FIPS 180-4 examples plus every padding boundary around one and two blocks
pub fn digest_vectors() -> &'static [DigestVector] {
    &[
        DigestVector {
            name: "empty",
            input: Input::Bytes(b""),
            expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        DigestVector {
            name: "abc",
            input: Input::Bytes(b"abc"),
            expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        DigestVector {
            name: "hello world",
            input: Input::Bytes(b"hello world"),
            expected_hex: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        },
        DigestVector {
            name: "Hello, World!",
            input: Input::Bytes(b"Hello, World!"),
            expected_hex: "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f",
        },
        DigestVector {
            name: "fips 448-bit",
            input: Input::Bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        },
        DigestVector {
            name: "fips 896-bit",
            input: Input::Bytes(
                b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
            ),
            expected_hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
        },
        DigestVector {
            name: "pattern 1",
            input: Input::Pattern { len: 1 },
            expected_hex: "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d",
        },
        DigestVector {
            name: "pattern 55",
            input: Input::Pattern { len: 55 },
            expected_hex: "463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59",
        },
        DigestVector {
            name: "pattern 56",
            input: Input::Pattern { len: 56 },
            expected_hex: "da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562",
        },
        DigestVector {
            name: "pattern 63",
            input: Input::Pattern { len: 63 },
            expected_hex: "29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488",
        },
        DigestVector {
            name: "pattern 64",
            input: Input::Pattern { len: 64 },
            expected_hex: "fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108",
        },
        DigestVector {
            name: "pattern 65",
            input: Input::Pattern { len: 65 },
            expected_hex: "4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781",
        },
        DigestVector {
            name: "pattern 119",
            input: Input::Pattern { len: 119 },
            expected_hex: "da18797ed7c3a777f0847f429724a2d8cd5138e6ed2895c3fa1a6d39d18f7ec6",
        },
        DigestVector {
            name: "pattern 120",
            input: Input::Pattern { len: 120 },
            expected_hex: "f52b23db1fbb6ded89ef42a23ce0c8922c45f25c50b568a93bf1c075420bbb7c",
        },
        DigestVector {
            name: "pattern 127",
            input: Input::Pattern { len: 127 },
            expected_hex: "92ca0fa6651ee2f97b884b7246a562fa71250fedefe5ebf270d31c546bfea976",
        },
        DigestVector {
            name: "pattern 128",
            input: Input::Pattern { len: 128 },
            expected_hex: "471fb943aa23c511f6f72f8d1652d9c880cfa392ad80503120547703e56a2be5",
        },
        DigestVector {
            name: "pattern 1000",
            input: Input::Pattern { len: 1000 },
            expected_hex: "4e4c294b331f7a2099a379bec34b9f9fc03dc46ab465d998f4d683da53487e6d",
        },
        DigestVector {
            name: "one million 'a'",
            input: Input::Repeat {
                byte: b'a',
                count: 1_000_000,
            },
            expected_hex: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        },
        DigestVector {
            name: "1 MiB of 'A'",
            input: Input::Repeat {
                byte: b'A',
                count: 1 << 20,
            },
            expected_hex: "4e29ad18ab9f42d7c233500771a39d7c852b200baf328fd00fbbe3fecea1eb56",
        },
    ]
}

/// Hash `msg` with `compressor`, feeding it `chunk` bytes at a time
pub fn hash_with<C: BlockCompressor>(compressor: &C, msg: &[u8], chunk: usize) -> [u8; DIGEST_LEN] {
    let mut core = Sha256Core::new(compressor);
    for piece in msg.chunks(chunk.max(1)) {
        core.update(piece)
            .unwrap_or_else(|e| panic!("[{}] update failed: {e}", compressor.name()));
    }
    core.finalize()
        .unwrap_or_else(|e| panic!("[{}] finalize failed: {e}", compressor.name()))
}

/// Checks `compressor` against every digest vector in a single update
pub fn run_digest_vectors<C: BlockCompressor>(compressor: &C) {
    for vector in digest_vectors() {
        let msg = vector.input.bytes();
        let result = hash_with(compressor, &msg, msg.len());

        assert_eq!(
            hex::encode(result),
            vector.expected_hex,
            "[{}] digest mismatch for '{}'",
            compressor.name(),
            vector.name
        );
    }
}

/// Checks that splitting the message at arbitrary points never changes the digest
pub fn run_chunking_invariance<C: BlockCompressor>(compressor: &C) {
    const CHUNKS: [usize; 10] = [1, 3, 7, 31, 55, 56, 63, 64, 65, 4096];

    for vector in digest_vectors().iter().filter(|v| v.input.bytes().len() <= 4096) {
        let msg = vector.input.bytes();
        let expected = vector.expected();

        for chunk in CHUNKS {
            assert_eq!(
                hash_with(compressor, &msg, chunk),
                expected,
                "[{}] chunk={chunk} mismatch for '{}'",
                compressor.name(),
                vector.name
            );
        }
    }
}
