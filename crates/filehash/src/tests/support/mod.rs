// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Read};
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Reference digest from RustCrypto `sha2`
pub fn reference_hex(data: &[u8]) -> String {
    use sha2::Digest as _;
    hex::encode(sha2::Sha256::digest(data))
}

/// `len` bytes of `i % 251`
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Reader that yields at most `max_read` bytes per call and interrupts every
/// other call
pub struct StutteringReader<'a> {
    data: &'a [u8],
    max_read: usize,
    interrupt_next: bool,
}

impl<'a> StutteringReader<'a> {
    pub fn new(data: &'a [u8], max_read: usize) -> Self {
        Self {
            data,
            max_read,
            interrupt_next: true,
        }
    }
}

impl Read for StutteringReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;

        let n = self.max_read.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that returns `good` bytes, then fails
pub struct FailingReader {
    good: usize,
}

impl FailingReader {
    pub fn new(good: usize) -> Self {
        Self { good }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.good == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source vanished"));
        }
        let n = self.good.min(buf.len());
        buf[..n].fill(0x42);
        self.good -= n;
        Ok(n)
    }
}
