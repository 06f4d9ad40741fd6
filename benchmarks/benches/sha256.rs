// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use filehash::{Backend, Sha256};

fn benchmark_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for len in [64usize, 1024, 16 * 1024, 1024 * 1024].iter() {
        let data = vec![0x41u8; *len];
        group.throughput(Throughput::Bytes(*len as u64));

        for backend in Backend::available() {
            group.bench_with_input(format!("{backend}/{len} bytes"), &data, |b, data| {
                b.iter(|| {
                    let mut ctx = Sha256::with_backend(backend);
                    ctx.update(black_box(data)).expect("update failed");
                    black_box(ctx.finalize().expect("finalize failed"))
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_sha256);
criterion_main!(benches);
