// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

fn main() {
    // Declare custom cfg to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(filehash_accel_eligible)");
    println!("cargo:rerun-if-changed=build.rs");

    // pure-rust pins dispatch to the portable transform
    if std::env::var("CARGO_FEATURE_PURE_RUST").is_ok() {
        return;
    }

    let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Accelerated transforms exist for:
    // - x86 / x86_64: SHA-NI (sha, sse2, ssse3, sse4.1)
    // - aarch64: ARMv8 crypto extension (sha2)
    let is_accel_eligible = matches!(target_arch.as_str(), "x86" | "x86_64" | "aarch64");

    if is_accel_eligible {
        println!("cargo:rustc-cfg=filehash_accel_eligible");
    }
}
