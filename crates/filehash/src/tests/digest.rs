// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Digest, DigestParseError, HEX_LEN, Sha256};

const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn is_lower_hex(s: &str) -> bool {
    s.len() == HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[test]
fn test_hex_rendering_is_lowercase_msb_first() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xAB;
    bytes[31] = 0x0F;
    let digest = Digest::from_bytes(bytes);

    let hex = digest.to_hex();
    assert!(is_lower_hex(&hex));
    assert!(hex.starts_with("ab"));
    assert!(hex.ends_with("0f"));
}

#[test]
fn test_display_lowerhex_and_to_hex_agree() {
    let digest = Sha256::digest(b"abc").expect("Failed to digest(..)");

    assert_eq!(digest.to_string(), ABC_HEX);
    assert_eq!(format!("{digest:x}"), ABC_HEX);
    assert_eq!(digest.to_hex(), ABC_HEX);
    assert_eq!(format!("{digest:?}"), format!("Digest({ABC_HEX})"));
}

#[test]
fn test_from_hex_round_trip() {
    let digest = Digest::from_hex(ABC_HEX).expect("Failed to from_hex(..)");
    assert_eq!(digest, Sha256::digest(b"abc").expect("Failed to digest(..)"));

    let parsed: Digest = ABC_HEX.parse().expect("Failed to parse()");
    assert_eq!(parsed, digest);
}

#[test]
fn test_from_hex_accepts_uppercase() {
    let upper = ABC_HEX.to_ascii_uppercase();
    let digest = Digest::from_hex(&upper).expect("Failed to from_hex(..)");

    assert_eq!(digest.to_hex(), ABC_HEX);
}

#[test]
fn test_from_hex_rejects_wrong_length() {
    // 65 characters: one past the wire format
    let long = format!("{ABC_HEX}0");
    assert_eq!(
        Digest::from_hex(&long),
        Err(DigestParseError::InvalidLength { len: 65 })
    );

    assert_eq!(
        Digest::from_hex(&ABC_HEX[..63]),
        Err(DigestParseError::InvalidLength { len: 63 })
    );
    assert_eq!(
        Digest::from_hex(""),
        Err(DigestParseError::InvalidLength { len: 0 })
    );
}

#[test]
fn test_from_hex_rejects_non_hex() {
    let mut bad = String::from(ABC_HEX);
    bad.replace_range(10..11, "g");

    assert!(matches!(
        Digest::from_hex(&bad),
        Err(DigestParseError::InvalidHex(hex::FromHexError::InvalidHexCharacter {
            c: 'g',
            index: 10
        }))
    ));
}

#[test]
fn test_bytes_conversions() {
    let digest = Sha256::digest(b"abc").expect("Failed to digest(..)");
    let bytes: [u8; 32] = digest.into();

    assert_eq!(Digest::from(bytes), digest);
    assert_eq!(digest.as_bytes(), &bytes);
    assert_eq!(digest.as_ref(), &bytes[..]);
    assert_eq!(&bytes[..4], &[0xba, 0x78, 0x16, 0xbf]);
}

#[test]
fn test_one_bit_change_changes_digest() {
    let mut data = super::support::pattern(1000);
    let before = Sha256::digest(&data).expect("Failed to digest(..)");

    data[500] ^= 0x01;
    let after = Sha256::digest(&data).expect("Failed to digest(..)");

    assert_ne!(before, after);
}
