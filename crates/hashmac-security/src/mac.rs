// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Message authentication: HMAC-SHA256 tags rendered as lowercase hex.

use hashmac_core::error::HashmacError;
use ring::hmac;

/// Length of a hex-encoded HMAC-SHA256 tag.
pub const TAG_HEX_LEN: usize = 64;

/// Compute HMAC-SHA256 of `message` under `key` and return it as lowercase hex.
///
/// Both strings are used as their UTF-8 bytes. An empty key is accepted; it
/// yields a valid, if worthless, tag.
pub fn mac(key: &str, message: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key.as_bytes());
    let tag = hmac::sign(&key, message.as_bytes());
    hex::encode(tag.as_ref())
}

/// Plain string equality between two hex tags.
///
/// Not constant-time.
pub fn tags_match(expected: &str, actual: &str) -> bool {
    expected == actual
}

/// Recompute the tag for `message` and compare it against `expected_hex`.
pub fn verify_mac(key: &str, message: &str, expected_hex: &str) -> Result<(), HashmacError> {
    let recomputed = mac(key, message);
    if tags_match(expected_hex, &recomputed) {
        Ok(())
    } else {
        Err(HashmacError::TagMismatch {
            stored: expected_hex.to_owned(),
            recomputed,
        })
    }
}

/// `true` if `tag` looks like something [`mac`] could have produced.
pub fn is_well_formed_tag(tag: &str) -> bool {
    tag.len() == TAG_HEX_LEN && tag.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
