// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text integrity: SHA-256 fingerprints with no key involved.

use hashmac_core::error::HashmacError;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// SHA-256 of the UTF-8 bytes of `text`, as 64 lowercase hex characters.
pub fn digest(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// Verify that `text` matches the expected SHA-256 hex digest.
///
/// Returns `Err(HashmacError::IntegrityMismatch)` carrying both values when
/// it does not.
pub fn verify_digest(text: &str, expected_hex: &str) -> Result<(), HashmacError> {
    let actual = digest(text);
    if actual == expected_hex {
        Ok(())
    } else {
        Err(HashmacError::IntegrityMismatch {
            expected: expected_hex.to_owned(),
            actual,
        })
    }
}
