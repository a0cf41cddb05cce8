// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! hashmac-security: the cryptographic primitives behind hashmac.
//!
//! SHA-256 fingerprints for plain integrity checks, HMAC-SHA256 tags for
//! keyed authenticity, and a JSON record store that persists a message with
//! its tag so it can be re-verified later.

pub mod integrity;
pub mod mac;
pub mod storage;

// PUBLIC API: Re-export the primitives
pub use integrity::{digest, hash_bytes, verify_digest};
pub use mac::{is_well_formed_tag, mac, tags_match, verify_mac};
pub use storage::RecordStore;
