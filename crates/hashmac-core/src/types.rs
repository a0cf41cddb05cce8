// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for hashmac.

use serde::{Deserialize, Serialize};

/// A message together with the HMAC-SHA256 tag computed over it.
///
/// This is exactly what lands on disk. The secret key is deliberately not a
/// field, so it cannot be serialised alongside the message.
///
/// Older files used `mensaje` / `hmac` as field names; those are accepted on
/// read, but writes always use `message` / `mac`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedRecord {
    #[serde(alias = "mensaje")]
    pub message: String,
    #[serde(alias = "hmac")]
    pub mac: String,
}

impl AuthenticatedRecord {
    pub fn new(message: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mac: mac.into(),
        }
    }
}

/// Outcome of recomputing a stored record's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Message as it was read back from storage.
    pub recovered_message: String,
    /// Tag as it was read back from storage.
    pub stored_tag: String,
    /// Tag recomputed from the recovered message and the secret key.
    pub recomputed_tag: String,
    /// `true` when both tags are identical.
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_fixed_field_names() {
        let record = AuthenticatedRecord::new("hi", "00ff");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "hi", "mac": "00ff" }));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let record: AuthenticatedRecord =
            serde_json::from_str(r#"{ "mensaje": "hola", "hmac": "abcd" }"#).unwrap();
        assert_eq!(record, AuthenticatedRecord::new("hola", "abcd"));
    }

    #[test]
    fn missing_field_is_rejected() {
        let result: Result<AuthenticatedRecord, _> = serde_json::from_str(r#"{ "message": "x" }"#);
        assert!(result.is_err());
    }
}
