// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language explanations for the errors that abort a run.
//
// The binary prints these to stderr right before exiting non-zero, so the
// operator sees what went wrong with the record file and what to try next.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::HashmacError;

/// How the operator should treat an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Likely to go away on its own (full disk freed, device back online).
    Transient,
    /// The operator must change something (permissions, path, missing file).
    ActionRequired,
    /// The content itself is bad; running again will not help.
    Permanent,
}

/// An error rephrased for a human, with a concrete suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What to try next.
    pub suggestion: String,
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `HashmacError` into a `HumanError`.
pub fn humanize_error(err: &HashmacError) -> HumanError {
    match err {
        HashmacError::IntegrityMismatch { .. } => HumanError {
            message: "The text does not match its recorded fingerprint.".into(),
            suggestion: "The text was changed after it was fingerprinted. Recompute the digest from the original.".into(),
            severity: Severity::Permanent,
        },

        HashmacError::TagMismatch { .. } => HumanError {
            message: "The message failed authentication.".into(),
            suggestion: "Either the message or its tag was altered, or a different secret key was used.".into(),
            severity: Severity::Permanent,
        },

        HashmacError::RecordIo { path, source } => humanize_io(source, path),

        HashmacError::Serialization(_) => HumanError {
            message: "The authenticated record file is damaged.".into(),
            suggestion: "It must be JSON with a \"message\" and a \"mac\" field. Run the tool again to rewrite it.".into(),
            severity: Severity::Permanent,
        },
    }
}

fn humanize_io(io_err: &std::io::Error, path: &Path) -> HumanError {
    let location = format!(" ({})", path.display());
    match io_err.kind() {
        ErrorKind::NotFound => HumanError {
            message: format!("The record file couldn't be found{location}."),
            suggestion: "Check that the directory exists and that nothing removed the file during the run.".into(),
            severity: Severity::ActionRequired,
        },
        ErrorKind::PermissionDenied => HumanError {
            message: format!("No permission to access the record file{location}."),
            suggestion: "Check the file and directory permissions, or run from a writable directory.".into(),
            severity: Severity::ActionRequired,
        },
        _ => HumanError {
            message: format!("There was a problem reading or writing the record file{location}."),
            suggestion: "Try again. If this keeps happening, the disk may be full.".into(),
            severity: Severity::Transient,
        },
    }
}
