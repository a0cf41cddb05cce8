// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for hashmac.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all hashmac operations.
#[derive(Debug, Error)]
pub enum HashmacError {
    // -- Integrity / authenticity --
    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    #[error("authentication tag mismatch: stored {stored}, recomputed {recomputed}")]
    TagMismatch { stored: String, recomputed: String },

    // -- Storage / persistence --
    #[error("authenticated record {}: {source}", .path.display())]
    RecordIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HashmacError {
    /// Wrap an I/O error with the record path it happened on.
    pub fn record_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RecordIo {
            path: path.into(),
            source,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HashmacError>;
