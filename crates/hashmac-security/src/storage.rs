// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Record storage: one authenticated record as pretty-printed JSON at a
// fixed path.
//
// File layout:
//   {
//     "message": "<text>",
//     "mac": "<64 lowercase hex chars>"
//   }
//
// Every save rewrites the whole file. There is no locking; one process at a
// time.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use hashmac_core::error::HashmacError;
use hashmac_core::types::AuthenticatedRecord;
use tracing::{debug, instrument, warn};

use crate::mac::is_well_formed_tag;

/// Reads and writes a single [`AuthenticatedRecord`] at a known path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `record`, replacing whatever was at the path before.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn save(&self, record: &AuthenticatedRecord) -> Result<(), HashmacError> {
        // Serialise up front so write failures (disk full) stay I/O errors.
        let json = serde_json::to_vec_pretty(record)?;

        let file = File::create(&self.path).map_err(|e| HashmacError::record_io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&json)
            .and_then(|()| writer.flush())
            .map_err(|e| HashmacError::record_io(&self.path, e))?;

        debug!(message_len = record.message.len(), "record saved");
        Ok(())
    }

    /// Read the record back.
    ///
    /// Fails with `RecordIo` when the file is missing or unreadable, and with
    /// `Serialization` when it is not JSON or lacks `message` / `mac`.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<AuthenticatedRecord, HashmacError> {
        let file = File::open(&self.path).map_err(|e| HashmacError::record_io(&self.path, e))?;
        let record: AuthenticatedRecord = serde_json::from_reader(BufReader::new(file))?;

        if !is_well_formed_tag(&record.mac) {
            // Still returned: verification will simply fail.
            warn!(mac = %record.mac, "stored tag is not 64 lowercase hex characters");
        }

        debug!(message_len = record.message.len(), "record loaded");
        Ok(record)
    }
}
