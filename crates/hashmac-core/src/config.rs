// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workflow configuration.

use std::path::PathBuf;

/// File name of the authenticated record, relative to the working directory.
pub const DEFAULT_RECORD_FILE: &str = "mensaje_autenticado.json";

/// Inputs for one authenticate-and-verify run.
///
/// There is no config file or command line: the binary runs with
/// [`WorkflowConfig::default`], and tests build their own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Text fingerprinted in the hashing section of the report.
    pub digest_text: String,
    /// Shared secret for the MAC. Never written to the record file.
    pub secret_key: String,
    /// Message that gets authenticated, persisted, and verified.
    pub message: String,
    /// Where the authenticated record is written and read back.
    pub record_path: PathBuf,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            digest_text: "Hola mundor".to_owned(),
            secret_key: "PUCESE".to_owned(),
            message: "Mensaje cifrado".to_owned(),
            record_path: PathBuf::from(DEFAULT_RECORD_FILE),
        }
    }
}
