// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Authenticate-and-verify: tag a message, persist it, read it back, and
// recompute the tag. Strictly sequential; any store error aborts the run.

use hashmac_core::WorkflowConfig;
use hashmac_core::error::Result;
use hashmac_core::types::{AuthenticatedRecord, Verification};
use hashmac_security::{RecordStore, digest, mac, tags_match};
use tracing::{info, instrument, warn};

use crate::report::Report;

/// Compute the tag for `message` and persist the pair.
#[instrument(skip_all, fields(path = %store.path().display()))]
pub fn authenticate(key: &str, message: &str, store: &RecordStore) -> Result<AuthenticatedRecord> {
    let record = AuthenticatedRecord::new(message, mac(key, message));
    store.save(&record)?;
    Ok(record)
}

/// Reload the stored record and check its tag against a fresh one.
///
/// A mismatch is not an error: it is reported through
/// [`Verification::valid`]. Tampered message, wrong key, and corrupted tag
/// all look the same from here.
#[instrument(skip_all, fields(path = %store.path().display()))]
pub fn verify_stored(key: &str, store: &RecordStore) -> Result<Verification> {
    let stored = store.load()?;
    let recomputed_tag = mac(key, &stored.message);
    let valid = tags_match(&stored.mac, &recomputed_tag);

    if valid {
        info!("stored record verified");
    } else {
        warn!("stored record failed verification");
    }

    Ok(Verification {
        recovered_message: stored.message,
        stored_tag: stored.mac,
        recomputed_tag,
        valid,
    })
}

/// Compute, persist, reload, re-verify.
pub fn authenticate_and_verify(
    key: &str,
    message: &str,
    store: &RecordStore,
) -> Result<(AuthenticatedRecord, Verification)> {
    let record = authenticate(key, message, store)?;
    let verification = verify_stored(key, store)?;
    Ok((record, verification))
}

/// Full run: the hashing section followed by the authenticate/verify round
/// trip, collected into a [`Report`].
pub fn run(config: &WorkflowConfig) -> Result<Report> {
    let text_digest = digest(&config.digest_text);
    let store = RecordStore::new(&config.record_path);
    let (record, verification) =
        authenticate_and_verify(&config.secret_key, &config.message, &store)?;

    Ok(Report {
        digest_text: config.digest_text.clone(),
        digest: text_digest,
        message: record.message,
        secret_key: config.secret_key.clone(),
        tag: record.mac,
        record_path: store.path().to_path_buf(),
        verification,
    })
}
