// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for digests, HMAC tags, and the record store in the
// hashmac-security crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hashmac_core::types::AuthenticatedRecord;
use hashmac_security::{RecordStore, digest, mac};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// SHA-256 digest of text at a few sizes, from a short phrase up to 1 MiB.
fn bench_digest(c: &mut Criterion) {
    let sizes: &[(&str, usize)] = &[
        ("16 B", 16),
        ("1 KiB", 1024),
        ("100 KiB", 100 * 1024),
        ("1 MiB", 1024 * 1024),
    ];

    let mut group = c.benchmark_group("digest_sha256");
    for &(label, size) in sizes {
        let text = "a".repeat(size);
        group.bench_function(label, |b| {
            b.iter(|| black_box(digest(black_box(&text))));
        });
    }
    group.finish();
}

/// HMAC-SHA256 over the demo message, including key setup on every call.
fn bench_mac(c: &mut Criterion) {
    c.bench_function("mac_hmac_sha256 (demo message)", |b| {
        b.iter(|| black_box(mac(black_box("PUCESE"), black_box("Mensaje cifrado"))));
    });
}

/// Save then load one record in a temporary directory.
fn bench_record_round_trip(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = RecordStore::new(dir.path().join("record.json"));
    let record = AuthenticatedRecord::new("Mensaje cifrado", mac("PUCESE", "Mensaje cifrado"));

    c.bench_function("record_save_load", |b| {
        b.iter(|| {
            store.save(black_box(&record)).expect("save failed");
            black_box(store.load().expect("load failed"));
        });
    });
}

criterion_group!(benches, bench_digest, bench_mac, bench_record_round_trip);
criterion_main!(benches);
