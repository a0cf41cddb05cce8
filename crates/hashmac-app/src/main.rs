// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// hashmac: digest a text, authenticate a message, persist it, verify it.
//
// Entry point. Initialises logging, runs the workflow with the built-in
// configuration, and prints the report.

mod report;
mod workflow;

use std::process::ExitCode;

use hashmac_core::WorkflowConfig;
use hashmac_core::error::Result;
use hashmac_core::human_errors::humanize_error;

use crate::report::Report;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = WorkflowConfig::default();
    tracing::info!(record = %config.record_path.display(), "hashmac starting");

    exit_code(workflow::run(&config))
}

/// Exit status of a run: 0 once the report is printed, whatever the verdict;
/// 1 when the workflow aborted.
fn exit_status(result: Result<Report>) -> u8 {
    match result {
        Ok(report) => {
            print!("{report}");
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "workflow aborted");
            eprintln!("{}", humanize_error(&e));
            1
        }
    }
}

fn exit_code(result: Result<Report>) -> ExitCode {
    ExitCode::from(exit_status(result))
}
