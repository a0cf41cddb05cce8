// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable run report printed to stdout.

use std::fmt;
use std::path::PathBuf;

use hashmac_core::types::Verification;

/// Everything one run computed, in the order it is printed.
#[derive(Debug, Clone)]
pub struct Report {
    pub digest_text: String,
    pub digest: String,
    pub message: String,
    pub secret_key: String,
    pub tag: String,
    pub record_path: PathBuf,
    pub verification: Verification,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== HASHING ===")?;
        writeln!(f, "Texto original: {}", self.digest_text)?;
        writeln!(f, "Hash SHA-256:   {}", self.digest)?;

        writeln!(f)?;
        writeln!(f, "=== MAC (Message Authentication Code) ===")?;
        writeln!(f, "Mensaje original: {}", self.message)?;
        writeln!(f, "Clave secreta: {}", self.secret_key)?;
        writeln!(f, "HMAC-SHA256: {}", self.tag)?;

        writeln!(f)?;
        writeln!(
            f,
            "El archivo '{}' ha sido creado con el mensaje autenticado.",
            self.record_path.display()
        )?;

        writeln!(f)?;
        writeln!(f, "=== VERIFICACION DE AUTENTICIDAD ===")?;
        writeln!(f, "HMAC recibido:  {}", self.verification.stored_tag)?;
        writeln!(f, "HMAC calculado: {}", self.verification.recomputed_tag)?;
        writeln!(
            f,
            "Son iguales los mensajes? {}",
            if self.verification.valid { "Si" } else { "No" }
        )
    }
}
