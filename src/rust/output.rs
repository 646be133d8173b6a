// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostics for the CLI
//!
//! stdout carries the generated script, so everything here goes to stderr.

use colored::Colorize;
use tstp2isar::{RunSummary, TranslateError};

/// Stderr reporter for the binary
#[derive(Debug, Default)]
pub struct OutputFormatter;

impl OutputFormatter {
    pub fn new() -> Self {
        Self
    }

    /// One-line diagnostic for a fatal error
    pub fn error(&self, err: &anyhow::Error) {
        let line = diagnostic_line(err);
        eprintln!("{} {}", "error:".red().bold(), line);
    }

    /// Run statistics, printed in very verbose mode
    pub fn summary(&self, summary: &RunSummary) {
        eprintln!(
            "{} {} clauses ({} input, {} derived), {} rules, core of {}, {} script lines",
            summary.method.to_string().cyan().bold(),
            summary.clauses,
            summary.roots,
            summary.derived,
            summary.rules,
            summary.core.len(),
            summary.script_lines,
        );
    }
}

/// `[Kind] message` with the whole context chain on one line
pub fn diagnostic_line(err: &anyhow::Error) -> String {
    let kind = err
        .downcast_ref::<TranslateError>()
        .map(TranslateError::kind)
        .unwrap_or("Error");
    let message = format!("{:#}", err).replace('\n', " ");
    format!("[{}] {}", kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_diagnostic_names_kind_and_input() {
        let err = Err::<(), _>(TranslateError::malformed("fof(oops"))
            .context("translating proof.out")
            .unwrap_err();
        assert_eq!(
            diagnostic_line(&err),
            "[MalformedLine] translating proof.out: malformed line: `fof(oops`"
        );
    }

    #[test]
    fn test_foreign_error_kind() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(diagnostic_line(&err), "[Error] something else");
    }
}
