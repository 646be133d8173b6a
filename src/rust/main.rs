// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! tstp2isar CLI - Main binary entry point
//!
//! Translates one TSTP proof file and prints the Isar script on stdout

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tstp2isar::config::first_line;
use tstp2isar::{Cli, Config, TranslateError};

mod output;

use output::OutputFormatter;

fn main() {
    let formatter = OutputFormatter::new();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let err = TranslateError::Configuration(first_line(&e.to_string()));
            formatter.error(&anyhow::Error::new(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = execute(cli, &formatter) {
        formatter.error(&err);
        std::process::exit(1);
    }
}

fn execute(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = Config::try_from(cli)?;
    init_tracing(config.log_directive());

    let summary = tstp2isar::run(&config)
        .with_context(|| format!("translating {}", config.file.display()))?;

    if config.very_verbose {
        formatter.summary(&summary);
    }
    Ok(())
}

/// Initialize tracing/logging on stderr
fn init_tracing(directive: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::{fmt, prelude::*};

    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
