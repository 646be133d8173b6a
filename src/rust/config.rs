// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command-line options and the run configuration derived from them

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, TranslateError};
use crate::reconstruct::Method;

/// Translate an E prover TSTP proof into an Isabelle/Isar proof script
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tstp2isar")]
#[command(about, long_about = None)]
#[command(author = "ECHIDNA Project Team")]
pub struct Cli {
    /// TSTP proof file to translate
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Echo every input line into the script as a comment
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Dump every parsed clause to stderr as JSON
    #[arg(short = 'V', long = "very-verbose")]
    pub very_verbose: bool,

    /// Reconstruct by direct chaining instead of tableau embedding
    #[arg(short = 'g', long = "direct")]
    pub direct: bool,

    /// Debug tracing on stderr
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Name of the generated lemma
    #[arg(short = 'l', long, value_name = "NAME")]
    pub label: Option<String>,
}

/// Validated configuration of one translation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub method: Method,
    pub verbose: bool,
    pub very_verbose: bool,
    pub debug: bool,
    pub label: Option<String>,
}

impl Config {
    /// Parse command-line arguments. Every clap error, including a request
    /// for help, becomes a `Configuration` error.
    pub fn try_from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)
            .map_err(|e| TranslateError::Configuration(first_line(&e.to_string())))?;
        Config::try_from(cli)
    }

    /// Tracing filter directive for this run
    pub fn log_directive(&self) -> &'static str {
        if self.debug {
            "tstp2isar=debug"
        } else {
            "tstp2isar=warn"
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = TranslateError;

    fn try_from(cli: Cli) -> Result<Config> {
        let file = cli.file.ok_or_else(|| {
            TranslateError::Configuration("no proof file given (use -f <path>)".to_string())
        })?;

        if let Some(label) = &cli.label {
            let valid = label.chars().next().map_or(false, |c| c.is_alphabetic())
                && label.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '\'');
            if !valid {
                return Err(TranslateError::Configuration(format!(
                    "invalid lemma name: {}",
                    label
                )));
            }
        }

        Ok(Config {
            file,
            method: if cli.direct {
                Method::DirectChaining
            } else {
                Method::TableauEmbedding
            },
            verbose: cli.verbose,
            very_verbose: cli.very_verbose,
            debug: cli.debug,
            label: cli.label,
        })
    }
}

/// clap renders multi-line errors with usage; diagnostics are one line
pub fn first_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}
