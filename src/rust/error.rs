// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for proof reconstruction
//!
//! Every variant is fatal: the run stops at the first error and whatever
//! script lines were already written are all the output there is.

use thiserror::Error;

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors that can occur while translating a proof trace
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A non-blank line does not match the clause grammar
    #[error("malformed line: `{line}`")]
    MalformedLine { line: String },

    /// A clause name was defined twice
    #[error("duplicate node name: {name}")]
    DuplicateNode { name: String },

    /// A root clause carries a role we cannot place in the script
    #[error("unsupported role `{role}` for root clause {name}")]
    UnsupportedRole { name: String, role: String },

    /// The justification term is unbalanced or not atom/list shaped
    #[error("annotation parse error in `{annotation}`: {reason}")]
    AnnotationParse { annotation: String, reason: String },

    /// Missing or unknown command-line option
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A clause cites a parent that has not been seen yet
    #[error("clause {name} cites unknown parent {parent}")]
    UnresolvedParent { name: String, parent: String },

    /// More than one conjecture in the same proof file
    #[error("second conjecture {second} (first was {first})")]
    MultipleConjectures { first: String, second: String },

    /// Reading the proof file or writing the script failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslateError {
    pub fn malformed(line: impl Into<String>) -> Self {
        TranslateError::MalformedLine { line: line.into() }
    }

    pub fn annotation(annotation: impl Into<String>, reason: impl Into<String>) -> Self {
        TranslateError::AnnotationParse {
            annotation: annotation.into(),
            reason: reason.into(),
        }
    }

    /// Short name of the error kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::MalformedLine { .. } => "MalformedLine",
            TranslateError::DuplicateNode { .. } => "DuplicateNodeName",
            TranslateError::UnsupportedRole { .. } => "UnsupportedRole",
            TranslateError::AnnotationParse { .. } => "AnnotationParse",
            TranslateError::Configuration(_) => "Configuration",
            TranslateError::UnresolvedParent { .. } => "UnresolvedParent",
            TranslateError::MultipleConjectures { .. } => "MultipleConjectures",
            TranslateError::Io(_) => "Io",
        }
    }
}
