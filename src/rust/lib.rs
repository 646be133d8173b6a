// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! tstp2isar: Isabelle/Isar proof scripts from E prover TSTP traces
//!
//! Reads a refutation proof line by line, translates every clause into
//! HOL notation, rebuilds the derivation graph from the clause annotations
//! and emits a candidate Isar script using one of two reconstruction
//! methods (direct chaining or tableau embedding).

pub mod config;
pub mod core;
pub mod error;
pub mod exchange;
pub mod parsers;
pub mod reconstruct;
pub mod script;
pub mod session;

pub use config::{Cli, Config};
pub use crate::core::{AnnotatedFormula, Language, ProofGraph, Role};
pub use error::{Result, TranslateError};
pub use reconstruct::{Method, MethodFactory, ProofMethod};
pub use script::{ScriptSink, ScriptWriter};
pub use session::{run, translate_str, RunSummary, Session, SessionOptions};
