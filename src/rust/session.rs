// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation session: one pass over a proof trace
//!
//! A [`Session`] owns everything a run mutates (the proof graph, the
//! reconstruction method and the script writer). Lines are fed in file
//! order; each clause is parsed, translated, checked into the graph and
//! handed to the method before the next line is read.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{AnnotatedFormula, ProofGraph, Role};
use crate::error::Result;
use crate::exchange::translate;
use crate::parsers::{parents, parse_line};
use crate::reconstruct::{Method, MethodFactory, ProofMethod};
use crate::script::{ScriptSink, ScriptWriter};

/// Per-run switches that affect what is written besides the script itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Echo every non-blank input line as a script comment
    pub verbose: bool,
    /// Dump every parsed clause to stderr as JSON
    pub very_verbose: bool,
    /// Lemma name
    pub label: Option<String>,
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        SessionOptions {
            verbose: config.verbose,
            very_verbose: config.very_verbose,
            label: config.label.clone(),
        }
    }
}

/// Statistics of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub method: Method,
    pub clauses: usize,
    pub roots: usize,
    pub derived: usize,
    /// Numbered rules (tableau embedding only)
    pub rules: usize,
    pub core: Vec<String>,
    pub script_lines: usize,
}

pub struct Session<W: Write> {
    graph: ProofGraph,
    method: Box<dyn ProofMethod>,
    writer: ScriptWriter<W>,
    options: SessionOptions,
    roots: usize,
    derived: usize,
}

impl<W: Write> Session<W> {
    pub fn new(method: Method, options: SessionOptions, out: W) -> Self {
        Session {
            graph: ProofGraph::new(),
            method: MethodFactory::create(method, options.label.clone()),
            writer: ScriptWriter::new(out),
            options,
            roots: 0,
            derived: 0,
        }
    }

    pub fn graph(&self) -> &ProofGraph {
        &self.graph
    }

    /// Process one input line; `lineno` is 1-based
    pub fn feed_line(&mut self, lineno: usize, text: &str) -> Result<()> {
        if self.options.verbose && !text.trim().is_empty() {
            self.writer.comment(text.trim())?;
        }

        let Some(raw) = parse_line(text)? else {
            return Ok(());
        };

        let node = AnnotatedFormula {
            language: raw.language,
            role: Role::parse(&raw.role),
            formula: translate(&raw.formula),
            parents: parents(&raw.annotation)?,
            name: raw.name,
            raw_formula: raw.formula,
            raw_annotation: raw.annotation,
            line: lineno,
        };
        debug!(line = lineno, node = %node, "clause");

        if !node.is_root() && !matches!(node.role, Role::Derived(_)) {
            warn!(name = %node.name, role = %node.role, "input role on a derived clause");
        }
        if self.options.very_verbose {
            let json = serde_json::to_string_pretty(&node).map_err(io::Error::from)?;
            eprintln!("{}", json);
        }

        if node.is_root() {
            self.roots += 1;
        } else {
            self.derived += 1;
        }

        let name = node.name.clone();
        self.graph.insert(node)?;
        if let Some(node) = self.graph.get(&name) {
            self.method.step(node, &self.graph, &mut self.writer)?;
        }
        Ok(())
    }

    /// Close the script and hand back the output
    pub fn finish(mut self) -> Result<(RunSummary, W)> {
        let outcome = self.method.finish(&self.graph, &mut self.writer)?;
        let summary = RunSummary {
            method: self.method.method(),
            clauses: self.graph.len(),
            roots: self.roots,
            derived: self.derived,
            rules: outcome.rules,
            core: outcome.core,
            script_lines: self.writer.lines_written(),
        };
        Ok((summary, self.writer.into_inner()))
    }
}

/// Translate a whole trace held in memory
pub fn translate_str(input: &str, method: Method) -> Result<String> {
    translate_with(input, method, SessionOptions::default()).map(|(script, _)| script)
}

/// [`translate_str`] with explicit options, returning the summary as well
pub fn translate_with(
    input: &str,
    method: Method,
    options: SessionOptions,
) -> Result<(String, RunSummary)> {
    let mut session = Session::new(method, options, Vec::new());
    for (i, line) in input.lines().enumerate() {
        session.feed_line(i + 1, line)?;
    }
    let (summary, buffer) = session.finish()?;
    let script = String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok((script, summary))
}

/// Translate the file named in `config`, writing the script to stdout
pub fn run(config: &Config) -> Result<RunSummary> {
    let stdout = io::stdout();
    run_to(config, stdout.lock())
}

/// Translate the file named in `config` into `out`
pub fn run_to<W: Write>(config: &Config, out: W) -> Result<RunSummary> {
    let reader = BufReader::new(File::open(&config.file)?);
    info!(file = %config.file.display(), method = %config.method, "translating");

    let mut session = Session::new(config.method, SessionOptions::from(config), out);
    for (i, line) in reader.lines().enumerate() {
        session.feed_line(i + 1, &line?)?;
    }
    let (summary, mut out) = session.finish()?;
    out.flush()?;

    info!(
        clauses = summary.clauses,
        roots = summary.roots,
        derived = summary.derived,
        rules = summary.rules,
        core = summary.core.len(),
        lines = summary.script_lines,
        "translation complete"
    );
    Ok(summary)
}
