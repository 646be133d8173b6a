// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Proof reconstruction: turning the clause graph into an Isar script
//!
//! Two methods share the same outline (lemma header, assumptions,
//! refutation blocks) and differ in how derived clauses are emitted:
//!
//! - [`DirectChaining`]: one `from ... have ...` step per derived clause
//! - [`TableauEmbedding`]: derived clauses become abbreviations and a
//!   numbered rule chain over a minimized core closes the proof

use indexmap::IndexSet;
use std::fmt;
use tracing::warn;

use crate::core::{AnnotatedFormula, ProofGraph, Role};
use crate::error::{Result, TranslateError};
use crate::script::ScriptSink;

pub mod direct;
pub mod tableau;

pub use direct::DirectChaining;
pub use tableau::TableauEmbedding;

/// Columns added per opened block
pub const INDENT: usize = 2;

/// Proof method used to justify every generated step
pub const CLOSING_TACTIC: &str = "metis";

/// Reconstruction algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    DirectChaining,
    #[default]
    TableauEmbedding,
}

impl std::str::FromStr for Method {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "direct" | "chaining" => Ok(Method::DirectChaining),
            "tableau" | "core" => Ok(Method::TableauEmbedding),
            _ => Err(TranslateError::Configuration(format!("unknown method: {}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::DirectChaining => write!(f, "direct"),
            Method::TableauEmbedding => write!(f, "tableau"),
        }
    }
}

/// What a method reports once the script is closed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSummary {
    /// Numbered rules emitted by the drain loop
    pub rules: usize,
    /// Final unsatisfiable core, in citation order
    pub core: Vec<String>,
    /// Core length after each drain iteration
    pub core_sizes: Vec<usize>,
}

/// Common interface of the reconstruction methods
pub trait ProofMethod {
    fn method(&self) -> Method;

    /// Process the next node in file order. `node` is already in `graph`.
    fn step(
        &mut self,
        node: &AnnotatedFormula,
        graph: &ProofGraph,
        sink: &mut dyn ScriptSink,
    ) -> Result<()>;

    /// Emit the closing part of the script after the last node
    fn finish(&mut self, graph: &ProofGraph, sink: &mut dyn ScriptSink) -> Result<MethodSummary>;
}

/// Factory for reconstruction methods
pub struct MethodFactory;

impl MethodFactory {
    pub fn create(method: Method, label: Option<String>) -> Box<dyn ProofMethod> {
        let outline = Outline::new(label);
        match method {
            Method::DirectChaining => Box::new(DirectChaining::new(outline)),
            Method::TableauEmbedding => Box::new(TableauEmbedding::new(outline)),
        }
    }
}

/// Script skeleton shared by both methods: the lemma header, root clauses
/// and the two nested refutation blocks.
#[derive(Debug, Default)]
pub struct Outline {
    label: Option<String>,
    started: bool,
    conjecture: Option<String>,
    open_blocks: usize,
    /// Standing assumptions (axioms and definitions), in order of appearance
    theory: IndexSet<String>,
}

impl Outline {
    pub fn new(label: Option<String>) -> Self {
        Outline {
            label,
            ..Default::default()
        }
    }

    pub fn theory(&self) -> &IndexSet<String> {
        &self.theory
    }

    pub fn conjecture(&self) -> Option<&str> {
        self.conjecture.as_deref()
    }

    pub fn open_blocks(&self) -> usize {
        self.open_blocks
    }

    /// Emit the lemma header before the first node
    pub fn begin(&mut self, sink: &mut dyn ScriptSink) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        match &self.label {
            Some(label) => sink.line(&format!("lemma {}:", label))?,
            None => sink.line("lemma")?,
        }
        sink.indent(INDENT);
        Ok(())
    }

    /// Emit a clause without parents
    pub fn root(&mut self, node: &AnnotatedFormula, sink: &mut dyn ScriptSink) -> Result<()> {
        match &node.role {
            Role::Axiom | Role::Definition => {
                let keyword = if self.open_blocks == 0 { "assumes" } else { "assume" };
                sink.line(&format!("{} {}: \"{}\"", keyword, node.name, node.formula))?;
                self.theory.insert(node.name.clone());
                Ok(())
            }
            Role::Conjecture => {
                if let Some(first) = &self.conjecture {
                    return Err(TranslateError::MultipleConjectures {
                        first: first.clone(),
                        second: node.name.clone(),
                    });
                }
                self.conjecture = Some(node.name.clone());
                if self.open_blocks > 0 {
                    // refutation already opened on `shows False`
                    warn!(name = %node.name, "conjecture after first derived clause");
                    return sink.line(&format!("assume {}: \"~ ({})\"", node.name, node.formula));
                }
                sink.line(&format!("shows \"{}\"", node.formula))?;
                sink.dedent(INDENT);
                sink.line("proof (rule ccontr)")?;
                sink.indent(INDENT);
                self.open_blocks += 1;
                sink.line(&format!("assume {}: \"~ ({})\"", node.name, node.formula))?;
                self.reduce_to_false(sink)
            }
            Role::Derived(role) => Err(TranslateError::UnsupportedRole {
                name: node.name.clone(),
                role: role.clone(),
            }),
        }
    }

    fn reduce_to_false(&mut self, sink: &mut dyn ScriptSink) -> Result<()> {
        sink.line("show False")?;
        sink.line("proof -")?;
        sink.indent(INDENT);
        self.open_blocks += 1;
        Ok(())
    }

    /// Without a conjecture the lemma refutes its assumptions directly
    pub fn ensure_refutation(&mut self, sink: &mut dyn ScriptSink) -> Result<()> {
        self.begin(sink)?;
        if self.open_blocks > 0 {
            return Ok(());
        }
        sink.line("shows False")?;
        sink.dedent(INDENT);
        sink.line("proof -")?;
        sink.indent(INDENT);
        self.open_blocks += 1;
        Ok(())
    }

    /// Final `show False` when no rule chain discharges it
    pub fn conclude_by_contradiction(&self, sink: &mut dyn ScriptSink, chained: bool) -> Result<()> {
        let prefix = if chained { "then " } else { "" };
        sink.line(&format!("{}show False by {}", prefix, CLOSING_TACTIC))
    }

    /// Close every block opened so far
    pub fn close(&mut self, sink: &mut dyn ScriptSink) -> Result<()> {
        while self.open_blocks > 0 {
            sink.dedent(INDENT);
            sink.line("qed")?;
            self.open_blocks -= 1;
        }
        Ok(())
    }
}
