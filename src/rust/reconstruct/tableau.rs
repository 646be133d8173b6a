// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tableau embedding
//!
//! Derived clauses are not proved one by one. Each becomes a `let`
//! abbreviation and its name goes on a pending stack. Once the trace ends
//! the stack is drained from the top: every iteration emits one numbered
//! rule `rK: "?c1 ==> ... ==> False"` over the current core followed by
//! whatever is still pending, and the popped clause joins the core unless
//! all of its parents are still pending. The last rule then closes the
//! proof from the tips of the core.

use tracing::debug;

use super::{Method, MethodSummary, Outline, ProofMethod, CLOSING_TACTIC};
use crate::core::{AnnotatedFormula, ProofGraph};
use crate::error::Result;
use crate::script::ScriptSink;

pub struct TableauEmbedding {
    outline: Outline,
    pending: Vec<String>,
    core: Vec<String>,
    rules: usize,
}

impl TableauEmbedding {
    pub fn new(outline: Outline) -> Self {
        TableauEmbedding {
            outline,
            pending: Vec::new(),
            core: Vec::new(),
            rules: 0,
        }
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn core(&self) -> &[String] {
        &self.core
    }

    /// Every parent of `name` is still on the pending stack
    fn is_redundant(&self, name: &str, graph: &ProofGraph) -> bool {
        graph.get(name).map_or(false, |node| {
            node.parents.iter().all(|parent| self.pending.contains(parent))
        })
    }

    fn emit_rule(&self, sink: &mut dyn ScriptSink) -> Result<()> {
        let premises: Vec<String> = self
            .core
            .iter()
            .chain(self.pending.iter())
            .map(|name| format!("?{}", name))
            .chain(std::iter::once("False".to_string()))
            .collect();

        let mut facts: Vec<String> = Vec::new();
        if self.rules > 1 {
            facts.push(format!("r{}", self.rules - 1));
        }
        facts.extend(self.outline.theory().iter().cloned());

        let using = if facts.is_empty() {
            String::new()
        } else {
            format!(" using {}", facts.join(" "))
        };
        sink.line(&format!(
            "have r{}: \"{}\"{} by {}",
            self.rules,
            premises.join(" ==> "),
            using,
            CLOSING_TACTIC
        ))
    }
}

impl ProofMethod for TableauEmbedding {
    fn method(&self) -> Method {
        Method::TableauEmbedding
    }

    fn step(
        &mut self,
        node: &AnnotatedFormula,
        _graph: &ProofGraph,
        sink: &mut dyn ScriptSink,
    ) -> Result<()> {
        self.outline.begin(sink)?;
        if node.is_root() {
            return self.outline.root(node, sink);
        }

        self.outline.ensure_refutation(sink)?;
        self.pending.push(node.name.clone());
        debug!(name = %node.name, depth = self.pending.len(), "deferred");
        sink.line(&format!("let ?{} = \"{}\"", node.name, node.formula))
    }

    fn finish(&mut self, graph: &ProofGraph, sink: &mut dyn ScriptSink) -> Result<MethodSummary> {
        self.outline.ensure_refutation(sink)?;
        if self.pending.is_empty() {
            self.outline.conclude_by_contradiction(sink, false)?;
            self.outline.close(sink)?;
            return Ok(MethodSummary::default());
        }

        let mut core_sizes = Vec::with_capacity(self.pending.len());
        while let Some(top) = self.pending.last().cloned() {
            let redundant = self.is_redundant(&top, graph);
            self.pending.pop();
            if !redundant {
                self.core.push(top.clone());
            }
            self.rules += 1;
            debug!(rule = self.rules, name = %top, redundant, core = self.core.len(), "drain");
            self.emit_rule(sink)?;
            core_sizes.push(self.core.len());
        }

        let tips: Vec<&str> = self
            .core
            .iter()
            .map(|name| graph.tip(name).unwrap_or(name.as_str()))
            .collect();
        let closing = if tips.is_empty() {
            format!("show False by (rule r{})", self.rules)
        } else {
            format!("from {} show False by (rule r{})", tips.join(" "), self.rules)
        };
        sink.line(&closing)?;
        self.outline.close(sink)?;

        Ok(MethodSummary {
            rules: self.rules,
            core: self.core.clone(),
            core_sizes,
        })
    }
}
