// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Direct chaining: every derived clause becomes one justified step

use tracing::debug;

use super::{Method, MethodSummary, Outline, ProofMethod, CLOSING_TACTIC};
use crate::core::{AnnotatedFormula, ProofGraph};
use crate::error::Result;
use crate::script::ScriptSink;

pub struct DirectChaining {
    outline: Outline,
    steps: usize,
}

impl DirectChaining {
    pub fn new(outline: Outline) -> Self {
        DirectChaining { outline, steps: 0 }
    }
}

impl ProofMethod for DirectChaining {
    fn method(&self) -> Method {
        Method::DirectChaining
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
        debug!(name = %node.name, parents = ?node.parents, "chaining step");
        sink.line(&format!(
            "from {} have {}: \"{}\" by {}",
            node.parents.join(" "),
            node.name,
            node.formula,
            CLOSING_TACTIC
        ))?;
        self.steps += 1;
        Ok(())
    }

    fn finish(&mut self, _graph: &ProofGraph, sink: &mut dyn ScriptSink) -> Result<MethodSummary> {
        self.outline.ensure_refutation(sink)?;
        self.outline.conclude_by_contradiction(sink, self.steps > 0)?;
        self.outline.close(sink)?;
        Ok(MethodSummary::default())
    }
}
