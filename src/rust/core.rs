// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types for proof reconstruction: annotated clauses and the proof graph

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::error::{Result, TranslateError};

/// TPTP language tag of a clause line
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// First-order formula
    Fof,
    /// Clause normal form
    Cnf,
}

impl std::str::FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fof" => Ok(Language::Fof),
            "cnf" => Ok(Language::Cnf),
            _ => Err(TranslateError::malformed(s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Fof => write!(f, "fof"),
            Language::Cnf => write!(f, "cnf"),
        }
    }
}

/// Role of a clause in the proof
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub enum Role {
    Axiom,
    Definition,
    Conjecture,
    /// Any other role (`plain`, `negated_conjecture`, ...), kept verbatim.
    /// Only acceptable on clauses that have parents.
    Derived(String),
}

impl Role {
    pub fn parse(s: &str) -> Role {
        match s {
            "axiom" => Role::Axiom,
            "definition" => Role::Definition,
            "conjecture" => Role::Conjecture,
            other => Role::Derived(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Axiom => "axiom",
            Role::Definition => "definition",
            Role::Conjecture => "conjecture",
            Role::Derived(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parsed clause of the proof trace
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnnotatedFormula {
    pub language: Language,
    pub name: String,
    pub role: Role,
    /// Clause text in target notation
    pub formula: String,
    /// Clause text exactly as it appeared in the trace
    pub raw_formula: String,
    pub raw_annotation: String,
    /// Cited clause names, in annotation order. Empty for input clauses.
    pub parents: Vec<String>,
    /// 1-based input line number
    pub line: usize,
}

impl AnnotatedFormula {
    /// A root clause was supplied externally rather than derived
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

impl fmt::Display for AnnotatedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.language, self.name, self.role, self.formula)?;
        if !self.parents.is_empty() {
            write!(f, " <- [{}]", self.parents.join(", "))?;
        }
        Ok(())
    }
}

/// Name-indexed proof graph, in file order.
///
/// Append-only: nodes are never edited or removed once inserted.
#[derive(Debug, Clone, Default)]
pub struct ProofGraph {
    nodes: IndexMap<String, AnnotatedFormula>,
}

impl ProofGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, rejecting redefinitions and forward references
    pub fn insert(&mut self, node: AnnotatedFormula) -> Result<()> {
        if self.contains(&node.name) {
            return Err(TranslateError::DuplicateNode { name: node.name });
        }
        if let Some(parent) = node.parents.iter().find(|p| !self.contains(p)) {
            return Err(TranslateError::UnresolvedParent {
                name: node.name.clone(),
                parent: parent.clone(),
            });
        }
        self.nodes.insert(node.name.clone(), node);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AnnotatedFormula> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The clause cited in place of `name` when closing the proof:
    /// the node itself if it is a root, otherwise its first parent.
    pub fn tip(&self, name: &str) -> Option<&str> {
        let node = self.nodes.get(name)?;
        Some(node.parents.first().map(String::as_str).unwrap_or(node.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in file order
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedFormula> {
        self.nodes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, role: Role, parents: &[&str]) -> AnnotatedFormula {
        AnnotatedFormula {
            language: Language::Cnf,
            name: name.to_string(),
            role,
            formula: "p".to_string(),
            raw_formula: "p".to_string(),
            raw_annotation: String::new(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            line: 1,
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::parse("axiom"), Role::Axiom);
        assert_eq!(Role::parse("conjecture"), Role::Conjecture);
        assert_eq!(Role::parse("plain"), Role::Derived("plain".to_string()));
        assert_eq!(Role::parse("negated_conjecture").as_str(), "negated_conjecture");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut graph = ProofGraph::new();
        graph.insert(node("c_0_3", Role::Axiom, &[])).unwrap();
        let err = graph.insert(node("c_0_3", Role::Axiom, &[])).unwrap_err();
        assert!(matches!(err, TranslateError::DuplicateNode { name } if name == "c_0_3"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut graph = ProofGraph::new();
        let err = graph
            .insert(node("c_0_2", Role::Derived("plain".into()), &["c_0_1"]))
            .unwrap_err();
        assert!(matches!(err, TranslateError::UnresolvedParent { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_contains_after_rejected_insert() {
        let mut graph = ProofGraph::new();
        graph.insert(node("c_0_3", Role::Axiom, &[])).unwrap();
        assert!(graph
            .insert(node("c_0_4", Role::Derived("plain".into()), &["c_0_3", "c_0_1"]))
            .is_err());

        assert!(graph.contains("c_0_3"));
        assert!(!graph.contains("c_0_4"));
        assert!(!graph.contains("c_0_1"));

        graph.insert(node("c_0_4", Role::Derived("plain".into()), &["c_0_3"])).unwrap();
        assert!(graph.contains("c_0_4"));
    }

    #[test]
    fn test_node_json_dump() {
        let mut clause = node("c_0_5", Role::Derived("plain".into()), &["c_0_3"]);
        clause.line = 7;
        let json = serde_json::to_value(&clause).unwrap();

        assert_eq!(json["language"], "cnf");
        assert_eq!(json["name"], "c_0_5");
        assert_eq!(json["role"]["Derived"], "plain");
        assert_eq!(json["parents"][0], "c_0_3");
        assert_eq!(json["line"], 7);
        assert_eq!(serde_json::to_value(Role::Axiom).unwrap(), "Axiom");
    }

    #[test]
    fn test_tip() {
        let mut graph = ProofGraph::new();
        graph.insert(node("a", Role::Axiom, &[])).unwrap();
        graph.insert(node("b", Role::Axiom, &[])).unwrap();
        graph.insert(node("c", Role::Derived("plain".into()), &["b", "a"])).unwrap();

        assert_eq!(graph.tip("a"), Some("a"));
        assert_eq!(graph.tip("c"), Some("b"));
        assert_eq!(graph.tip("missing"), None);
    }

    #[test]
    fn test_iteration_keeps_file_order() {
        let mut graph = ProofGraph::new();
        for name in ["z", "a", "m"] {
            graph.insert(node(name, Role::Axiom, &[])).unwrap();
        }
        let names: Vec<&str> = graph.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
