// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Annotation (justification) terms of TSTP clauses
//!
//! The annotation says where a clause came from: `file(...)` for input
//! clauses, `inference(rule, [status], [parents])` for derived ones, or a
//! bare name pointing at an earlier clause. E may append a useful-info list
//! such as `['proof']` after it.

use indexmap::IndexSet;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated},
    IResult,
};
use tracing::debug;

use crate::error::{Result, TranslateError};

/// Cited by E next to the empty clause; never a clause name
const GOAL_SENTINEL: &str = "proof";

/// Generic tree of an annotation term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Atom(String),
    /// `f(a, b)` is stored as `List[Atom(f), a, b]`, `[a, b]` as `List[a, b]`
    List(Vec<Annotation>),
}

impl Annotation {
    fn head(&self) -> Option<&str> {
        match self {
            Annotation::List(items) => match items.first() {
                Some(Annotation::Atom(head)) => Some(head.as_str()),
                _ => None,
            },
            Annotation::Atom(_) => None,
        }
    }

    /// Drop every `theory(...)` sub-term
    pub fn without_theory(self) -> Annotation {
        match self {
            Annotation::List(items) => Annotation::List(
                items
                    .into_iter()
                    .filter(|item| item.head() != Some("theory"))
                    .map(Annotation::without_theory)
                    .collect(),
            ),
            atom => atom,
        }
    }

    /// Input clauses are cited as `file(...)` or `introduced(...)`
    fn is_external_source(&self) -> bool {
        match self {
            Annotation::List(items) => items
                .first()
                .and_then(Annotation::head)
                .map_or(false, |head| head == "file" || head == "introduced"),
            Annotation::Atom(_) => false,
        }
    }
}

/// Parse a raw annotation into its tree.
///
/// The result is always a list of the top-level terms, so `c_0_5` becomes
/// `List[Atom(c_0_5)]`.
pub fn parse_annotation(raw: &str) -> Result<Annotation> {
    let (_, terms) = all_consuming(terminated(arguments, multispace0))(raw)
        .map_err(|e| TranslateError::annotation(raw, format!("{:?}", e)))?;
    Ok(Annotation::List(terms))
}

/// Names of the clauses an annotation cites, in order and without repeats
pub fn parents(raw: &str) -> Result<Vec<String>> {
    let tree = parse_annotation(raw)?.without_theory();
    debug!(annotation = raw, tree = ?tree, "parsed annotation");

    if tree.is_external_source() {
        debug!(annotation = raw, "external source, no parents");
        return Ok(Vec::new());
    }

    // trailing terms are useful-info, never citations
    let source = match &tree {
        Annotation::List(terms) => terms.first(),
        atom => Some(atom),
    };
    let mut names = IndexSet::new();
    if let Some(source) = source {
        collect(source, raw, &mut names)?;
    }
    debug!(annotation = raw, parents = ?names, "extracted parents");
    Ok(names.into_iter().collect())
}

fn collect(node: &Annotation, raw: &str, names: &mut IndexSet<String>) -> Result<()> {
    match node {
        Annotation::Atom(name) => {
            if name != GOAL_SENTINEL {
                names.insert(name.clone());
            }
            Ok(())
        }
        Annotation::List(items) if node.head() == Some("inference") => {
            // inference(rule, status, parents)
            let cited = items.get(3).ok_or_else(|| {
                TranslateError::annotation(raw, "inference term without a parent list")
            })?;
            collect(cited, raw, names)
        }
        Annotation::List(items) => {
            for item in items {
                collect(item, raw, names)?;
            }
            Ok(())
        }
    }
}

// Parser implementation
fn term(input: &str) -> IResult<&str, Annotation> {
    preceded(multispace0, alt((bracket_list, quoted, application)))(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<Annotation>> {
    separated_list0(preceded(multispace0, char(',')), term)(input)
}

fn bracket_list(input: &str) -> IResult<&str, Annotation> {
    map(
        delimited(char('['), arguments, preceded(multispace0, char(']'))),
        Annotation::List,
    )(input)
}

fn quoted(input: &str) -> IResult<&str, Annotation> {
    let single = delimited(char('\''), take_while(|c: char| c != '\''), char('\''));
    let double = delimited(char('"'), take_while(|c: char| c != '"'), char('"'));
    map(alt((single, double)), |s: &str| Annotation::Atom(s.to_string()))(input)
}

fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '-' | '+'))(input)
}

fn application(input: &str) -> IResult<&str, Annotation> {
    let (input, head) = symbol(input)?;
    let (input, args) = opt(delimited(
        char('('),
        arguments,
        preceded(multispace0, char(')')),
    ))(input)?;
    let head = Annotation::Atom(head.to_string());
    Ok((
        input,
        match args {
            Some(args) => Annotation::List(std::iter::once(head).chain(args).collect()),
            None => head,
        },
    ))
}
