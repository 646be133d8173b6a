// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Clause lines of a TSTP proof trace
//!
//! Grammar: `<language>(<name>, <role>, <formula>, <annotation>).`

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{map_res, rest},
    sequence::delimited,
    IResult,
};

use crate::core::Language;
use crate::error::{Result, TranslateError};

/// The five fields of one clause line, not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClause {
    pub language: Language,
    pub name: String,
    pub role: String,
    pub formula: String,
    pub annotation: String,
}

/// Parse one input line.
///
/// Blank lines and `%`/`#` comment lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<RawClause>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
        return Ok(None);
    }

    match clause(trimmed) {
        Ok((_, raw)) => Ok(Some(raw)),
        Err(_) => Err(TranslateError::malformed(line)),
    }
}

fn clause(input: &str) -> IResult<&str, RawClause> {
    let (input, language) = map_res(alt((tag("fof"), tag("cnf"))), str::parse::<Language>)(input)?;
    let (input, _) = char('(')(input)?;
    let (input, name) = field(clause_name)(input)?;
    let (input, _) = char(',')(input)?;
    let (input, role) = field(take_while1(|c: char| c.is_alphanumeric() || c == '_'))(input)?;
    let (input, _) = char(',')(input)?;
    let (input, (formula, annotation)) = map_res(rest, split_body)(input)?;
    Ok((
        input,
        RawClause {
            language,
            name: name.to_string(),
            role: role.to_string(),
            formula,
            annotation,
        },
    ))
}

fn field<'a, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str>
where
    F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
{
    delimited(multispace0, inner, multispace0)
}

fn clause_name(input: &str) -> IResult<&str, &str> {
    alt((
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        delimited(char('\''), take_while1(|c: char| c != '\''), char('\'')),
    ))(input)
}

/// Split `<formula>, <annotation>).` at the first top-level comma
fn split_body(body: &str) -> std::result::Result<(String, String), &'static str> {
    let inner = body
        .trim_end()
        .strip_suffix('.')
        .and_then(|b| b.trim_end().strip_suffix(')'))
        .ok_or("clause must end with `).`")?;
    let comma = top_level_comma(inner).ok_or("missing annotation")?;
    let formula = inner[..comma].trim();
    let annotation = inner[comma + 1..].trim();
    if formula.is_empty() || annotation.is_empty() {
        return Err("empty formula or annotation");
    }
    Ok((formula.to_string(), annotation.to_string()))
}

/// Byte offset of the first comma outside brackets and quotes
fn top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
