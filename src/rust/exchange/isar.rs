// SPDX-License-Identifier: PMPL-1.0-or-later

//! TPTP to Isabelle/HOL surface syntax
//!
//! Rewrites one clause's text from the notation E prints into the ASCII
//! notation Isabelle's HOL parser accepts. The rewrite is three structural
//! passes run in a fixed order:
//!
//! 1. quantifier scopes get an explicit enclosing group,
//! 2. `f(a,b)` applications become curried `(f a b)`,
//! 3. connectives, constants and binders are substituted.
//!
//! Every pass is total: text that no rule matches is copied unchanged.

/// Translate a clause from TPTP notation to Isabelle/HOL notation
pub fn translate(raw: &str) -> String {
    let rebracketed = rebracket_quantifiers(raw);
    let curried = curry_applications(&rebracketed);
    substitute_symbols(&curried)
}

/// Wrap every quantifier and its scope in an explicit group.
///
/// A quantifier opened at paren depth `d` is closed right after the first
/// `)` that brings the depth back to `d`, or right before the `)` that
/// closes the group it lives in, or at the end of the text.
pub fn rebracket_quantifiers(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut depth = 0usize;
    let mut scopes: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i = copy_quoted(&chars, i, &mut out);
                continue;
            }
            '!' | '?' if chars.get(i + 1) != Some(&'=') => {
                out.push('(');
                out.push(c);
                scopes.push(depth);
            }
            '(' => {
                depth += 1;
                out.push(c);
            }
            ')' => {
                close_scopes_at(&mut scopes, depth, &mut out);
                depth = depth.saturating_sub(1);
                out.push(c);
                close_scopes_at(&mut scopes, depth, &mut out);
            }
            _ => out.push(c),
        }
        i += 1;
    }

    for _ in scopes.drain(..) {
        out.push(')');
    }
    out
}

fn close_scopes_at(scopes: &mut Vec<usize>, depth: usize, out: &mut String) {
    while scopes.last() == Some(&depth) {
        scopes.pop();
        out.push(')');
    }
}

/// Curry function and predicate applications: `f(a,g(b))` becomes `(f a (g b))`.
///
/// Commas left over afterwards (quantifier variable lists) become spaces.
pub fn curry_applications(input: &str) -> String {
    let curried = curry(input);
    let chars: Vec<char> = curried.chars().collect();
    let mut out = String::with_capacity(curried.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\'' | '"' => {
                i = copy_quoted(&chars, i, &mut out);
                continue;
            }
            ',' => out.push(' '),
            c => out.push(c),
        }
        i += 1;
    }
    out
}

fn curry(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' || c == '"' {
            i = copy_quoted(&chars, i, &mut out);
            continue;
        }

        let at_boundary = i == 0 || !is_symbol_char(chars[i - 1]);
        if c.is_ascii_lowercase() && at_boundary {
            let end = (i..chars.len())
                .find(|&j| !is_symbol_char(chars[j]))
                .unwrap_or(chars.len());
            let name: String = chars[i..end].iter().collect();

            if chars.get(end) == Some(&'(') {
                if let Some(close) = matching_paren(&chars, end) {
                    let inner: String = chars[end + 1..close].iter().collect();
                    out.push('(');
                    out.push_str(&name);
                    for arg in split_top_level(&inner) {
                        let arg = arg.trim();
                        if !arg.is_empty() {
                            out.push(' ');
                            out.push_str(&curry(arg));
                        }
                    }
                    out.push(')');
                    i = close + 1;
                    continue;
                }
            }

            out.push_str(&name);
            i = end;
            continue;
        }

        out.push(c);
        i += 1;
    }
    out
}

/// Replace TPTP connectives, constants and binders with their HOL forms
pub fn substitute_symbols(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        if rest[0] == '\'' || rest[0] == '"' {
            i = copy_quoted(&chars, i, &mut out);
            continue;
        }

        if let Some((len, replacement)) = SUBSTITUTIONS
            .iter()
            .find(|(pattern, _)| starts_with(rest, pattern))
            .map(|(pattern, replacement)| (pattern.chars().count(), *replacement))
        {
            out.push_str(replacement);
            i += len;
            continue;
        }

        if let Some((len, binder)) = match_binder(rest) {
            out.push_str(&binder);
            i += len;
            continue;
        }

        out.push(rest[0]);
        i += 1;
    }
    out
}

// Longer patterns first: `<=>` must win over `=>`.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("$false", "False"),
    ("$true", "True"),
    ("<=>", "="),
    ("=>", "-->"),
    ("!=", "~="),
];

/// `! [X Y] :` becomes `! X Y .`
fn match_binder(rest: &[char]) -> Option<(usize, String)> {
    let quantifier = *rest.first()?;
    if quantifier != '!' && quantifier != '?' {
        return None;
    }
    let mut i = skip_spaces(rest, 1);
    if rest.get(i) != Some(&'[') {
        return None;
    }
    let close = i + rest[i..].iter().position(|&c| c == ']')?;
    let vars: String = rest[i + 1..close].iter().collect();
    i = skip_spaces(rest, close + 1);
    if rest.get(i) != Some(&':') {
        return None;
    }
    let vars = vars.split_whitespace().collect::<Vec<_>>().join(" ");
    Some((i + 1, format!("{} {} .", quantifier, vars)))
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).map_or(false, |c| c.is_whitespace()) {
        i += 1;
    }
    i
}

fn starts_with(chars: &[char], pattern: &str) -> bool {
    let mut it = chars.iter();
    pattern.chars().all(|p| it.next() == Some(&p))
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Copy a quoted span starting at `start`, return the index after it
fn copy_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    out.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if c == '\\' {
            if let Some(&escaped) = chars.get(i) {
                out.push(escaped);
                i += 1;
            }
        } else if c == quote {
            break;
        }
    }
    i
}

fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (j, &c) in chars.iter().enumerate().skip(open) {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split at commas outside of any `()`/`[]` group or quoted span
fn split_top_level(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantified_implication() {
        assert_eq!(
            translate("![X]: (p(X) => q(X))"),
            "(! X . ((p X) --> (q X)))"
        );
    }

    #[test]
    fn test_rebracket_unparenthesized_scope() {
        assert_eq!(rebracket_quantifiers("![X]:p(X)"), "(![X]:p(X))");
        assert_eq!(rebracket_quantifiers("![X]:p(X)|q"), "(![X]:p(X))|q");
    }

    #[test]
    fn test_rebracket_scope_closed_by_enclosing_group() {
        assert_eq!(rebracket_quantifiers("(![X]:X=a)"), "((![X]:X=a))");
    }

    #[test]
    fn test_rebracket_nested_quantifiers() {
        assert_eq!(
            rebracket_quantifiers("![X]:?[Y]:(r(X,Y))"),
            "(![X]:(?[Y]:(r(X,Y))))"
        );
    }

    #[test]
    fn test_rebracket_open_at_end() {
        assert_eq!(rebracket_quantifiers("?[X]:X=a"), "(?[X]:X=a)");
    }

    #[test]
    fn test_not_equal_is_not_a_quantifier() {
        assert_eq!(rebracket_quantifiers("a!=b"), "a!=b");
        assert_eq!(translate("(esk1_0!=a)"), "(esk1_0~=a)");
    }

    #[test]
    fn test_curry_nested_and_sibling() {
        assert_eq!(curry_applications("p(f(X,a),g(Y))"), "(p (f X a) (g Y))");
        assert_eq!(curry_applications("p(X)|q(Y,Z)"), "(p X)|(q Y Z)");
    }

    #[test]
    fn test_curry_leaves_variables_and_constants() {
        assert_eq!(curry_applications("X=esk1_0"), "X=esk1_0");
        assert_eq!(curry_applications("[X,Y]"), "[X Y]");
    }

    #[test]
    fn test_curry_is_idempotent() {
        let once = curry_applications("p(f(X),Y)");
        assert_eq!(curry_applications(&once), once);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(substitute_symbols("$false"), "False");
        assert_eq!(substitute_symbols("$true"), "True");
        assert_eq!(substitute_symbols("a <=> b"), "a = b");
        assert_eq!(substitute_symbols("a => b"), "a --> b");
        assert_eq!(substitute_symbols("a != b"), "a ~= b");
        assert_eq!(substitute_symbols("?[X Y]: p"), "? X Y . p");
    }

    #[test]
    fn test_symbols_idempotent() {
        let once = substitute_symbols("(! [X] : (a <=> b) => c != d | $false)");
        assert_eq!(substitute_symbols(&once), once);
    }

    #[test]
    fn test_multi_variable_binder() {
        assert_eq!(
            translate("![X,Y]:(r(X,Y)<=>r(Y,X))"),
            "(! X Y .((r X Y)=(r Y X)))"
        );
    }

    #[test]
    fn test_cnf_clause_passes_connectives() {
        assert_eq!(
            translate("(~p(X)|q(f(X)))"),
            "(~(p X)|(q (f X)))"
        );
    }

    #[test]
    fn test_quoted_text_untouched() {
        assert_eq!(translate("p('a,b')"), "(p 'a,b')");
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level("a,f(b,c),[d,e]"),
            vec!["a".to_string(), "f(b,c)".to_string(), "[d,e]".to_string()]
        );
    }
}
