//! Token-level parsing: literals and head decomposition.

use crate::value::Value;

/// Parse a bare token as a literal, if it matches one of the literal
/// conventions.
///
/// - Quoted text: a leading `'` or `"`, with an optional matching trailing
///   quote.
/// - Numeric: digits with comma separators, at most one leading minus and
///   one decimal point; a point makes it a Decimal, otherwise a Number.
/// - Boolean keywords `TRUE`/`FALSE`/`ON`/`OFF`, any case.
/// - Void keywords `VOID`/`NONE`/`NOTHING`/`EMPTY`, uppercase only.
pub(crate) fn parse_literal(token: &str) -> Option<Value> {
    for quote in ['\'', '"'] {
        if let Some(rest) = token.strip_prefix(quote) {
            let inner = rest.strip_suffix(quote).unwrap_or(rest);
            return Some(Value::Text(inner.to_string()));
        }
    }
    if let Some(value) = parse_numeric(token) {
        return Some(value);
    }
    match token.to_ascii_uppercase().as_str() {
        "TRUE" | "ON" => return Some(Value::Binary(true)),
        "FALSE" | "OFF" => return Some(Value::Binary(false)),
        _ => {}
    }
    if matches!(token, "VOID" | "NONE" | "NOTHING" | "EMPTY") {
        return Some(Value::Void);
    }
    None
}

fn parse_numeric(token: &str) -> Option<Value> {
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ','))
    {
        return None;
    }
    if token.matches('-').count() > 1 {
        return None;
    }
    if token.contains('-') && !token.starts_with('-') {
        return None;
    }
    let plain = token.replace(',', "");
    match token.matches('.').count() {
        0 => plain.parse().ok().map(Value::Number),
        1 => plain.parse().ok().map(Value::Decimal),
        _ => None,
    }
}

/// Split a head line into the callable name and the optional text between
/// the first `(` and its matching `)`. Empty parenthesis text counts as
/// absent.
pub(crate) fn split_head(head: &str) -> (&str, Option<&str>) {
    match head.split_once('(') {
        None => (head, None),
        Some((name, rest)) => {
            let inner = rest.split_once(')').map_or(rest, |(inner, _)| inner);
            (name, (!inner.is_empty()).then_some(inner))
        }
    }
}

/// Split structure argument text into raw comma-separated tokens.
pub(crate) fn split_tokens(text: &str) -> Vec<String> {
    text.replace(", ", ",")
        .split(',')
        .map(str::to_string)
        .collect()
}
