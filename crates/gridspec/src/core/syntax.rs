//! Lexical helpers for the grid sizing mini-language
//!
//! Splitting a specification into entries, separating an entry's option
//! block, and recognizing numbers. Numbers are matched with chumsky so the
//! accepted syntax is spelled out in one place.

use chumsky::prelude::*;

/// Parse inline whitespace only (spaces and tabs).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just(' ').or(just('\t')).repeated().ignored()
}

/// Parse one or more ASCII digits.
fn digits<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .ignored()
}

/// Parse a decimal number literal and return the matched text.
///
/// Accepts an optional sign, an integer and/or fractional part (`5`, `5.`,
/// `.5`, `5.25`) and an optional exponent (`1e3`, `2.5E-2`).
pub fn number_literal<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    let sign = one_of("+-").or_not();

    let mantissa = digits()
        .then(just('.').then(digits().or_not()).or_not())
        .ignored()
        .or(just('.').then(digits()).ignored());

    let exponent = one_of("eE")
        .then(one_of("+-").or_not())
        .then(digits())
        .or_not();

    sign.then(mantissa).then(exponent).to_slice()
}

/// Parse the whole of `text` as a finite number.
///
/// Surrounding spaces and tabs are allowed. Returns `None` for anything else,
/// including values that overflow to infinity.
pub fn parse_number(text: &str) -> Option<f64> {
    let literal = number_literal()
        .padded_by(inline_whitespace())
        .then_ignore(end())
        .parse(text)
        .into_result()
        .ok()?;

    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Split a specification into its comma-separated entries.
///
/// A comma between a `(` and the next `)` belongs to that entry's option
/// block. An unmatched `(` protects nothing.
pub fn split_entries(input: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut group_end: Option<usize> = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' if group_end.is_none() => {
                group_end = input[i..].find(')').map(|offset| i + offset);
            }
            ')' if group_end == Some(i) => group_end = None,
            ',' if group_end.is_none() => {
                entries.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    entries.push(&input[start..]);
    entries
}

/// An entry split around its option block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryParts<'a> {
    /// Text before the option block (the whole entry if there is none)
    pub size: &'a str,
    /// Text strictly between the first `(` and the first `)`
    pub options: Option<&'a str>,
    /// Text after the closing `)`, ignored by the parser
    pub trailing: &'a str,
}

/// Locate the option block of an entry.
///
/// Uses the first `(` and the first `)`. When either is missing, or the `)`
/// comes first, the entry has no option block.
pub fn split_options(entry: &str) -> EntryParts<'_> {
    match (entry.find('('), entry.find(')')) {
        (Some(open), Some(close)) if open < close => EntryParts {
            size: &entry[..open],
            options: Some(&entry[open + 1..close]),
            trailing: &entry[close + 1..],
        },
        _ => EntryParts {
            size: entry,
            options: None,
            trailing: "",
        },
    }
}
