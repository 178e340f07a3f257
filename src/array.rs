//! The array sub-parser: splits a bracketed literal into top-level element
//! substrings and delegates leaves to the value decoder.
//!
//! The splitter is a single left-to-right scan tracking nested-bracket depth
//! and both quote states, so commas inside strings or nested arrays never
//! split. Serialization mirrors the grammar with a single-line and a
//! multi-line layout.

use crate::emitter::TomlEmitter;
use crate::error::{Error, Result};
use crate::options::TomlOptions;
use crate::value::{TomlValue, ValueKind};

/// Parses the raw bracketed literal into decoded elements.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the literal has an odd number of double or
/// single quotes (an unterminated quoted element) — checked before any
/// element is constructed — or when any element fails to decode.
pub(crate) fn parse_array(
    raw: &str,
    line: usize,
    options: &TomlOptions,
) -> Result<Vec<TomlValue>> {
    validate_quote_parity(raw, line)?;
    parse_elements(raw, line, options)
}

fn parse_elements(raw: &str, line: usize, options: &TomlOptions) -> Result<Vec<TomlValue>> {
    let mut elements = Vec::new();
    for piece in split_top_level(trim_brackets(raw.trim())) {
        let piece = piece.trim();
        if piece.starts_with('[') {
            let nested = parse_elements(piece, line, options)?;
            elements.push(TomlValue::new(ValueKind::Array(nested), line));
        } else {
            elements.push(TomlValue::from_literal(piece, line, options)?);
        }
    }
    Ok(elements)
}

/// Each quote character must appear an even number of times in the raw
/// literal, or some quoted element never closed.
fn validate_quote_parity(raw: &str, line: usize) -> Result<()> {
    let double_quotes = raw.chars().filter(|ch| *ch == '"').count();
    let single_quotes = raw.chars().filter(|ch| *ch == '\'').count();
    if double_quotes % 2 != 0 || single_quotes % 2 != 0 {
        return Err(Error::parse(
            format!("unable to parse array <{raw}>: an element is missing its closing quote"),
            line,
        ));
    }
    Ok(())
}

fn trim_brackets(literal: &str) -> &str {
    let literal = literal.strip_prefix('[').unwrap_or(literal);
    literal.strip_suffix(']').unwrap_or(literal)
}

/// Splits the bracket-trimmed body into top-level element substrings.
///
/// An all-blank body yields no elements at all, so `[]` is an empty array
/// rather than one blank element.
fn split_top_level(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut depth = 0u32;
    let mut in_basic = false;
    let mut in_literal = false;
    let mut buffer = String::new();
    let mut result = Vec::new();
    let mut prev = '\0';

    for current in body.chars() {
        match current {
            '[' => {
                depth += 1;
                buffer.push(current);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                buffer.push(current);
            }
            '\'' => {
                if !in_basic {
                    in_literal = !in_literal;
                }
                buffer.push(current);
            }
            '"' => {
                // A double quote inside a literal string is plain content.
                if !in_literal {
                    if !in_basic {
                        in_basic = true;
                    } else if prev != '\\' {
                        in_basic = false;
                    }
                }
                buffer.push(current);
            }
            ',' if depth == 0 && !in_basic && !in_literal => {
                result.push(std::mem::take(&mut buffer));
            }
            other => buffer.push(other),
        }
        prev = current;
    }
    result.push(buffer);
    result
}

/// Writes the elements back out between brackets.
///
/// Single-line: elements separated by the delimiter with surrounding
/// whitespace. Multi-line: one indentation level deeper, one element per
/// line, the delimiter trailing every element but the last, and the closing
/// bracket back at the original indentation. Nested arrays of a multi-line
/// parent are themselves multi-line.
pub(crate) fn write_array(
    elements: &[TomlValue],
    emitter: &mut dyn TomlEmitter,
    options: &TomlOptions,
    multiline: bool,
) -> Result<()> {
    emitter.start_array();
    let last = elements.len().saturating_sub(1);

    if multiline {
        emitter.indent();
        for (i, element) in elements.iter().enumerate() {
            emitter.emit_new_line();
            emitter.emit_indent();
            element.write(emitter, options, element.is_array())?;
            if i < last {
                emitter.emit_element_delimiter();
            }
        }
        emitter.dedent();
        emitter.emit_new_line();
        emitter.emit_indent();
    } else {
        for (i, element) in elements.iter().enumerate() {
            emitter.emit_whitespace();
            element.write(emitter, options, false)?;
            if i < last {
                emitter.emit_element_delimiter();
            }
        }
        emitter.emit_whitespace();
    }

    emitter.end_array();
    Ok(())
}
