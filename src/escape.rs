//! Escape sequence handling for basic and literal strings.
//!
//! Decoding turns the backslash escapes of a double-quoted (basic) string
//! into their characters; encoding reverses the mapping for output. Literal
//! (single-quoted) strings support no escapes at all, except the optional
//! `\'` extension gated by
//! [`TomlOptions::allow_escaped_quotes_in_literal_strings`].

use crate::error::{Error, Result};
use crate::options::TomlOptions;

/// Decodes all backslash escapes in the content of a basic string.
///
/// Recognized escapes: `\t`, `\b`, `\r`, `\n`, `\\`, `\'`, `\"`, `\uXXXX`
/// and `\UXXXXXXXX`. A backslash at the final position is kept literally.
/// Anything else after a backslash is a parse error.
///
/// # Errors
///
/// Returns [`Error::Parse`] for an unknown escape, an incomplete or non-hex
/// Unicode escape, or a hex value that is not a valid Unicode code point.
pub fn unescape_basic(text: &str, line: usize) -> Result<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        if current == '\\' && i + 1 < chars.len() {
            let next = chars[i + 1];
            i += 2;
            match next {
                't' => out.push('\t'),
                'b' => out.push('\u{0008}'),
                'r' => out.push('\r'),
                'n' => out.push('\n'),
                '\\' => out.push('\\'),
                '\'' => out.push('\''),
                '"' => out.push('"'),
                'u' | 'U' => i += push_unicode(&mut out, &chars, next, i, line)?,
                other => {
                    return Err(Error::parse(
                        format!("unknown escape sequence [\\{other}]"),
                        line,
                    ));
                }
            }
        } else {
            out.push(current);
            i += 1;
        }
    }

    Ok(out)
}

/// Decodes the code point of a `\u` (4 hex digits) or `\U` (8 hex digits)
/// escape starting at `start`, returning how many characters were consumed.
fn push_unicode(
    out: &mut String,
    chars: &[char],
    marker: char,
    start: usize,
    line: usize,
) -> Result<usize> {
    let len = if marker == 'u' { 4 } else { 8 };

    if start + len > chars.len() {
        let rest: String = chars[start - 1..].iter().collect();
        return Err(Error::parse(
            format!("incomplete unicode escape [\\{rest}]"),
            line,
        ));
    }

    let hex: String = chars[start..start + len].iter().collect();
    let code = u32::from_str_radix(&hex, 16).map_err(|_| {
        Error::parse(format!("invalid unicode escape [\\{marker}{hex}]"), line)
    })?;
    let decoded = char::from_u32(code).ok_or_else(|| {
        Error::parse(format!("invalid unicode code point [\\{marker}{hex}]"), line)
    })?;

    out.push(decoded);
    Ok(len)
}

/// Decodes the single-quote extension inside a literal string: `\'` becomes
/// `'`. Every other backslash is left untouched.
///
/// Callers apply this only when
/// [`TomlOptions::allow_escaped_quotes_in_literal_strings`] is set.
pub fn unescape_literal(text: &str) -> String {
    text.replace("\\'", "'")
}

/// Re-escapes decoded text for output inside a basic string.
///
/// Backslashes, double quotes, and control characters (excluding TAB) are
/// escaped; the short forms `\b`, `\n`, `\f`, `\r` are used where available
/// and any other control character becomes `\u` plus 4 zero-padded hex
/// digits.
pub fn escape_basic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            ch if is_control_other_than_tab(ch) => {
                out.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out
}

/// Verifies decoded text for output inside a literal string, escaping single
/// quotes when the extension is enabled.
///
/// # Errors
///
/// Returns [`Error::Write`] for control characters other than TAB, for any
/// backslash, and for a single quote when the extension is disabled.
pub fn escape_literal(text: &str, options: &TomlOptions) -> Result<String> {
    if text.chars().any(is_control_other_than_tab) {
        return Err(Error::write(
            "control characters (excluding tab) are not permitted in literal strings",
        ));
    }
    if text.contains('\\') {
        return Err(Error::write("escapes are not allowed in literal strings"));
    }
    if text.contains('\'') {
        return if options.allow_escaped_quotes_in_literal_strings {
            Ok(text.replace('\'', "\\'"))
        } else {
            Err(Error::write(
                "single quotes are not permitted in literal strings by default; \
                 enable allow_escaped_quotes_in_literal_strings to escape them",
            ))
        };
    }
    Ok(text.to_string())
}

fn is_control_other_than_tab(ch: char) -> bool {
    ch != '\t' && (ch < '\u{0020}' || ch == '\u{007f}')
}
