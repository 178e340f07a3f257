//! The typed value model and its literal decoder.
//!
//! A [`TomlValue`] is one decoded value node of the document tree. The kind
//! set is closed — see [`ValueKind`] — so every consumer (the decoder, the
//! writer, the array sub-parser) matches exhaustively at compile time.
//!
//! ## Decoding
//!
//! The external document parser hands over the raw literal substring of one
//! value plus its source line; [`TomlValue::from_literal`] dispatches on the
//! literal's delimiting characters and constructs the matching node:
//!
//! ```rust
//! use toml_tree::{TomlValue, TomlOptions};
//!
//! let options = TomlOptions::default();
//! let value = TomlValue::from_literal("\"hello\\nworld\"", 1, &options).unwrap();
//! assert_eq!(value.as_str(), Some("hello\nworld"));
//!
//! let value = TomlValue::from_literal("[1, 2, [3, 4]]", 1, &options).unwrap();
//! assert_eq!(value.as_array().unwrap().len(), 3);
//! ```
//!
//! Construction is atomic: a value node with invalid content never exists.
//! Content is fully decoded — no residual escapes, quotes, or brackets.
//!
//! ## Writing
//!
//! [`TomlValue::write`] re-emits the node through a [`TomlEmitter`]. The
//! output is logically equivalent to the source literal, not necessarily
//! byte-identical (escapes are normalized, offsets collapse to UTC).

use crate::array;
use crate::datetime::TomlDateTime;
use crate::emitter::TomlEmitter;
use crate::error::{Error, Result};
use crate::escape;
use crate::options::TomlOptions;

/// One decoded value node, tagged by kind, with the source line attached for
/// diagnostics. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct TomlValue {
    kind: ValueKind,
    line: usize,
}

/// The closed set of value kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    /// Single-quoted string; no escapes except the optional `\'` extension.
    LiteralString(String),
    /// Double-quoted string with backslash escapes.
    BasicString(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// IEEE-754 binary64 float.
    Float(f64),
    Boolean(bool),
    DateTime(TomlDateTime),
    /// `null`, `nil` (case-insensitive) or an empty literal.
    Null,
    /// Ordered, possibly heterogeneous and nested, element sequence.
    Array(Vec<TomlValue>),
}

impl TomlValue {
    /// Wraps an already-decoded kind with its source line.
    #[must_use]
    pub fn new(kind: ValueKind, line: usize) -> Self {
        TomlValue { kind, line }
    }

    /// Decodes a raw value literal into a typed node.
    ///
    /// Dispatch order: the empty literal and `null`/`nil`
    /// (case-insensitive) are null; exact `true`/`false` are booleans; a
    /// leading `'`, `"` or `[` selects literal string, basic string, or
    /// array; any other bare token is tried as integer, then float, then
    /// date-time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for mismatched quotes, malformed content, or
    /// a bare token matching none of the typed grammars.
    pub fn from_literal(raw: &str, line: usize, options: &TomlOptions) -> Result<Self> {
        let literal = raw.trim();

        if literal.is_empty()
            || literal.eq_ignore_ascii_case("null")
            || literal.eq_ignore_ascii_case("nil")
        {
            return Ok(Self::null(line));
        }
        if literal == "true" || literal == "false" {
            return Self::boolean(literal, line);
        }

        match literal.chars().next() {
            Some('\'') => Self::literal_string(literal, line, options),
            Some('"') => Self::basic_string(literal, line),
            Some('[') => Self::array(literal, line, options),
            _ => Self::bare_token(literal, line),
        }
    }

    /// Decodes a single-quoted literal string.
    ///
    /// The only permitted escape is `\'`, and only when
    /// [`TomlOptions::allow_escaped_quotes_in_literal_strings`] is set; any
    /// other single quote inside the content means the closing quote came
    /// too early.
    pub fn literal_string(raw: &str, line: usize, options: &TomlOptions) -> Result<Self> {
        let content = trim_matching(raw, '\'').ok_or_else(|| {
            Error::parse(
                format!(
                    "literal strings should be wrapped (start and end) in single quotes (''), \
                     missing closing quote in <{raw}>"
                ),
                line,
            )
        })?;

        let chars: Vec<char> = content.chars().collect();
        for (i, ch) in chars.iter().enumerate() {
            if *ch == '\'' {
                let escaped = i > 0 && chars[i - 1] == '\\';
                if !(escaped && options.allow_escaped_quotes_in_literal_strings) {
                    return Err(Error::parse(
                        format!("unterminated literal string <{raw}>"),
                        line,
                    ));
                }
            }
        }

        let content = if options.allow_escaped_quotes_in_literal_strings {
            escape::unescape_literal(content)
        } else {
            content.to_string()
        };
        Ok(Self::new(ValueKind::LiteralString(content), line))
    }

    /// Decodes a double-quoted basic string, applying the escape codec.
    pub fn basic_string(raw: &str, line: usize) -> Result<Self> {
        let content = trim_matching(raw, '"').ok_or_else(|| {
            Error::parse(
                format!(
                    "basic strings should be wrapped (start and end) in double quotes (\"\"), \
                     missing closing quote in <{raw}>"
                ),
                line,
            )
        })?;

        let chars: Vec<char> = content.chars().collect();
        for (i, ch) in chars.iter().enumerate() {
            if *ch == '"' && (i == 0 || chars[i - 1] != '\\') {
                return Err(Error::parse(
                    format!("unescaped double quote at position {i} in <{raw}>"),
                    line,
                ));
            }
        }

        let content = escape::unescape_basic(content, line)?;
        Ok(Self::new(ValueKind::BasicString(content), line))
    }

    /// Decodes a decimal integer literal.
    pub fn integer(raw: &str, line: usize) -> Result<Self> {
        let parsed = raw.trim().parse::<i64>().map_err(|_| {
            Error::parse(format!("cannot parse <{raw}> as a 64-bit integer"), line)
        })?;
        Ok(Self::new(ValueKind::Integer(parsed), line))
    }

    /// Decodes a decimal float literal.
    pub fn float(raw: &str, line: usize) -> Result<Self> {
        let parsed = raw.trim().parse::<f64>().map_err(|_| {
            Error::parse(format!("cannot parse <{raw}> as a float"), line)
        })?;
        Ok(Self::new(ValueKind::Float(parsed), line))
    }

    /// Decodes an exact `true`/`false` literal.
    pub fn boolean(raw: &str, line: usize) -> Result<Self> {
        match raw.trim() {
            "true" => Ok(Self::new(ValueKind::Boolean(true), line)),
            "false" => Ok(Self::new(ValueKind::Boolean(false), line)),
            other => Err(Error::parse(
                format!("cannot parse <{other}> as a boolean"),
                line,
            )),
        }
    }

    /// Decodes a date, date-time, or offset date-time literal.
    pub fn date_time(raw: &str, line: usize) -> Result<Self> {
        let parsed = TomlDateTime::parse(raw.trim(), line)?;
        Ok(Self::new(ValueKind::DateTime(parsed), line))
    }

    /// The null sentinel.
    #[must_use]
    pub fn null(line: usize) -> Self {
        Self::new(ValueKind::Null, line)
    }

    /// Decodes a bracketed array literal via the array sub-parser.
    pub fn array(raw: &str, line: usize, options: &TomlOptions) -> Result<Self> {
        let elements = array::parse_array(raw, line, options)?;
        Ok(Self::new(ValueKind::Array(elements), line))
    }

    fn bare_token(literal: &str, line: usize) -> Result<Self> {
        if let Ok(parsed) = literal.parse::<i64>() {
            return Ok(Self::new(ValueKind::Integer(parsed), line));
        }
        if let Ok(parsed) = literal.parse::<f64>() {
            return Ok(Self::new(ValueKind::Float(parsed), line));
        }
        if let Ok(parsed) = TomlDateTime::parse(literal, line) {
            return Ok(Self::new(ValueKind::DateTime(parsed), line));
        }
        Err(Error::parse(
            format!(
                "unrecognized bare value <{literal}>, expected a boolean, number, date-time, \
                 null, or a quoted string"
            ),
            line,
        ))
    }

    /// The source line this value was decoded from.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The decoded kind and content.
    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(
            self.kind,
            ValueKind::LiteralString(_) | ValueKind::BasicString(_)
        )
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.kind, ValueKind::Array(_))
    }

    /// Decoded text of either string kind.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::LiteralString(s) | ValueKind::BasicString(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.kind {
            ValueKind::Integer(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Float(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ValueKind::Boolean(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date_time(&self) -> Option<&TomlDateTime> {
        match &self.kind {
            ValueKind::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[TomlValue]> {
        match &self.kind {
            ValueKind::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Serializes this value through the emitter.
    ///
    /// `multiline` only affects arrays; requesting it for a string kind is a
    /// writing error since multiline strings are not yet supported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the in-memory state cannot be
    /// represented under the active options.
    pub fn write(
        &self,
        emitter: &mut dyn TomlEmitter,
        options: &TomlOptions,
        multiline: bool,
    ) -> Result<()> {
        match &self.kind {
            ValueKind::LiteralString(content) => {
                if multiline {
                    return Err(Error::write("multiline strings are not yet supported"));
                }
                let escaped = escape::escape_literal(content, options)?;
                emitter.emit_quoted_value(&escaped, true);
                Ok(())
            }
            ValueKind::BasicString(content) => {
                if multiline {
                    return Err(Error::write("multiline strings are not yet supported"));
                }
                emitter.emit_quoted_value(&escape::escape_basic(content), false);
                Ok(())
            }
            ValueKind::Integer(v) => {
                emitter.emit_integer(*v);
                Ok(())
            }
            ValueKind::Float(v) => {
                emitter.emit_float(*v);
                Ok(())
            }
            ValueKind::Boolean(v) => {
                emitter.emit_boolean(*v);
                Ok(())
            }
            ValueKind::DateTime(dt) => {
                match dt {
                    TomlDateTime::Offset(instant) => emitter.emit_offset_date_time(instant),
                    TomlDateTime::Local(local) => emitter.emit_local_date_time(local),
                    TomlDateTime::Date(date) => emitter.emit_local_date(date),
                }
                Ok(())
            }
            ValueKind::Null => {
                emitter.emit_null();
                Ok(())
            }
            ValueKind::Array(elements) => array::write_array(elements, emitter, options, multiline),
        }
    }
}

/// Strips one matching quote character from both ends, or `None` when either
/// is missing.
fn trim_matching(raw: &str, quote: char) -> Option<&str> {
    if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
        Some(&raw[quote.len_utf8()..raw.len() - quote.len_utf8()])
    } else {
        None
    }
}
