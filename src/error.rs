//! Error types for TOML decoding and encoding.
//!
//! Two kinds of failure exist, and both are fatal to the operation that
//! produced them:
//!
//! - [`Error::Parse`]: a malformed literal at decode time (unterminated
//!   quotes, unknown escapes, invalid Unicode escapes, unrecognized bare
//!   tokens, unbalanced array quoting, unparseable date-times). Carries the
//!   source line number of the offending literal.
//! - [`Error::Write`]: an in-memory value that cannot be represented under
//!   the active output rules (multiline strings, forbidden characters in a
//!   literal string).
//!
//! There is no partial or best-effort output: a value either decodes or
//! serializes completely, or the whole call fails. Callers are expected to
//! surface the message and line number to the end user unmodified.
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{TomlValue, TomlOptions, Error};
//!
//! let result = TomlValue::from_literal("\"a\\qb\"", 3, &TomlOptions::default());
//! match result {
//!     Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
//!     _ => panic!("expected a parse error"),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced by the decoder and the writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A malformed literal encountered while decoding.
    #[error("line {line}: {msg}")]
    Parse { msg: String, line: usize },

    /// A value whose in-memory state cannot be serialized under the current
    /// output configuration.
    #[error("{msg}")]
    Write { msg: String },
}

impl Error {
    /// Creates a parse error for the given source line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::Error;
    ///
    /// let err = Error::parse("unexpected token", 10);
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn parse(msg: impl Into<String>, line: usize) -> Self {
        Error::Parse {
            msg: msg.into(),
            line,
        }
    }

    /// Creates a writing error.
    pub fn write(msg: impl Into<String>) -> Self {
        Error::Write { msg: msg.into() }
    }

    /// Returns the source line for parse errors, `None` for writing errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            Error::Write { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_reports_line() {
        let err = Error::parse("bad literal", 42);
        assert_eq!(err.line(), Some(42));
        assert_eq!(err.to_string(), "line 42: bad literal");
    }

    #[test]
    fn write_error_has_no_line() {
        let err = Error::write("cannot serialize");
        assert_eq!(err.line(), None);
        assert_eq!(err.to_string(), "cannot serialize");
    }
}
