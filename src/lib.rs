//! # toml_tree
//!
//! A strict codec for the value model and table tree of a TOML document.
//!
//! This crate is the typed core that sits between a document tokenizer and a
//! text emitter: it turns raw value literals into typed, fully-decoded nodes
//! and renders those nodes back into conforming text. The surrounding pieces
//! — the line reader that discovers section headers and key/value pairs, and
//! the emitter that owns indentation and delimiters — are the caller's; this
//! crate only consumes literal substrings and writes through the abstract
//! [`TomlEmitter`] sink.
//!
//! ## Key Pieces
//!
//! - [`TomlValue`] / [`ValueKind`]: the closed set of value kinds (strings,
//!   integer, float, boolean, date-time, null, array), each holding decoded
//!   native content
//! - [`TomlDateTime`]: offset instant, local date-time, or local date, with
//!   ordered-fallback parsing
//! - [`TomlTable`] / [`TableChild`]: one table of the hierarchy and the
//!   policy deciding whether its header must be written
//! - [`TomlEmitter`] / [`BufferedEmitter`]: the output seam
//! - [`TomlOptions`]: the single configuration type
//!
//! ## Quick Start
//!
//! ```rust
//! use toml_tree::{parse_literal, write_value_to_string, TomlOptions};
//!
//! let options = TomlOptions::default();
//!
//! let value = parse_literal("[1, 2, [3, 4]]", 1, &options).unwrap();
//! assert_eq!(value.as_array().unwrap().len(), 3);
//!
//! let text = write_value_to_string(&value, &options).unwrap();
//! assert_eq!(text, "[ 1, 2, [ 3, 4 ] ]");
//! ```
//!
//! ## Strictness
//!
//! Decoding is strict: malformed literals fail with [`Error::Parse`]
//! carrying the source line, and a node with invalid content never exists.
//! Writing is all-or-nothing: a value either serializes completely or the
//! call fails with [`Error::Write`]. Round-trips are faithful in meaning —
//! escapes are normalized and offsets collapse to UTC, so output is
//! logically equivalent to the source, not necessarily byte-identical.
//!
//! ## Concurrency
//!
//! Every node is immutable once constructed and decoding keeps no shared
//! state, so read-only traversal and parsing of independent literals are
//! safe to run in parallel. Recursion depth equals the nesting depth of the
//! input; nothing blocks on I/O.

mod array;
pub mod datetime;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod options;
pub mod table;
pub mod value;

pub use datetime::TomlDateTime;
pub use emitter::{BufferedEmitter, TomlEmitter};
pub use error::{Error, Result};
pub use options::TomlOptions;
pub use table::{is_explicit_table, TableChild, TableType, TomlTable};
pub use value::{TomlValue, ValueKind};

/// Decodes one raw value literal into a typed node.
///
/// Thin wrapper around [`TomlValue::from_literal`] for callers that prefer a
/// free function.
///
/// # Errors
///
/// Returns [`Error::Parse`] for any malformed literal.
pub fn parse_literal(raw: &str, line: usize, options: &TomlOptions) -> Result<TomlValue> {
    TomlValue::from_literal(raw, line, options)
}

/// Serializes a single value to a string through a [`BufferedEmitter`].
///
/// # Errors
///
/// Returns [`Error::Write`] when the value cannot be represented under the
/// given options.
pub fn write_value_to_string(value: &TomlValue, options: &TomlOptions) -> Result<String> {
    let mut emitter = BufferedEmitter::new();
    value.write(&mut emitter, options, false)?;
    Ok(emitter.into_string())
}

/// Serializes a table subtree to a string through a [`BufferedEmitter`].
///
/// # Errors
///
/// Returns [`Error::Write`] when any contained value cannot be represented
/// under the given options.
pub fn write_table_to_string(table: &TomlTable, options: &TomlOptions) -> Result<String> {
    let mut emitter = BufferedEmitter::new();
    table.write(&mut emitter, options)?;
    Ok(emitter.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_write_round_trip() {
        let options = TomlOptions::default();
        let value = parse_literal("\"round trip\"", 1, &options).unwrap();
        let text = write_value_to_string(&value, &options).unwrap();
        assert_eq!(text, "\"round trip\"");
        assert_eq!(parse_literal(&text, 1, &options).unwrap(), value);
    }

    #[test]
    fn table_render_through_helper() {
        let options = TomlOptions::default();
        let mut table = TomlTable::new("a", 1, TableType::Primitive, false);
        table.push_child(TableChild::pair(
            "x",
            parse_literal("1", 1, &options).unwrap(),
        ));
        assert_eq!(
            write_table_to_string(&table, &options).unwrap(),
            "[a]\n    x = 1"
        );
    }
}
